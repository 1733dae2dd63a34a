//! Suggestion generation — orchestrates the full pipeline.
//!
//! Flow: build prompt → completion call → parse JSON → validate/coerce →
//! clamp prices to budget → sort by price descending.
//!
//! The pipeline never fails. Any provider, parse, or shape error degrades to
//! the fixed fallback list, tagged so callers can tell the difference. One
//! attempt per invocation: no retry, no caching, no de-duplication of
//! overlapping calls.

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{CompletionProvider, LlmError};
use crate::suggestions::fallback::fallback_suggestions;
use crate::suggestions::models::{GiftResponse, SuggestionOutcome, SuggestionRequest};
use crate::suggestions::prompts::{build_prompt, SUGGESTION_SYSTEM};
use crate::suggestions::validate::validate_response;

/// Sampling temperature for the completion call.
const TEMPERATURE: f32 = 0.8;
/// Raised slightly when the creative surprise slot is requested.
const SURPRISE_TEMPERATURE: f32 = 0.9;

#[derive(Debug, Error)]
enum GenerationError {
    #[error("completion provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("malformed model JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{0}")]
    Shape(String),
}

/// Runs the suggestion pipeline for one request.
///
/// Always returns a full suggestion list — generated when everything checks
/// out, the static fallback otherwise. The failure reason is carried on the
/// outcome and logged, never raised.
pub async fn generate_suggestions(
    llm: &dyn CompletionProvider,
    request: &SuggestionRequest,
) -> SuggestionOutcome {
    match generate(llm, request).await {
        Ok(data) => {
            info!("Generated {} suggestions", data.suggestions.len());
            SuggestionOutcome::Generated { data }
        }
        Err(e) => {
            warn!("Suggestion generation failed, serving fallback: {e}");
            SuggestionOutcome::Fallback {
                data: fallback_suggestions(request.locale),
                reason: e.to_string(),
            }
        }
    }
}

async fn generate(
    llm: &dyn CompletionProvider,
    request: &SuggestionRequest,
) -> Result<GiftResponse, GenerationError> {
    let prompt = build_prompt(request);
    let temperature = if request.include_surprise {
        SURPRISE_TEMPERATURE
    } else {
        TEMPERATURE
    };

    let content = llm.complete(SUGGESTION_SYSTEM, &prompt, temperature).await?;

    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let mut suggestions = validate_response(&raw, request.expected_count(), request.locale)
        .map_err(GenerationError::Shape)?;

    for suggestion in &mut suggestions {
        suggestion.price = suggestion.price.min(request.budget);
    }
    suggestions.sort_by(|a, b| b.price.total_cmp(&a.price));

    Ok(GiftResponse { suggestions })
}
