//! Axum route handlers for the Suggestion API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::models::{SuggestionOutcome, SuggestionRequest};
use crate::suggestions::pipeline::generate_suggestions;

/// POST /api/v1/suggestions
///
/// Body validation is the only place this endpoint can reject; once the
/// request is accepted the pipeline always answers 200 with a tagged
/// outcome — generated or fallback.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionOutcome>, AppError> {
    if !request.budget.is_finite() || request.budget <= 0.0 {
        return Err(AppError::Validation(
            "budget must be a positive number".to_string(),
        ));
    }

    let outcome = generate_suggestions(state.llm.as_ref(), &request).await;
    Ok(Json(outcome))
}
