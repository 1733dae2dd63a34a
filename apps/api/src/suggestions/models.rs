#![allow(dead_code)]

//! Data model for the suggestion pipeline.
//!
//! A request/response pair is ephemeral — built per submission, never
//! persisted here. Saving a chosen suggestion is the hosted backend's job.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::marketplace::Source;

/// A single recommended product. Wire names are camelCase, matching the
/// web client's types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftSuggestion {
    pub emoji: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// Exactly 3 short badges after validation.
    pub topics: Vec<String>,
    /// Rebuilt search URL — model-provided links are never trusted.
    pub buy_link: String,
    pub source: Source,
}

/// Request body for suggestion generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub budget: f64,
    #[serde(default)]
    pub include_surprise: bool,
    /// Explicit per-request locale — prompt language and Amazon domain.
    #[serde(default)]
    pub locale: Locale,
}

impl SuggestionRequest {
    /// 3 suggestions normally, 4 when the surprise slot is requested.
    pub fn expected_count(&self) -> usize {
        if self.include_surprise {
            4
        } else {
            3
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftResponse {
    pub suggestions: Vec<GiftSuggestion>,
}

/// Pipeline outcome. Both variants carry a complete suggestion list; the
/// `kind` tag lets callers and tests tell tailored results from the static
/// fallback without breaking the pipeline's never-fail contract.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SuggestionOutcome {
    Generated { data: GiftResponse },
    Fallback { data: GiftResponse, reason: String },
}

impl SuggestionOutcome {
    pub fn data(&self) -> &GiftResponse {
        match self {
            SuggestionOutcome::Generated { data }
            | SuggestionOutcome::Fallback { data, .. } => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SuggestionOutcome::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_count_without_surprise() {
        let request = SuggestionRequest {
            description: None,
            interests: vec![],
            budget: 50.0,
            include_surprise: false,
            locale: Locale::En,
        };
        assert_eq!(request.expected_count(), 3);
    }

    #[test]
    fn test_expected_count_with_surprise() {
        let request = SuggestionRequest {
            description: None,
            interests: vec![],
            budget: 50.0,
            include_surprise: true,
            locale: Locale::En,
        };
        assert_eq!(request.expected_count(), 4);
    }

    #[test]
    fn test_request_deserializes_camel_case_defaults() {
        let request: SuggestionRequest =
            serde_json::from_str(r#"{"interests": ["gaming"], "budget": 60}"#).unwrap();
        assert_eq!(request.budget, 60.0);
        assert!(!request.include_surprise);
        assert_eq!(request.locale, Locale::En);
        assert!(request.description.is_none());
    }

    #[test]
    fn test_outcome_serializes_with_kind_tag() {
        let outcome = SuggestionOutcome::Fallback {
            data: GiftResponse {
                suggestions: vec![],
            },
            reason: "provider unavailable".to_string(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["kind"], "fallback");
        assert_eq!(value["reason"], "provider unavailable");
        assert!(value["data"]["suggestions"].is_array());
    }
}
