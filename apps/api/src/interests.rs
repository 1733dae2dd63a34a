//! Interest extraction — maps a free-text recipient description to the
//! interest chips the UI seeds the form with.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const MAX_INTERESTS: usize = 6;

/// Keyword stems matched case-insensitively as substrings, each expanding to
/// a fixed set of interest tags. "hik" intentionally catches hike/hiking.
const KEYWORD_MATCHES: &[(&str, &[&str])] = &[
    ("draw", &["Arte", "Design", "Creatività"]),
    ("paint", &["Arte", "Creatività", "Design"]),
    ("hik", &["Montagna", "Natura", "Sport"]),
    ("read", &["Libri", "Cultura", "Letteratura"]),
    ("cook", &["Cucina", "Gastronomia", "Food"]),
    ("game", &["Videogiochi", "Gaming", "Tech"]),
    ("photo", &["Fotografia", "Arte", "Tech"]),
    ("music", &["Musica", "Arte", "Intrattenimento"]),
    ("tech", &["Tecnologia", "Innovazione", "Gadget"]),
    ("travel", &["Viaggi", "Avventura", "Cultura"]),
    ("sport", &["Sport", "Fitness", "Benessere"]),
    ("fashion", &["Moda", "Style", "Design"]),
];

/// Extracts interest tags from a description, de-duplicated in first-match
/// order and capped at [`MAX_INTERESTS`].
pub fn extract_interests(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut matched: Vec<String> = Vec::new();

    for (keyword, interests) in KEYWORD_MATCHES {
        if !lowered.contains(keyword) {
            continue;
        }
        for interest in *interests {
            if !matched.iter().any(|m| m == interest) {
                matched.push((*interest).to_string());
            }
        }
    }

    matched.truncate(MAX_INTERESTS);
    matched
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub interests: Vec<String>,
}

/// POST /api/v1/interests/extract
///
/// Lets the client pre-fill interest chips from whatever the user typed in
/// the description field.
pub async fn handle_extract(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(ExtractResponse {
        interests: extract_interests(&request.text),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tags_for_matched_keywords() {
        let interests = extract_interests("She loves gaming on rainy days");
        assert_eq!(interests, vec!["Videogiochi", "Gaming", "Tech"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let interests = extract_interests("PHOTOGRAPHY is his whole life");
        assert_eq!(interests, vec!["Fotografia", "Arte", "Tech"]);
    }

    #[test]
    fn test_overlapping_tags_are_deduplicated_in_first_match_order() {
        // "draw" and "paint" share Arte/Design/Creatività.
        let interests = extract_interests("loves to draw and paint");
        assert_eq!(interests, vec!["Arte", "Design", "Creatività"]);
    }

    #[test]
    fn test_result_is_capped_at_six() {
        let interests = extract_interests("cooking, hiking, reading and music");
        assert_eq!(interests.len(), 6);
        assert_eq!(
            interests,
            vec!["Montagna", "Natura", "Sport", "Libri", "Cultura", "Letteratura"]
        );
    }

    #[test]
    fn test_no_keywords_yields_empty_list() {
        assert!(extract_interests("completely unrelated text").is_empty());
    }

    #[tokio::test]
    async fn test_handle_extract_rejects_empty_text() {
        let result = handle_extract(Json(ExtractRequest {
            text: "   ".to_string(),
        }))
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_handle_extract_returns_interests() {
        let result = handle_extract(Json(ExtractRequest {
            text: "into tech gadgets".to_string(),
        }))
        .await
        .unwrap();
        assert_eq!(result.0.interests, vec!["Tecnologia", "Innovazione", "Gadget"]);
    }
}
