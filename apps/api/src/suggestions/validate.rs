//! Validation and coercion of model-returned suggestions.
//!
//! Field failures split two ways: bad title/price/description reject the
//! whole response (the caller then falls back), while emoji, topics, and
//! source are self-healing and coerce to defaults.

use serde_json::Value;

use crate::locale::Locale;
use crate::marketplace::{search_url, Source};
use crate::suggestions::models::GiftSuggestion;

/// Every suggestion carries exactly this many topic badges.
pub const TOPIC_COUNT: usize = 3;

const DEFAULT_EMOJI: &str = "🎁";
/// Seed topic when the model returned none at all.
const TOPIC_FALLBACK: &str = "Perfect match";
/// Filler used to pad short topic lists up to [`TOPIC_COUNT`].
const TOPIC_FILLER: &str = "Great choice";

/// Validates one raw model item into a [`GiftSuggestion`].
///
/// The buy link is always rebuilt from (title, source, locale); whatever the
/// model put in `buyLink` is discarded.
pub fn validate_suggestion(raw: &Value, locale: Locale) -> Result<GiftSuggestion, String> {
    let mut errors: Vec<&str> = Vec::new();

    let title = raw.get("title").and_then(Value::as_str).unwrap_or_default();
    if title.chars().count() < 5 {
        errors.push("invalid or missing title");
    }

    let price = raw.get("price").and_then(Value::as_f64).unwrap_or_default();
    if price <= 0.0 {
        errors.push("invalid or missing price");
    }

    let description = raw
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if description.chars().count() < 10 {
        errors.push("invalid or missing description");
    }

    if !errors.is_empty() {
        return Err(format!("invalid suggestion format: {}", errors.join(", ")));
    }

    let emoji = raw
        .get("emoji")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_EMOJI)
        .to_string();

    // The model sometimes labels the badges "matches" instead of "topics".
    let mut topics: Vec<String> = raw
        .get("topics")
        .or_else(|| raw.get("matches"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_else(|| vec![TOPIC_FALLBACK.to_string()]);

    while topics.len() < TOPIC_COUNT {
        topics.push(TOPIC_FILLER.to_string());
    }
    topics.truncate(TOPIC_COUNT);

    let source = raw
        .get("source")
        .and_then(Value::as_str)
        .and_then(Source::parse)
        .unwrap_or_default();

    let buy_link = search_url(title, source, locale);

    Ok(GiftSuggestion {
        emoji,
        title: title.to_string(),
        price,
        description: description.to_string(),
        topics,
        buy_link,
        source,
    })
}

/// Validates a full model response against the response-level invariants.
///
/// Rejects on a missing/short/long `suggestions` array or any per-item
/// failure. A missing Etsy item is not a rejection: the second item is
/// coerced to Etsy instead. The index-1 choice is arbitrary.
pub fn validate_response(
    raw: &Value,
    expected_count: usize,
    locale: Locale,
) -> Result<Vec<GiftSuggestion>, String> {
    let items = raw
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or_else(|| "missing or invalid suggestions array".to_string())?;

    if items.len() != expected_count {
        return Err(format!(
            "invalid number of suggestions: expected {expected_count}, got {}",
            items.len()
        ));
    }

    let mut suggestions = items
        .iter()
        .map(|item| validate_suggestion(item, locale))
        .collect::<Result<Vec<_>, _>>()?;

    if !suggestions.iter().any(|s| s.source == Source::Etsy) {
        // expected_count is at least 3, so index 1 always exists here
        let second = &mut suggestions[1];
        second.source = Source::Etsy;
        second.buy_link = search_url(&second.title, Source::Etsy, locale);
    }

    Ok(suggestions)
}
