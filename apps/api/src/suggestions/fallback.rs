//! Static fallback suggestions returned when generation fails for any reason.
//!
//! The caller never sees an error from the pipeline — it sees this list,
//! tagged as a fallback. Same fixed set every time; links still go through
//! the regular formatter so Amazon items point at the request locale's domain.

use crate::locale::Locale;
use crate::marketplace::{search_url, Source};
use crate::suggestions::models::{GiftResponse, GiftSuggestion};

pub fn fallback_suggestions(locale: Locale) -> GiftResponse {
    let examples: [(&str, &str, f64, &str, [&str; 3], Source); 3] = [
        (
            "🎮",
            "8BitDo Pro 2 Bluetooth Controller",
            55.0,
            "Premium retro-style controller with customizable buttons, motion controls, and \
             wide compatibility. Perfect for both classic gaming enthusiasts and modern players \
             who appreciate quality hardware.",
            ["Gamer", "Tech lover", "Retro fan"],
            Source::Amazon,
        ),
        (
            "🎨",
            "Custom Portrait Digital Art Commission",
            45.0,
            "Unique, personalized digital artwork created by a professional artist in your \
             chosen style. Includes multiple revisions and high-resolution files ready for \
             printing or digital display.",
            ["Art lover", "Unique gift", "Custom made"],
            Source::Etsy,
        ),
        (
            "📘",
            "The Art of Horizon Forbidden West",
            69.0,
            "Deluxe hardcover art book featuring stunning concept art, character designs, and \
             world-building from the acclaimed game. A must-have for fans of gaming art and \
             sci-fi aesthetics.",
            ["Art lover", "Game fan", "Collector"],
            Source::Amazon,
        ),
    ];

    GiftResponse {
        suggestions: examples
            .into_iter()
            .map(|(emoji, title, price, description, topics, source)| GiftSuggestion {
                emoji: emoji.to_string(),
                title: title.to_string(),
                price,
                description: description.to_string(),
                topics: topics.iter().map(|t| t.to_string()).collect(),
                buy_link: search_url(title, source, locale),
                source,
            })
            .collect(),
    }
}
