//! Marketplace search links.
//!
//! Model-provided links are never trusted; every suggestion's buy link is
//! rebuilt here from its title and source.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Marketplace a suggestion links out to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[default]
    Amazon,
    Etsy,
}

impl Source {
    /// Strict parse of the two allowed wire values. Anything else is `None`
    /// so the validator can apply its Amazon default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Amazon" => Some(Source::Amazon),
            "Etsy" => Some(Source::Etsy),
            _ => None,
        }
    }
}

/// Builds a marketplace search URL for a suggestion title.
///
/// Pure and idempotent: identical inputs always produce the identical URL.
/// Amazon links use the locale's country domain; Etsy search is global.
pub fn search_url(title: &str, source: Source, locale: Locale) -> String {
    let query = urlencoding::encode(title.trim());

    match source {
        Source::Amazon => format!(
            "https://www.amazon.{}/s?k={}",
            locale.amazon_domain(),
            query
        ),
        Source::Etsy => format!("https://www.etsy.com/search?q={}", query),
    }
}
