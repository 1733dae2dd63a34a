use serde::Deserialize;

/// Request locale, passed explicitly with each call so the pipeline has no
/// hidden dependency on process-wide UI state. Drives the prompt language
/// and the Amazon country domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    /// Parses a BCP 47-style tag, ignoring any region subtag ("it-IT" → It).
    /// Unrecognized languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.split('-').next().unwrap_or_default().trim() {
            t if t.eq_ignore_ascii_case("it") => Locale::It,
            _ => Locale::En,
        }
    }

    /// Country domain used for Amazon search links.
    pub fn amazon_domain(self) -> &'static str {
        match self {
            Locale::En => "com",
            Locale::It => "it",
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_plain_language() {
        assert_eq!(Locale::from_tag("it"), Locale::It);
        assert_eq!(Locale::from_tag("en"), Locale::En);
    }

    #[test]
    fn test_from_tag_strips_region_subtag() {
        assert_eq!(Locale::from_tag("it-IT"), Locale::It);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
    }

    #[test]
    fn test_from_tag_unknown_language_falls_back_to_english() {
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_amazon_domain_table() {
        assert_eq!(Locale::En.amazon_domain(), "com");
        assert_eq!(Locale::It.amazon_domain(), "it");
    }

    #[test]
    fn test_deserializes_from_json_string() {
        let locale: Locale = serde_json::from_str(r#""it-IT""#).unwrap();
        assert_eq!(locale, Locale::It);
    }
}
