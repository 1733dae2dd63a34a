//! Prompt constants and builder for gift suggestion generation.

use crate::locale::Locale;
use crate::suggestions::models::SuggestionRequest;

/// System prompt for suggestion generation — never generic, always specific.
pub const SUGGESTION_SYSTEM: &str =
    "You are a gift recommendation expert who specializes in personal, thoughtful product \
    ideas from both Amazon and Etsy. You never return generic items. Always suggest \
    specific, creative gifts that show real understanding of the person's interests.";

/// User prompt template. Placeholders are replaced in [`build_prompt`].
const PROMPT_TEMPLATE: &str = r#"{language_instruction}You are a professional gift recommendation assistant. Generate exactly {count} highly specific, real gift suggestions based on the person's interests and budget. At least one suggestion must be from Etsy.{surprise_note}

Interests: {interests}
Budget: €{budget}{recipient_context}

Follow these strict requirements:
- Suggest {amazon_count} items from Amazon and 1 from Etsy
- Each product must be specific and detailed (brand, model, edition, etc.)
- Products must feel personal and unique, tailored to the user's interests
- Suggest only items that cost less than or equal to €{budget}
- Include a mix of product types and prices (if possible)
- Keep descriptions concise but informative (max 4 lines)
- Focus on what makes each item special and relevant

Format your JSON output as follows:
{
  "suggestions": [
    {
      "emoji": "🎮",
      "title": "Name of Product (brand/model)",
      "price": 49,
      "description": "A concise but detailed description explaining what makes this gift special and perfect for the recipient. Focus on unique features and personal relevance.",
      "topics": ["Short badge 1", "Short badge 2", "Short badge 3"],
      "buyLink": "",
      "source": "Amazon"
    }
  ]
}"#;

const SURPRISE_NOTE: &str = "\nFor the fourth suggestion, be more creative and unexpected \
    while still being relevant. Think outside the box but ensure it would still be appreciated.";

/// Builds the user prompt for a suggestion request.
pub fn build_prompt(request: &SuggestionRequest) -> String {
    let count = request.expected_count();

    let language_instruction = match request.locale {
        Locale::It => "Rispondi in italiano. ",
        Locale::En => "",
    };

    let surprise_note = if request.include_surprise {
        SURPRISE_NOTE
    } else {
        ""
    };

    let recipient_context = request
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!("\nHere is additional context about the recipient: {d}"))
        .unwrap_or_default();

    PROMPT_TEMPLATE
        .replace("{language_instruction}", language_instruction)
        .replace("{count}", &count.to_string())
        .replace("{surprise_note}", surprise_note)
        .replace("{interests}", &request.interests.join(", "))
        .replace("{budget}", &request.budget.to_string())
        .replace("{recipient_context}", &recipient_context)
        .replace("{amazon_count}", &(count - 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(include_surprise: bool, locale: Locale) -> SuggestionRequest {
        SuggestionRequest {
            description: None,
            interests: vec!["gaming".to_string(), "cooking".to_string()],
            budget: 60.0,
            include_surprise,
            locale,
        }
    }

    #[test]
    fn test_prompt_requests_three_suggestions_by_default() {
        let prompt = build_prompt(&request(false, Locale::En));
        assert!(prompt.contains("Generate exactly 3 highly specific"));
        assert!(prompt.contains("Suggest 2 items from Amazon and 1 from Etsy"));
        assert!(!prompt.contains("For the fourth suggestion"));
    }

    #[test]
    fn test_prompt_requests_four_suggestions_with_surprise_note() {
        let prompt = build_prompt(&request(true, Locale::En));
        assert!(prompt.contains("Generate exactly 4 highly specific"));
        assert!(prompt.contains("Suggest 3 items from Amazon and 1 from Etsy"));
        assert!(prompt.contains("For the fourth suggestion, be more creative"));
    }

    #[test]
    fn test_prompt_includes_interests_and_budget() {
        let prompt = build_prompt(&request(false, Locale::En));
        assert!(prompt.contains("Interests: gaming, cooking"));
        assert!(prompt.contains("Budget: €60"));
        assert!(prompt.contains("less than or equal to €60"));
    }

    #[test]
    fn test_prompt_adds_italian_instruction_for_italian_locale() {
        let prompt = build_prompt(&request(false, Locale::It));
        assert!(prompt.starts_with("Rispondi in italiano. "));

        let prompt = build_prompt(&request(false, Locale::En));
        assert!(prompt.starts_with("You are a professional gift recommendation assistant"));
    }

    #[test]
    fn test_prompt_includes_recipient_context_when_present() {
        let mut req = request(false, Locale::En);
        req.description = Some("my brother, loves retro consoles".to_string());
        let prompt = build_prompt(&req);
        assert!(prompt
            .contains("Here is additional context about the recipient: my brother, loves retro consoles"));
    }

    #[test]
    fn test_prompt_omits_context_for_blank_description() {
        let mut req = request(false, Locale::En);
        req.description = Some("   ".to_string());
        let prompt = build_prompt(&req);
        assert!(!prompt.contains("additional context about the recipient"));
    }

    #[test]
    fn test_prompt_keeps_json_schema_braces_intact() {
        let prompt = build_prompt(&request(false, Locale::En));
        assert!(prompt.contains(r#""suggestions": ["#));
        assert!(prompt.contains(r#""source": "Amazon""#));
    }
}
