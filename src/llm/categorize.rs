//! LLM-backed discussion categorization

use tracing::debug;

use crate::errors::ChainRagError;
use crate::errors::Result;
use crate::llm::ChatMessage;
use crate::llm::ChatModel;
use crate::llm::ChatOptions;

/// The fixed set of categories a discussion can be classified into.
pub const CATEGORIES: [&str; 5] = ["Solidity", "Rust", "Ethereum", "Solana", "Skale Network"];

/// Maximum number of categories returned for one text.
const MAX_CATEGORIES: usize = 3;

/// Classify `text` into at most three of the fixed blockchain categories.
///
/// Text unrelated to blockchain yields an empty list. The call runs at
/// temperature 0 so the classification is as stable as the model allows.
///
/// # Errors
///
/// Returns an error if the completion call fails or the model reply does
/// not contain a JSON string array.
pub async fn categorize_text(chat: &dyn ChatModel, model: &str, text: &str) -> Result<Vec<String>> {
    let prompt = build_categorize_prompt(text);
    let options = ChatOptions {
        temperature: Some(0.0),
        ..ChatOptions::default()
    };

    let reply = chat
        .complete(model, vec![ChatMessage::user(prompt)], options)
        .await?;
    let categories = parse_category_array(&reply.content)?;
    debug!("Categorized text into {:?}", categories);

    Ok(categories)
}

fn build_categorize_prompt(text: &str) -> String {
    format!(
        r#"Given the following text, classify it into relevant blockchain-related categories.
Select up to {MAX_CATEGORIES} categories from this list: {}.
If the text is not related to blockchain, return an empty list.

Text: "{text}"

Respond ONLY with a JSON array, e.g., ["Solidity", "Ethereum"], or [] if no relevant category exists."#,
        CATEGORIES.join(", ")
    )
}

/// Extract a JSON string array from a model reply, tolerating surrounding
/// prose and markdown code fences.
fn parse_category_array(reply: &str) -> Result<Vec<String>> {
    let json_str = match (reply.find('['), reply.rfind(']')) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => {
            return Err(ChainRagError::InvalidResponse(format!(
                "expected a JSON array, got: {reply}"
            )))
        }
    };

    let categories: Vec<String> = serde_json::from_str(json_str).map_err(|e| {
        ChainRagError::InvalidResponse(format!("failed to parse category array: {e}"))
    })?;

    Ok(categories.into_iter().take(MAX_CATEGORIES).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let categories = parse_category_array(r#"["Solidity", "Ethereum"]"#).unwrap();
        assert_eq!(categories, vec!["Solidity", "Ethereum"]);
    }

    #[test]
    fn test_parse_empty_array() {
        let categories = parse_category_array("[]").unwrap();
        assert!(categories.is_empty());
    }

    #[test]
    fn test_parse_fenced_array() {
        let reply = "```json\n[\"Rust\"]\n```";
        let categories = parse_category_array(reply).unwrap();
        assert_eq!(categories, vec!["Rust"]);
    }

    #[test]
    fn test_parse_array_wrapped_in_prose() {
        let reply = r#"Sure! The relevant categories are ["Solana", "Rust"]. Let me know if you need more."#;
        let categories = parse_category_array(reply).unwrap();
        assert_eq!(categories, vec!["Solana", "Rust"]);
    }

    #[test]
    fn test_parse_caps_at_three_categories() {
        let reply = r#"["Solidity", "Rust", "Ethereum", "Solana"]"#;
        let categories = parse_category_array(reply).unwrap();
        assert_eq!(categories.len(), MAX_CATEGORIES);
        assert_eq!(categories, vec!["Solidity", "Rust", "Ethereum"]);
    }

    #[test]
    fn test_parse_rejects_non_array_reply() {
        let result = parse_category_array("I cannot classify this text.");
        assert!(matches!(
            result,
            Err(ChainRagError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_category_array("[not json]");
        assert!(matches!(
            result,
            Err(ChainRagError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_prompt_lists_all_categories() {
        let prompt = build_categorize_prompt("How do I deploy a contract?");
        for category in CATEGORIES {
            assert!(prompt.contains(category));
        }
        assert!(prompt.contains("How do I deploy a contract?"));
    }
}
