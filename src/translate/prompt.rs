//! Prompt construction and model output parsing

use crate::planner::StructuredQuery;
use crate::schema::SchemaRegistry;

use super::errors::{TranslationError, TranslationResult};

const OUTPUT_CONTRACT: &str = r#"Return JSON with:
{
  "originalQuery": string,
  "filters": array of conditions (e.g., ["price > 500", "region == 'Europe'"]),
  "fields": array of fields to return (empty means all),
  "sort": {field: string, order: "asc"|"desc"} | null,
  "limit": number | null
}

Only respond with valid JSON. Example:
{
  "originalQuery": "Show me software products in Europe",
  "filters": ["category == 'Software'", "region == 'Europe'"],
  "fields": ["product", "price"],
  "sort": null,
  "limit": null
}"#;

/// Builds the translation prompt for one question
pub fn build_prompt(registry: &SchemaRegistry, question: &str) -> String {
    format!(
        "You are a data query translator. Convert this natural language query into a structured JSON format:\n\n\
         QUERY: \"{}\"\n\n\
         Our database has these fields in each record:\n{}\n\n{}\n",
        question,
        registry.describe(),
        OUTPUT_CONTRACT
    )
}

/// Removes Markdown code fences the model sometimes wraps output in
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

/// Parses model output into a structured query.
///
/// A missing `originalQuery` is filled with the question.
pub fn parse_model_output(text: &str, question: &str) -> TranslationResult<StructuredQuery> {
    let json = strip_code_fences(text);
    if json.is_empty() {
        return Err(TranslationError::EmptyResponse);
    }

    let mut query: StructuredQuery = serde_json::from_str(json)?;
    if query.original_query.is_empty() {
        query.original_query = question.to_string();
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_question_and_schema() {
        let prompt = build_prompt(&SchemaRegistry::products(), "top sellers in Asia");
        assert!(prompt.contains("QUERY: \"top sellers in Asia\""));
        assert!(prompt.contains("- units_sold (number)"));
        assert!(prompt.contains("- date (string: YYYY-MM-DD)"));
        assert!(prompt.contains("Only respond with valid JSON"));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn test_parse_fenced_output() {
        let text = "```json\n{\"originalQuery\":\"q\",\"filters\":[\"price > 5\"],\"fields\":[],\"sort\":null,\"limit\":3}\n```";
        let query = parse_model_output(text, "q").unwrap();
        assert_eq!(query.filters, vec!["price > 5"]);
        assert_eq!(query.limit, Some(3));
    }

    #[test]
    fn test_missing_original_query_filled() {
        let query = parse_model_output("{\"filters\":[]}", "cheap add-ons").unwrap();
        assert_eq!(query.original_query, "cheap add-ons");
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = parse_model_output("Sure! Here are the products.", "q").unwrap_err();
        assert!(matches!(err, TranslationError::MalformedResponse(_)));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = parse_model_output("{\"filters\": \"price > 5\"}", "q").unwrap_err();
        assert!(matches!(err, TranslationError::MalformedResponse(_)));
    }

    #[test]
    fn test_empty_output() {
        let err = parse_model_output("```json\n```", "q").unwrap_err();
        assert!(matches!(err, TranslationError::EmptyResponse));
    }
}
