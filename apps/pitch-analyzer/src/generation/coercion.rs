//! Text coercion: normalizes whatever the model returned into an ordered list of strings.
//!
//! The model is told to answer with a JSON array but regularly answers with a
//! markdown bullet list, a JSON-encoded string, or a single name. Callers get
//! the same `Vec<String>` regardless of which one happened.

use serde_json::Value;

/// Characters stripped from both ends of each line in the line-based fallback.
const BULLET_CHARS: &[char] = &['-', '•', ' ', '\t'];

/// The shapes a model response can take once it has been fence-stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// Already a list of strings.
    StringArray(Vec<String>),
    /// Text that was not valid JSON (or has not been parsed yet).
    RawText(String),
    /// Any successfully parsed JSON value.
    Structured(Value),
}

impl ParsedValue {
    /// Parses cleaned model text, keeping it as `RawText` when it is not JSON.
    pub fn from_response(cleaned: &str) -> Self {
        match serde_json::from_str::<Value>(cleaned) {
            Ok(value) => ParsedValue::Structured(value),
            Err(_) => ParsedValue::RawText(cleaned.to_string()),
        }
    }
}

impl From<Value> for ParsedValue {
    fn from(value: Value) -> Self {
        ParsedValue::Structured(value)
    }
}

/// Coerces a parsed value into non-empty, trimmed strings, preserving order.
///
/// - sequences: each element stringified and trimmed, empties dropped
/// - non-empty text: parsed as JSON and coerced again; if that fails, split
///   into lines with bullet markers stripped
/// - anything else: empty list
pub fn coerce_string_list(value: ParsedValue) -> Vec<String> {
    match value {
        ParsedValue::StringArray(items) => clean_items(items),
        ParsedValue::Structured(Value::Array(items)) => {
            clean_items(items.iter().map(stringify_element))
        }
        ParsedValue::Structured(Value::String(text)) | ParsedValue::RawText(text) => {
            coerce_text(&text)
        }
        ParsedValue::Structured(_) => Vec::new(),
    }
}

fn coerce_text(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(parsed) => coerce_string_list(ParsedValue::Structured(parsed)),
        Err(_) => text
            .lines()
            .map(|line| line.trim_matches(BULLET_CHARS).trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn clean_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Strings render without quotes; everything else as compact JSON.
pub(crate) fn stringify_element(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coerce_str(s: &str) -> Vec<String> {
        coerce_string_list(ParsedValue::RawText(s.to_string()))
    }

    #[test]
    fn test_markdown_bullets() {
        assert_eq!(coerce_str("- Alice\n- Bob\n"), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_unicode_bullets_and_tabs() {
        assert_eq!(
            coerce_str("• Jane Doe\n\t• John Roe\n\n"),
            vec!["Jane Doe", "John Roe"]
        );
    }

    #[test]
    fn test_empty_json_array() {
        assert!(coerce_str("[]").is_empty());
    }

    #[test]
    fn test_empty_and_blank_strings() {
        assert!(coerce_str("").is_empty());
        assert!(coerce_str("   \n\t").is_empty());
    }

    #[test]
    fn test_json_array_preserves_order() {
        let value = json!(["Zoe", "Adam", "Mia"]);
        assert_eq!(coerce_string_list(value.into()), vec!["Zoe", "Adam", "Mia"]);
    }

    #[test]
    fn test_array_elements_trimmed_and_empties_dropped() {
        let value = json!(["  Alice ", "", "   ", "Bob"]);
        assert_eq!(coerce_string_list(value.into()), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_non_string_elements_stringified() {
        let value = json!(["Alice", 42, null, true]);
        assert_eq!(coerce_string_list(value.into()), vec!["Alice", "42", "true"]);
    }

    #[test]
    fn test_string_wrapped_array_matches_direct_array() {
        let direct = coerce_string_list(json!(["Alice", "Bob"]).into());
        let wrapped = coerce_string_list(json!("[\"Alice\", \"Bob\"]").into());
        let raw = coerce_str("[\"Alice\", \"Bob\"]");
        assert_eq!(direct, wrapped);
        assert_eq!(direct, raw);
    }

    #[test]
    fn test_json_string_scalar_becomes_single_item() {
        assert_eq!(coerce_str("\"Alice Smith\""), vec!["Alice Smith"]);
    }

    #[test]
    fn test_non_list_json_is_empty() {
        assert!(coerce_string_list(json!({"founders": ["Alice"]}).into()).is_empty());
        assert!(coerce_string_list(json!(7).into()).is_empty());
        assert!(coerce_string_list(Value::Null.into()).is_empty());
        assert!(coerce_str("7").is_empty());
    }

    #[test]
    fn test_string_array_variant() {
        let value = ParsedValue::StringArray(vec![" Alice".into(), "".into()]);
        assert_eq!(coerce_string_list(value), vec!["Alice"]);
    }

    #[test]
    fn test_from_response_keeps_invalid_json_as_raw_text() {
        assert_eq!(
            ParsedValue::from_response("- Alice"),
            ParsedValue::RawText("- Alice".to_string())
        );
        assert_eq!(
            ParsedValue::from_response("[\"Alice\"]"),
            ParsedValue::Structured(json!(["Alice"]))
        );
    }

    #[test]
    fn test_output_always_trimmed_and_non_empty() {
        let inputs = [
            "- Alice\n-\n - Bob - \n",
            "[\" a \", \" \"]",
            "\"\"",
            "plain name",
            "[[\"nested\"]]",
        ];
        for input in inputs {
            for item in coerce_str(input) {
                assert!(!item.is_empty(), "input {input:?}");
                assert_eq!(item, item.trim(), "input {input:?}");
            }
        }
    }
}
