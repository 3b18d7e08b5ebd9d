use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::LocaleFileParser;
use crate::core::LocaleDocument;

/// Parser for `.json` locale files.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLocaleParser;

impl LocaleFileParser for JsonLocaleParser {
    fn parse(&self, path: &Path, content: &str) -> Result<LocaleDocument> {
        let json: Value = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

        match json {
            Value::Object(_) => Ok(to_document(json).unwrap_or_else(LocaleDocument::empty)),
            other => bail!(
                "Expected a JSON object at the root of {:?}, found {}",
                path,
                kind(&other)
            ),
        }
    }
}

fn to_document(value: Value) -> Option<LocaleDocument> {
    match value {
        Value::Object(map) => Some(LocaleDocument::Map(
            map.into_iter()
                .filter_map(|(key, val)| to_document(val).map(|doc| (key, doc)))
                .collect(),
        )),
        Value::String(s) => Some(LocaleDocument::Text(s)),
        Value::Number(n) => Some(LocaleDocument::Text(n.to_string())),
        Value::Bool(b) => Some(LocaleDocument::Text(b.to_string())),
        Value::Array(arr) => {
            // Empty arrays don't produce any keys
            if arr.is_empty() {
                return None;
            }

            // String arrays are read as a whole, so they are one key.
            // Object arrays are accessed with indexed keys like items.0.question.
            if arr.iter().all(Value::is_string) {
                let values: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
                return Some(LocaleDocument::Text(values.join(", ")));
            }

            Some(LocaleDocument::Map(
                arr.into_iter()
                    .enumerate()
                    .filter_map(|(index, val)| to_document(val).map(|doc| (index.to_string(), doc)))
                    .collect(),
            ))
        }
        Value::Null => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::parsers::json::*;

    fn parse(content: &str) -> Result<LocaleDocument> {
        JsonLocaleParser.parse(Path::new("en.json"), content)
    }

    #[test]
    fn test_nested_objects_keep_file_order() {
        let doc = parse(r#"{"zeta": "Z", "Common": {"save": "Save", "cancel": "Cancel"}}"#).unwrap();

        assert_eq!(
            doc,
            LocaleDocument::map([
                ("zeta", LocaleDocument::text("Z")),
                (
                    "Common",
                    LocaleDocument::map([
                        ("save", LocaleDocument::text("Save")),
                        ("cancel", LocaleDocument::text("Cancel")),
                    ])
                ),
            ])
        );
    }

    #[test]
    fn test_scalars_become_text() {
        let doc = parse(r#"{"n": 3, "b": true, "missing": null}"#).unwrap();
        assert_eq!(
            doc,
            LocaleDocument::map([
                ("n", LocaleDocument::text("3")),
                ("b", LocaleDocument::text("true")),
            ])
        );
    }

    #[test]
    fn test_arrays() {
        let doc = parse(
            r#"{"benefits": ["Fast", "Safe"], "faq": [{"q": "Why?"}], "none": []}"#,
        )
        .unwrap();

        assert_eq!(
            doc,
            LocaleDocument::map([
                ("benefits", LocaleDocument::text("Fast, Safe")),
                (
                    "faq",
                    LocaleDocument::map([(
                        "0",
                        LocaleDocument::map([("q", LocaleDocument::text("Why?"))])
                    )])
                ),
            ])
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(parse("{}").unwrap(), LocaleDocument::empty());
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = parse(r#"{"a": "#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON file"));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = parse(r#"["a"]"#).unwrap_err();
        assert!(err.to_string().contains("found an array"));
    }
}
