use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_yaml::Value;

use super::LocaleFileParser;
use crate::core::LocaleDocument;

/// Parser for `.yml` / `.yaml` locale files.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlLocaleParser;

impl LocaleFileParser for YamlLocaleParser {
    fn parse(&self, path: &Path, content: &str) -> Result<LocaleDocument> {
        if content.trim().is_empty() {
            return Ok(LocaleDocument::empty());
        }

        let yaml: Value = serde_yaml::from_str(content)
            .with_context(|| format!("Failed to parse YAML file: {:?}", path))?;

        match yaml {
            Value::Mapping(_) => Ok(to_document(yaml)?.unwrap_or_else(LocaleDocument::empty)),
            Value::Null => Ok(LocaleDocument::empty()),
            _ => bail!("Expected a mapping at the root of {:?}", path),
        }
    }
}

fn to_document(value: Value) -> Result<Option<LocaleDocument>> {
    let doc = match value {
        Value::Mapping(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, val) in map {
                let key = scalar_key(key)?;
                if let Some(doc) = to_document(val)? {
                    entries.push((key, doc));
                }
            }
            Some(LocaleDocument::Map(entries))
        }
        Value::String(s) => Some(LocaleDocument::Text(s)),
        Value::Number(n) => Some(LocaleDocument::Text(n.to_string())),
        Value::Bool(b) => Some(LocaleDocument::Text(b.to_string())),
        Value::Sequence(seq) if seq.is_empty() => None,
        Value::Sequence(seq) if seq.iter().all(Value::is_string) => {
            let values: Vec<&str> = seq.iter().filter_map(Value::as_str).collect();
            Some(LocaleDocument::Text(values.join(", ")))
        }
        Value::Sequence(seq) => {
            let mut entries = Vec::with_capacity(seq.len());
            for (index, val) in seq.into_iter().enumerate() {
                if let Some(doc) = to_document(val)? {
                    entries.push((index.to_string(), doc));
                }
            }
            Some(LocaleDocument::Map(entries))
        }
        Value::Tagged(tagged) => to_document(tagged.value)?,
        Value::Null => None,
    };
    Ok(doc)
}

fn scalar_key(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => bail!("Unsupported YAML mapping key: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::parsers::yaml::*;

    fn parse(content: &str) -> Result<LocaleDocument> {
        YamlLocaleParser.parse(Path::new("en.yml"), content)
    }

    #[test]
    fn test_nested_mapping() {
        let doc = parse("menu:\n  title: Menu\n  close: Close\nbye: Bye\n").unwrap();
        assert_eq!(
            doc,
            LocaleDocument::map([
                (
                    "menu",
                    LocaleDocument::map([
                        ("title", LocaleDocument::text("Menu")),
                        ("close", LocaleDocument::text("Close")),
                    ])
                ),
                ("bye", LocaleDocument::text("Bye")),
            ])
        );
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(parse("").unwrap(), LocaleDocument::empty());
        assert_eq!(parse("~\n").unwrap(), LocaleDocument::empty());
    }

    #[test]
    fn test_root_sequence_fails() {
        assert!(parse("- a\n- b\n").is_err());
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let err = parse("a: [unclosed\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML file"));
    }
}
