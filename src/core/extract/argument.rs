//! Reading and classifying the key argument of a translation call.
//!
//! Works on the raw argument text, not an AST: quoted and template literals,
//! `+` concatenation and bracket nesting are recognised, everything else is
//! an unresolved expression.

use crate::core::{DynamicKey, UsageKey};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Expression,
}

/// Read the first argument of a call. `rest` starts right after the `(`.
///
/// Returns `None` if the call is never closed.
pub fn read_first_argument(rest: &str) -> Option<String> {
    let chars: Vec<char> = rest.chars().collect();
    let mut closers: Vec<char> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\'' | '"' | '`' => {
                i = skip_literal(&chars, i)?;
                continue;
            }
            '(' => closers.push(')'),
            '[' => closers.push(']'),
            '{' => closers.push('}'),
            ')' if closers.is_empty() => return Some(collect_trimmed(&chars[..i])),
            ',' if closers.is_empty() => return Some(collect_trimmed(&chars[..i])),
            c @ (')' | ']' | '}') => {
                if closers.pop() != Some(c) {
                    return None;
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Classify an argument as a static key, a dynamic key, or nothing at all.
pub fn classify_argument(argument: &str) -> Option<UsageKey> {
    let argument = argument.trim();
    if argument.is_empty() {
        return None;
    }

    let mut segments: Vec<Segment> = Vec::new();
    for part in split_concatenation(argument) {
        for segment in part_segments(&part) {
            match segment {
                Segment::Literal(next) => {
                    if let Some(Segment::Literal(prev)) = segments.last_mut() {
                        prev.push_str(&next);
                    } else {
                        segments.push(Segment::Literal(next));
                    }
                }
                Segment::Expression => {
                    if segments.last() != Some(&Segment::Expression) {
                        segments.push(Segment::Expression);
                    }
                }
            }
        }
    }

    let has_expression = segments.iter().any(|s| *s == Segment::Expression);
    if !has_expression {
        let key: String = segments
            .into_iter()
            .filter_map(|s| match s {
                Segment::Literal(text) => Some(text),
                Segment::Expression => None,
            })
            .collect();
        return Some(UsageKey::Static(key));
    }

    let prefix = match segments.first() {
        Some(Segment::Literal(text)) => text.clone(),
        _ => String::new(),
    };
    let suffix = match segments.last() {
        Some(Segment::Literal(text)) if segments.len() > 1 => text.clone(),
        _ => String::new(),
    };

    Some(UsageKey::Dynamic(DynamicKey::new(prefix, suffix)))
}

/// Split on top-level `+`.
fn split_concatenation(argument: &str) -> Vec<String> {
    let chars: Vec<char> = argument.chars().collect();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\'' | '"' | '`' => match skip_literal(&chars, i) {
                Some(end) => {
                    i = end;
                    continue;
                }
                None => break,
            },
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '+' if depth == 0 => {
                parts.push(collect_trimmed(&chars[start..i]));
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    parts.push(collect_trimmed(&chars[start..]));
    parts
}

fn part_segments(part: &str) -> Vec<Segment> {
    let chars: Vec<char> = part.chars().collect();
    let Some(&first) = chars.first() else {
        return vec![Segment::Expression];
    };

    if !matches!(first, '\'' | '"' | '`') || skip_literal(&chars, 0) != Some(chars.len()) {
        return vec![Segment::Expression];
    }

    let inner = &chars[1..chars.len() - 1];
    if first != '`' {
        return vec![Segment::Literal(unescape(inner))];
    }

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;
    while i < inner.len() {
        match inner[i] {
            '\\' if i + 1 < inner.len() => {
                literal.push(inner[i + 1]);
                i += 2;
                continue;
            }
            '$' if inner.get(i + 1) == Some(&'{') => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Expression);
                match skip_interpolation(inner, i + 2) {
                    Some(close) => i = close + 1,
                    None => return vec![Segment::Expression],
                }
                continue;
            }
            c => literal.push(c),
        }
        i += 1;
    }
    if !literal.is_empty() || segments.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Index just past the string or template literal opening at `start`.
fn skip_literal(chars: &[char], start: usize) -> Option<usize> {
    let quote = chars[start];
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return Some(i + 1),
            '$' if quote == '`' && chars.get(i + 1) == Some(&'{') => {
                i = skip_interpolation(chars, i + 2)? + 1;
            }
            _ => i += 1,
        }
    }

    None
}

/// Index of the `}` closing an interpolation whose body starts at `start`.
fn skip_interpolation(chars: &[char], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;

    while i < chars.len() {
        match chars[i] {
            '\'' | '"' | '`' => {
                i = skip_literal(chars, i)?;
                continue;
            }
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    None
}

fn unescape(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut iter = chars.iter();
    while let Some(&c) = iter.next() {
        if c == '\\' {
            if let Some(&escaped) = iter.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn collect_trimmed(chars: &[char]) -> String {
    chars.iter().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::extract::argument::*;

    fn dynamic(prefix: &str, suffix: &str) -> Option<UsageKey> {
        Some(UsageKey::Dynamic(DynamicKey::new(prefix, suffix)))
    }

    fn literal(key: &str) -> Option<UsageKey> {
        Some(UsageKey::Static(key.to_string()))
    }

    #[test]
    fn test_read_first_argument() {
        assert_eq!(read_first_argument("'a.b')").as_deref(), Some("'a.b'"));
        assert_eq!(
            read_first_argument("'a.b', { count: 2 })").as_deref(),
            Some("'a.b'")
        );
        assert_eq!(read_first_argument(" key )").as_deref(), Some("key"));
        assert_eq!(read_first_argument(")").as_deref(), Some(""));
    }

    #[test]
    fn test_read_argument_with_nested_punctuation() {
        assert_eq!(
            read_first_argument("'a, b)' + x)").as_deref(),
            Some("'a, b)' + x")
        );
        assert_eq!(
            read_first_argument("`k.${fn(a, b)}`, opts)").as_deref(),
            Some("`k.${fn(a, b)}`")
        );
        assert_eq!(
            read_first_argument("keys[i], 1)").as_deref(),
            Some("keys[i]")
        );
    }

    #[test]
    fn test_read_unterminated_call() {
        assert_eq!(read_first_argument("'a.b'"), None);
        assert_eq!(read_first_argument("'a.b)"), None);
    }

    #[test]
    fn test_classify_quoted_literals() {
        assert_eq!(classify_argument("'menu.title'"), literal("menu.title"));
        assert_eq!(classify_argument("\"menu.title\""), literal("menu.title"));
        assert_eq!(classify_argument("`menu.title`"), literal("menu.title"));
        assert_eq!(classify_argument(r"'it\'s'"), literal("it's"));
    }

    #[test]
    fn test_classify_template_interpolation() {
        assert_eq!(classify_argument("`item_${id}`"), dynamic("item_", ""));
        assert_eq!(classify_argument("`${ns}.title`"), dynamic("", ".title"));
        assert_eq!(
            classify_argument("`status.${a}.${b}.label`"),
            dynamic("status.", ".label")
        );
        assert_eq!(classify_argument("`${key}`"), dynamic("", ""));
    }

    #[test]
    fn test_classify_concatenation() {
        assert_eq!(classify_argument("'menu.' + 'title'"), literal("menu.title"));
        assert_eq!(classify_argument("'item_' + id"), dynamic("item_", ""));
        assert_eq!(
            classify_argument("'status.' + value + '.label'"),
            dynamic("status.", ".label")
        );
        assert_eq!(
            classify_argument("'a.' + `${b}.c`"),
            dynamic("a.", ".c")
        );
    }

    #[test]
    fn test_classify_expressions() {
        assert_eq!(classify_argument("key"), dynamic("", ""));
        assert_eq!(classify_argument("props.label"), dynamic("", ""));
        assert_eq!(classify_argument("getKey('x')"), dynamic("", ""));
        assert_eq!(classify_argument("'a' || b"), dynamic("", ""));
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify_argument(""), None);
        assert_eq!(classify_argument("   "), None);
    }

    #[test]
    fn test_plus_inside_literal_is_not_concatenation() {
        assert_eq!(classify_argument("'a+b'"), literal("a+b"));
    }
}
