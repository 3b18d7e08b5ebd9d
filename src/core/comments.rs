//! Comment stripping for source text.
//!
//! A small state machine over code, comments and string literals. Comment
//! delimiters inside `'...'`, `"..."` or template literals are left alone;
//! code inside `${ ... }` interpolations is scanned again for strings and
//! comments. A `/` where an expression may start opens a regex literal,
//! which is copied through unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    HtmlComment,
    Quoted(char),
    Template,
}

/// Remove `//`, `/* */` and `<!-- -->` comments from `source`.
///
/// Newlines inside removed block comments are kept, so the line of every
/// remaining character is unchanged.
pub fn strip_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    // One entry per open `${`, holding the brace depth inside it.
    let mut interpolations: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::Code => match c {
                '/' if next == Some('/') => {
                    state = State::LineComment;
                    i += 2;
                    continue;
                }
                '/' if next == Some('*') => {
                    state = State::BlockComment;
                    i += 2;
                    continue;
                }
                '/' if regex_allowed(&out) => {
                    match regex_literal_end(&chars, i) {
                        Some(end) => {
                            out.extend(&chars[i..end]);
                            i = end;
                            continue;
                        }
                        None => out.push(c),
                    }
                }
                '<' if starts_with_at(&chars, i, "<!--") => {
                    state = State::HtmlComment;
                    i += 4;
                    continue;
                }
                '\'' | '"' => {
                    state = State::Quoted(c);
                    out.push(c);
                }
                '`' => {
                    state = State::Template;
                    out.push(c);
                }
                '{' => {
                    if let Some(depth) = interpolations.last_mut() {
                        *depth += 1;
                    }
                    out.push(c);
                }
                '}' => {
                    if let Some(depth) = interpolations.last_mut() {
                        if *depth == 0 {
                            interpolations.pop();
                            state = State::Template;
                        } else {
                            *depth -= 1;
                        }
                    }
                    out.push(c);
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                    out.push(c);
                }
            }
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    state = State::Code;
                    i += 2;
                    continue;
                }
                if c == '\n' {
                    out.push(c);
                }
            }
            State::HtmlComment => {
                if starts_with_at(&chars, i, "-->") {
                    state = State::Code;
                    i += 3;
                    continue;
                }
                if c == '\n' {
                    out.push(c);
                }
            }
            State::Quoted(quote) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = next {
                        out.push(escaped);
                        i += 2;
                        continue;
                    }
                } else if c == quote || c == '\n' {
                    // An unterminated quote ends at the line break.
                    state = State::Code;
                }
            }
            State::Template => {
                out.push(c);
                match c {
                    '\\' => {
                        if let Some(escaped) = next {
                            out.push(escaped);
                            i += 2;
                            continue;
                        }
                    }
                    '`' => state = State::Code,
                    '$' if next == Some('{') => {
                        out.push('{');
                        interpolations.push(0);
                        state = State::Code;
                        i += 2;
                        continue;
                    }
                    _ => {}
                }
            }
        }

        i += 1;
    }

    out
}

/// A `/` after one of `( , = : [ ! & | ? { ;`, or first on its line, starts a
/// regex literal rather than a division.
fn regex_allowed(out: &str) -> bool {
    match out.chars().rev().find(|c| !matches!(c, ' ' | '\t' | '\r')) {
        None | Some('\n') => true,
        Some(prev) => "(,=:[!&|?{};".contains(prev),
    }
}

/// Index just past the closing `/` of the regex literal opening at `start`.
/// `None` when the line ends first.
fn regex_literal_end(chars: &[char], start: usize) -> Option<usize> {
    let mut in_class = false;
    let mut i = start + 1;
    while let Some(&c) = chars.get(i) {
        match c {
            '\n' => return None,
            '\\' if chars.get(i + 1).is_some_and(|next| *next != '\n') => i += 1,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

fn starts_with_at(chars: &[char], index: usize, pattern: &str) -> bool {
    let mut pos = index;
    for expected in pattern.chars() {
        if chars.get(pos) != Some(&expected) {
            return false;
        }
        pos += 1;
    }
    true
}
