/// Check if a pattern contains wildcards.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*')
}

/// Check if a key matches a glob pattern.
///
/// The `*` wildcard never crosses a `separator` boundary.
///
/// Examples (separator `.`):
/// - `errors.*` matches `errors.E001`, `errors.E002` but not `errors.network.timeout`
/// - `form.*.label` matches `form.email.label`, `form.password.label`
pub fn matches_key_glob(pattern: &str, key: &str, separator: &str) -> bool {
    if separator.is_empty() {
        return segment_matches(pattern, key);
    }

    let pattern_segments: Vec<&str> = pattern.split(separator).collect();
    let key_segments: Vec<&str> = key.split(separator).collect();

    // Must have same number of segments
    if pattern_segments.len() != key_segments.len() {
        return false;
    }

    pattern_segments
        .iter()
        .zip(key_segments.iter())
        .all(|(pattern_seg, key_seg)| segment_matches(pattern_seg, key_seg))
}

/// Match a single segment with potential wildcards.
/// `*` matches 0 or more characters (standard glob semantics).
fn segment_matches(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == text;
    }

    let parts: Vec<&str> = pattern.split('*').collect();

    let mut pos = 0;

    // First part must be a prefix
    if !parts[0].is_empty() {
        if !text.starts_with(parts[0]) {
            return false;
        }
        pos = parts[0].len();
    }

    // Last part must be a suffix
    let last = parts[parts.len() - 1];
    let end = if last.is_empty() {
        text.len()
    } else {
        if !text.ends_with(last) {
            return false;
        }
        // Check for overlap between prefix and suffix
        if pos + last.len() > text.len() {
            return false;
        }
        text.len() - last.len()
    };

    // Middle parts must appear in order
    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        if let Some(found) = text[pos..end].find(part) {
            pos = pos + found + part.len();
        } else {
            return false;
        }
    }

    true
}
