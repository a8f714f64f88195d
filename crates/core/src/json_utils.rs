//! JSON and string helpers shared across crates.

/// Strip markdown code fences from JSON content.
///
/// The opening `` ```lang `` line and the closing `` ``` `` are removed
/// independently, so a reply whose closing fence was cut off still parses.
#[must_use]
pub fn strip_markdown_json(content: &str) -> &str {
    let mut body = content.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.split_once('\n') {
            Some((lang, after)) if !lang.trim_start().starts_with(['{', '[']) => after,
            _ => rest.trim_start().strip_prefix("json").unwrap_or(rest),
        };
    }
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Truncates a string to at most `max_chars` characters.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s.get(..end).unwrap_or(s),
        None => s,
    }
}
