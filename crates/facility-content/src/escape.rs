//! XML attribute escaping

/// Escape reserved XML characters in attribute text.
///
/// Replaces `&`, `"`, `'`, and `<` with their entities. `&` is handled
/// first so the ampersands introduced by the other substitutions are never
/// re-escaped. `>` is deliberately left alone: the facility dialect never
/// embeds it where the downstream importer would reject the raw character.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
