//! Shared utility functions for tag expansion.

/// Escape the characters that can break out of an HTML attribute value.
///
/// Only `&`, `<`, `>` and `"` are replaced. Single quotes are left alone
/// because every attribute this crate emits is double-quoted.
///
/// # Examples
///
/// ```
/// use tagdown_renderer::escape_html;
///
/// assert_eq!(escape_html(r#""><b>"#), "&quot;&gt;&lt;b&gt;");
/// assert_eq!(escape_html("#ff0000"), "#ff0000");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
