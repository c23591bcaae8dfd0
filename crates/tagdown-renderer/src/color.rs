//! Color token resolution for `[color=...]` tags.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::util::escape_html;

/// Maps color tokens to CSS color values.
///
/// Named colors come from configuration and are trusted, so they may expand
/// to arbitrary CSS. Any other token is treated as a literal CSS value and
/// HTML-escaped before use.
#[derive(Debug, Clone, Default)]
pub struct ColorResolver {
    table: HashMap<String, String>,
}

impl ColorResolver {
    /// Create a resolver over a name to CSS value table.
    #[must_use]
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Resolve a token to a CSS color value.
    ///
    /// Lookup is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use tagdown_renderer::ColorResolver;
    ///
    /// let colors = ColorResolver::new(HashMap::from([("brand".to_owned(), "#ff0000".to_owned())]));
    /// assert_eq!(colors.resolve("brand"), "#ff0000");
    /// assert_eq!(colors.resolve("Brand"), "Brand");
    /// assert_eq!(colors.resolve("a<b"), "a&lt;b");
    /// ```
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &str) -> Cow<'a, str> {
        match self.table.get(token) {
            Some(value) => Cow::Borrowed(value.as_str()),
            None => Cow::Owned(escape_html(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ColorResolver {
        ColorResolver::new(HashMap::from([
            ("brand".to_owned(), "#ff0000".to_owned()),
            (
                "sunset".to_owned(),
                "linear-gradient(90deg, \"orange\", red)".to_owned(),
            ),
        ]))
    }

    #[test]
    fn test_configured_name() {
        assert_eq!(resolver().resolve("brand"), "#ff0000");
    }

    #[test]
    fn test_configured_value_not_escaped() {
        assert_eq!(
            resolver().resolve("sunset"),
            "linear-gradient(90deg, \"orange\", red)"
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(resolver().resolve("BRAND"), "BRAND");
    }

    #[test]
    fn test_literal_fallback() {
        assert_eq!(resolver().resolve("#00ff00"), "#00ff00");
        assert_eq!(resolver().resolve("rgb(1, 2, 3)"), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_literal_escaped() {
        assert_eq!(
            resolver().resolve(r#""><script>"#),
            "&quot;&gt;&lt;script&gt;"
        );
    }

    #[test]
    fn test_empty_table() {
        let colors = ColorResolver::default();
        assert_eq!(colors.resolve("red"), "red");
        assert_eq!(colors.resolve("brand"), "brand");
    }
}
