//! `[color=NAME]...[/color]` tag.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{TagTransformer, TransformContext};
use crate::RenderError;

/// Color token up to the first `]`, then content up to the first closing tag.
static COLOR_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[color=([^\]]+)\](.*?)\[/color\]").unwrap());

/// Wraps content in a `<span>` with an inline color style.
///
/// Content is emitted untouched: it is still Markdown at this point and the
/// Markdown engine processes it afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTag;

impl TagTransformer for ColorTag {
    fn name(&self) -> &str {
        "color"
    }

    fn transform<'t>(
        &self,
        text: &'t str,
        ctx: &TransformContext<'_>,
    ) -> Result<Cow<'t, str>, RenderError> {
        Ok(COLOR_TAG_RE.replace_all(text, |caps: &Captures<'_>| {
            format!(
                r#"<span style="color:{};">{}</span>"#,
                ctx.resolve_color(&caps[1]),
                &caps[2]
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ColorResolver;

    fn expand(text: &str, colors: &ColorResolver) -> String {
        let ctx = TransformContext {
            colors,
            nested: &|inner| Ok(inner.to_owned()),
        };
        ColorTag.transform(text, &ctx).unwrap().into_owned()
    }

    #[test]
    fn test_literal_color() {
        let out = expand("[color=red]hi[/color]", &ColorResolver::default());
        assert_eq!(out, r#"<span style="color:red;">hi</span>"#);
    }

    #[test]
    fn test_configured_alias() {
        let colors =
            ColorResolver::new(HashMap::from([("brand".to_owned(), "#ff0000".to_owned())]));
        let out = expand("[color=brand]hi[/color]", &colors);
        assert_eq!(out, r#"<span style="color:#ff0000;">hi</span>"#);
    }

    #[test]
    fn test_token_escaped() {
        let out = expand(r#"[color="><script>]x[/color]"#, &ColorResolver::default());
        assert_eq!(
            out,
            r#"<span style="color:&quot;&gt;&lt;script&gt;;">x</span>"#
        );
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_multiline_content() {
        let out = expand("[color=blue]line one\nline two[/color]", &ColorResolver::default());
        assert_eq!(
            out,
            "<span style=\"color:blue;\">line one\nline two</span>"
        );
    }

    #[test]
    fn test_content_not_rendered() {
        let out = expand("[color=red]**bold** [rtl]x[/rtl][/color]", &ColorResolver::default());
        assert_eq!(
            out,
            r#"<span style="color:red;">**bold** [rtl]x[/rtl]</span>"#
        );
    }

    #[test]
    fn test_content_markup_passes_through() {
        let out = expand(r#"[color=red]<em title="a&b">x</em>[/color]"#, &ColorResolver::default());
        assert_eq!(
            out,
            r#"<span style="color:red;"><em title="a&b">x</em></span>"#
        );
    }

    #[test]
    fn test_lazy_to_first_close() {
        let out = expand(
            "[color=red]a[/color] and [color=green]b[/color]",
            &ColorResolver::default(),
        );
        assert_eq!(
            out,
            r#"<span style="color:red;">a</span> and <span style="color:green;">b</span>"#
        );
    }

    #[test]
    fn test_unterminated_left_alone() {
        let colors = ColorResolver::default();
        let ctx = TransformContext {
            colors: &colors,
            nested: &|inner| Ok(inner.to_owned()),
        };
        let out = ColorTag.transform("[color=red]never closed", &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed("[color=red]never closed")));
    }

    #[test]
    fn test_empty_token_not_matched() {
        let out = expand("[color=]x[/color]", &ColorResolver::default());
        assert_eq!(out, "[color=]x[/color]");
    }
}
