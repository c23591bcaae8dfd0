//! Tag transformation context.

use std::borrow::Cow;

use crate::{ColorResolver, RenderError};

/// Context provided to tag transformers for color lookup and nested rendering.
///
/// The context is created by the renderer for each expansion pass. The
/// `nested` callback re-enters the full render pipeline (tag expansion plus
/// Markdown) one nesting level deeper and fails once the renderer's depth
/// limit is exceeded.
///
/// # Example
///
/// ```
/// use tagdown_renderer::ColorResolver;
/// use tagdown_renderer::tags::TransformContext;
///
/// let colors = ColorResolver::default();
/// let ctx = TransformContext {
///     colors: &colors,
///     nested: &|inner| Ok(format!("<p>{inner}</p>")),
/// };
///
/// assert_eq!(ctx.render_nested("x").unwrap(), "<p>x</p>");
/// assert_eq!(ctx.resolve_color("teal"), "teal");
/// ```
pub struct TransformContext<'a> {
    /// Color table used by `[color=...]`.
    pub colors: &'a ColorResolver,
    /// Callback rendering inner content of container tags.
    pub nested: &'a dyn Fn(&str) -> Result<String, RenderError>,
}

impl<'a> TransformContext<'a> {
    /// Resolve a color token against the configured table.
    #[must_use]
    pub fn resolve_color(&self, token: &str) -> Cow<'a, str> {
        self.colors.resolve(token)
    }

    /// Render content through the full pipeline one level deeper.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NestingTooDeep`] once the depth limit is hit.
    pub fn render_nested(&self, content: &str) -> Result<String, RenderError> {
        (self.nested)(content)
    }
}
