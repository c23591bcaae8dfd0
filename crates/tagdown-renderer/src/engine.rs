//! Markdown-to-HTML engines.
//!
//! The tag renderer never parses Markdown itself. It hands the expanded text
//! to a [`MarkdownEngine`], which must pass raw HTML through unchanged and
//! turn fenced code into `<pre><code>`.

use pulldown_cmark::{Options, Parser, html};

/// Converts Markdown source to HTML.
pub trait MarkdownEngine: Send + Sync {
    /// Render Markdown text to an HTML fragment.
    fn render_markdown(&self, markdown: &str) -> String;
}

/// [`MarkdownEngine`] backed by pulldown-cmark's HTML writer.
///
/// # Example
///
/// ```
/// use tagdown_renderer::{MarkdownEngine, PulldownEngine};
///
/// let engine = PulldownEngine::new();
/// assert_eq!(engine.render_markdown("**hi**"), "<p><strong>hi</strong></p>\n");
/// ```
#[derive(Debug, Clone)]
pub struct PulldownEngine {
    gfm: bool,
}

impl Default for PulldownEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownEngine {
    /// Create an engine with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

impl MarkdownEngine for PulldownEngine {
    fn render_markdown(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, parser);
        out
    }
}
