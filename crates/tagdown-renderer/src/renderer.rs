//! Tag-aware Markdown renderer.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::{MarkdownEngine, PulldownEngine};
use crate::splitter::{Segment, split_code_regions};
use crate::style::style_block;
use crate::tags::{TagPipeline, TransformContext};
use crate::{ColorResolver, RenderError};

/// Default limit for nested `[rtl]`/`[ltr]`/`[mono]` containers.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Default CSS font family for `[mono]` blocks.
pub const DEFAULT_MONOSPACE_FONT: &str = "monospace";

/// Renderer settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Color name to CSS value table.
    pub colors: HashMap<String, String>,
    /// Font family for the `.mono` class.
    pub monospace_font: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            colors: HashMap::new(),
            monospace_font: DEFAULT_MONOSPACE_FONT.to_owned(),
        }
    }
}

impl RendererConfig {
    /// Add a named color.
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Set the monospace font family.
    #[must_use]
    pub fn with_monospace_font(mut self, font: impl Into<String>) -> Self {
        self.monospace_font = font.into();
        self
    }
}

/// Markdown renderer that expands custom tags outside code regions.
///
/// Rendering runs in three steps: the document is split into code and
/// non-code segments, the [`TagPipeline`] expands tags in non-code segments,
/// and the reassembled text goes to the [`MarkdownEngine`].
///
/// The first call to [`render`](Self::render) on an instance prepends the
/// style block; later calls do not.
///
/// # Example
///
/// ```
/// use tagdown_renderer::{RendererConfig, TagRenderer};
///
/// let config = RendererConfig::default().with_color("brand", "#ff0000");
/// let renderer = TagRenderer::new(&config);
///
/// let first = renderer.render("[color=brand]hi[/color]").unwrap();
/// assert!(first.starts_with("<style>"));
/// assert!(first.contains(r#"<span style="color:#ff0000;">hi</span>"#));
///
/// let second = renderer.render("[rtl]**x**[/rtl]").unwrap();
/// assert!(!second.contains("<style>"));
/// assert!(second.contains(r#"<div class="rtl"><p><strong>x</strong></p>"#));
/// ```
pub struct TagRenderer<E: MarkdownEngine = PulldownEngine> {
    engine: E,
    colors: ColorResolver,
    monospace_font: String,
    pipeline: TagPipeline,
    max_depth: usize,
    styles_injected: AtomicBool,
}

impl TagRenderer<PulldownEngine> {
    /// Create a renderer backed by pulldown-cmark.
    #[must_use]
    pub fn new(config: &RendererConfig) -> Self {
        Self::with_engine(PulldownEngine::new(), config)
    }
}

impl<E: MarkdownEngine> TagRenderer<E> {
    /// Create a renderer backed by the given Markdown engine.
    #[must_use]
    pub fn with_engine(engine: E, config: &RendererConfig) -> Self {
        Self {
            engine,
            colors: ColorResolver::new(config.colors.clone()),
            monospace_font: config.monospace_font.clone(),
            pipeline: TagPipeline::standard(),
            max_depth: DEFAULT_MAX_DEPTH,
            styles_injected: AtomicBool::new(false),
        }
    }

    /// Set the maximum container nesting depth.
    ///
    /// Every recursive render of container content goes one level deeper.
    /// Exceeding the limit fails the render with
    /// [`RenderError::NestingTooDeep`].
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Replace the tag pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: TagPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// The style block injected before the first rendered document.
    #[must_use]
    pub fn style_block(&self) -> String {
        style_block(&self.monospace_font)
    }

    /// Whether the style block has already been emitted by this instance.
    #[must_use]
    pub fn styles_injected(&self) -> bool {
        self.styles_injected.load(Ordering::Acquire)
    }

    /// Render a document to HTML.
    ///
    /// Safe to call from several threads at once; exactly one call receives
    /// the style block.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NestingTooDeep`] if container tags nest beyond
    /// the configured depth.
    pub fn render(&self, text: &str) -> Result<String, RenderError> {
        let first = self
            .styles_injected
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if first {
            tracing::debug!("Injecting style block");
            let mut document = self.style_block();
            document.push_str(text);
            self.render_at_depth(&document, 0)
        } else {
            self.render_at_depth(text, 0)
        }
    }

    /// Expand custom tags outside code regions without running the Markdown
    /// engine or injecting styles.
    ///
    /// Container content is still rendered to HTML, since containers wrap
    /// rendered output.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NestingTooDeep`] if container tags nest beyond
    /// the configured depth.
    pub fn expand_tags(&self, text: &str) -> Result<String, RenderError> {
        self.expand_at_depth(text, 0)
    }

    fn render_at_depth(&self, text: &str, depth: usize) -> Result<String, RenderError> {
        if depth > self.max_depth {
            tracing::debug!(limit = self.max_depth, "Container nesting limit exceeded");
            return Err(RenderError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let expanded = self.expand_at_depth(text, depth)?;
        Ok(self.engine.render_markdown(&expanded))
    }

    fn expand_at_depth(&self, text: &str, depth: usize) -> Result<String, RenderError> {
        let nested = |inner: &str| self.render_at_depth(inner, depth + 1);
        let ctx = TransformContext {
            colors: &self.colors,
            nested: &nested,
        };

        let segments = split_code_regions(text);
        tracing::debug!(segments = segments.len(), depth, "Split document");

        let mut output = String::with_capacity(text.len());
        for segment in segments {
            match segment {
                Segment::Code(code) => output.push_str(code),
                Segment::Text(plain) => output.push_str(&self.pipeline.apply(plain, &ctx)?),
            }
        }
        Ok(output)
    }
}
