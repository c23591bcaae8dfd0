//! Markdown renderer with custom tag expansion.
//!
//! This crate wraps a Markdown engine with a small bracketed tag language:
//!
//! | Tag | Output |
//! |---|---|
//! | `[video src="URL"]` | responsive YouTube or Vimeo iframe |
//! | `[color=NAME]...[/color]` | `<span style="color:...;">` |
//! | `[rtl]...[/rtl]` | `<div class="rtl">` around rendered content |
//! | `[ltr]...[/ltr]` | `<div class="ltr">` around rendered content |
//! | `[mono]...[/mono]` | `<div class="mono">` around rendered content |
//!
//! # Architecture
//!
//! [`TagRenderer::render`] splits the document with [`split_code_regions`]
//! so fenced code blocks and `<pre>` regions are never touched, runs the
//! [`TagPipeline`](tags::TagPipeline) over the remaining text, then hands the
//! result to a [`MarkdownEngine`] ([`PulldownEngine`] by default).
//!
//! Container tags re-enter the full render for their content, bounded by a
//! configurable nesting depth.
//!
//! # Example
//!
//! ```
//! use tagdown_renderer::{RendererConfig, TagRenderer};
//!
//! let renderer = TagRenderer::new(&RendererConfig::default());
//! let html = renderer.render("[color=red]hi[/color]\n\n```\n[color=red]no[/color]\n```").unwrap();
//!
//! assert!(html.contains(r#"<span style="color:red;">hi</span>"#));
//! assert!(html.contains("<code>[color=red]no[/color]\n</code>"));
//! ```

mod color;
mod engine;
mod error;
mod renderer;
mod splitter;
mod style;
pub mod tags;
mod util;

pub use color::ColorResolver;
pub use engine::{MarkdownEngine, PulldownEngine};
pub use error::RenderError;
pub use renderer::{DEFAULT_MAX_DEPTH, DEFAULT_MONOSPACE_FONT, RendererConfig, TagRenderer};
pub use splitter::{Segment, split_code_regions};
pub use style::style_block;
pub use util::escape_html;
