//! Custom tag transformers.
//!
//! Each transformer scans text for one bracketed tag and replaces every match
//! with HTML. Transformers run in a fixed order inside a [`TagPipeline`] and
//! only ever see text outside code regions.
//!
//! # Tag Types
//!
//! - **Color** ([`ColorTag`]): `[color=NAME]...[/color]` - colored span
//! - **Video** ([`VideoTag`]): `[video src="URL"]` - YouTube/Vimeo embed
//! - **Container** ([`ContainerTag`]): `[rtl]`, `[ltr]`, `[mono]` - wrapping
//!   blocks whose content is rendered recursively
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//! use tagdown_renderer::RenderError;
//! use tagdown_renderer::tags::{TagPipeline, TagTransformer, TransformContext};
//!
//! struct Shout;
//!
//! impl TagTransformer for Shout {
//!     fn name(&self) -> &str { "shout" }
//!
//!     fn transform<'t>(
//!         &self,
//!         text: &'t str,
//!         _ctx: &TransformContext<'_>,
//!     ) -> Result<Cow<'t, str>, RenderError> {
//!         Ok(Cow::Owned(text.replace("[shout]", "<strong>")))
//!     }
//! }
//!
//! let pipeline = TagPipeline::standard().with_transformer(Shout);
//! assert_eq!(pipeline.names(), ["color", "video", "rtl", "ltr", "mono", "shout"]);
//! ```

use std::borrow::Cow;

use crate::RenderError;

mod color;
mod container;
mod context;
mod pipeline;
mod video;

pub use color::ColorTag;
pub use container::{ContainerKind, ContainerTag};
pub use context::TransformContext;
pub use pipeline::TagPipeline;
pub use video::{VideoHost, VideoTag};

/// Handler for one kind of custom tag.
///
/// Transformers are shared by every render call on a renderer, including
/// concurrent ones, so they hold no per-document state.
pub trait TagTransformer: Send + Sync {
    /// Tag name, used for logging.
    fn name(&self) -> &str;

    /// Replace every match of this tag in `text`.
    ///
    /// Returns [`Cow::Borrowed`] when nothing matched. Text that looks like the
    /// tag but does not match its full form must be left unchanged.
    fn transform<'t>(
        &self,
        text: &'t str,
        ctx: &TransformContext<'_>,
    ) -> Result<Cow<'t, str>, RenderError>;
}
