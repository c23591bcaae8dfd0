//! Ordered chain of tag transformers.

use std::borrow::Cow;

use super::{
    ColorTag, ContainerKind, ContainerTag, TagTransformer, TransformContext, VideoTag,
};
use crate::RenderError;

/// Applies tag transformers in registration order.
///
/// Each transformer sees the output of the previous one. The standard order
/// is color, video, rtl, ltr, mono: containers run last so the content they
/// render recursively already has its color and video tags expanded.
pub struct TagPipeline {
    transformers: Vec<Box<dyn TagTransformer>>,
}

impl Default for TagPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl TagPipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transformers: Vec::new(),
        }
    }

    /// Create the standard pipeline: color, video, rtl, ltr, mono.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_transformer(ColorTag)
            .with_transformer(VideoTag)
            .with_transformer(ContainerTag::new(ContainerKind::Rtl))
            .with_transformer(ContainerTag::new(ContainerKind::Ltr))
            .with_transformer(ContainerTag::new(ContainerKind::Mono))
    }

    /// Append a transformer to the end of the chain.
    #[must_use]
    pub fn with_transformer<T: TagTransformer + 'static>(mut self, transformer: T) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    /// Names of the registered transformers, in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.transformers.iter().map(|t| t.name()).collect()
    }

    /// Run every transformer over a non-code segment.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a transformer.
    pub fn apply(&self, segment: &str, ctx: &TransformContext<'_>) -> Result<String, RenderError> {
        let mut text = segment.to_owned();
        for transformer in &self.transformers {
            let changed = match transformer.transform(&text, ctx)? {
                Cow::Borrowed(_) => None,
                Cow::Owned(changed) => Some(changed),
            };
            if let Some(changed) = changed {
                tracing::trace!(tag = transformer.name(), "Expanded tags");
                text = changed;
            }
        }
        Ok(text)
    }
}
