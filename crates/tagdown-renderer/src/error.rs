//! Error types for tag rendering.

/// Error produced while rendering a document.
///
/// Malformed or unmatched tags never produce an error; they are left in the
/// output as literal text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Container tags (`[rtl]`, `[ltr]`, `[mono]`) nested deeper than allowed.
    #[error("nesting too deep: container tags exceed the limit of {limit} levels")]
    NestingTooDeep {
        /// Configured maximum nesting depth.
        limit: usize,
    },
}
