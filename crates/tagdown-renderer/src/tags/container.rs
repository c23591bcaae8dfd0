//! `[rtl]`, `[ltr]` and `[mono]` container tags.
//!
//! Container content is rendered through the whole pipeline again, so it may
//! hold Markdown, other custom tags, and further containers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::{TagTransformer, TransformContext};
use crate::RenderError;

static RTL_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/?rtl\]").unwrap());
static LTR_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/?ltr\]").unwrap());
static MONO_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/?mono\]").unwrap());

/// Kind of container tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// `[rtl]...[/rtl]` - right-to-left block.
    Rtl,
    /// `[ltr]...[/ltr]` - left-to-right block.
    Ltr,
    /// `[mono]...[/mono]` - monospace block.
    Mono,
}

impl ContainerKind {
    /// Tag name, also used as the wrapper's CSS class.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
            Self::Mono => "mono",
        }
    }

    /// Pattern matching both the opening and the closing tag.
    fn token_re(self) -> &'static Regex {
        match self {
            Self::Rtl => &RTL_TOKEN_RE,
            Self::Ltr => &LTR_TOKEN_RE,
            Self::Mono => &MONO_TOKEN_RE,
        }
    }
}

/// Opening or closing tag position.
#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
    is_open: bool,
}

/// Renders container content recursively and wraps it in
/// `<div class="{kind}">`.
///
/// An opening tag pairs with the closing tag that balances it. An opening tag
/// left unbalanced by a later stray opener pairs with the first closing tag
/// after it instead. An opening tag with no closing tag after it stays in the
/// text unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ContainerTag {
    kind: ContainerKind,
}

impl ContainerTag {
    /// Create a transformer for the given container kind.
    #[must_use]
    pub fn new(kind: ContainerKind) -> Self {
        Self { kind }
    }

    fn tokens(&self, text: &str) -> Vec<Token> {
        self.kind
            .token_re()
            .find_iter(text)
            .map(|m| Token {
                start: m.start(),
                end: m.end(),
                is_open: !m.as_str().starts_with("[/"),
            })
            .collect()
    }
}

/// Closing token index for every opening token, in two linear passes.
///
/// The forward pass pairs balanced tokens with a stack. The backward pass
/// gives each opener still unpaired the first closing token after it.
fn pair_tokens(tokens: &[Token]) -> Vec<Option<usize>> {
    let mut pairs = vec![None; tokens.len()];

    let mut open_stack = Vec::new();
    for (idx, token) in tokens.iter().enumerate() {
        if token.is_open {
            open_stack.push(idx);
        } else if let Some(open_idx) = open_stack.pop() {
            pairs[open_idx] = Some(idx);
        }
    }

    let mut next_close = None;
    for (idx, token) in tokens.iter().enumerate().rev() {
        if !token.is_open {
            next_close = Some(idx);
        } else if pairs[idx].is_none() {
            pairs[idx] = next_close;
        }
    }

    pairs
}

impl TagTransformer for ContainerTag {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn transform<'t>(
        &self,
        text: &'t str,
        ctx: &TransformContext<'_>,
    ) -> Result<Cow<'t, str>, RenderError> {
        let tokens = self.tokens(text);
        if tokens.is_empty() {
            return Ok(Cow::Borrowed(text));
        }
        let pairs = pair_tokens(&tokens);

        let class = self.kind.name();
        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;
        let mut idx = 0;

        while idx < tokens.len() {
            let open = tokens[idx];
            if !open.is_open {
                idx += 1;
                continue;
            }

            // No closing tag remains anywhere after this opener.
            let Some(close_idx) = pairs[idx] else {
                tracing::trace!(tag = class, offset = open.start, "Unterminated container tag");
                break;
            };
            let close = tokens[close_idx];

            let inner = ctx.render_nested(&text[open.end..close.start])?;
            output.push_str(&text[last_end..open.start]);
            output.push_str(r#"<div class=""#);
            output.push_str(class);
            output.push_str(r#"">"#);
            output.push_str(&inner);
            output.push_str("</div>");

            last_end = close.end;
            idx = close_idx + 1;
        }

        if last_end == 0 {
            return Ok(Cow::Borrowed(text));
        }
        output.push_str(&text[last_end..]);
        Ok(Cow::Owned(output))
    }
}
