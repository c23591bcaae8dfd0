//! Style block prepended to the first rendered document.

/// Build the `<style>` block defining the classes emitted by the tag
/// transformers.
///
/// The block ends with a newline so that the document that follows starts on
/// its own line and the Markdown engine treats the block as raw HTML.
#[must_use]
pub fn style_block(monospace_font: &str) -> String {
    format!(
        "<style>
.video-responsive {{
    position: relative;
    padding-bottom: 56.25%;
    height: 0;
    overflow: hidden;
    max-width: 100%;
    background: #000;
}}
.video-responsive iframe {{
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
}}
.rtl, .rtl * {{
    direction: rtl;
    unicode-bidi: isolate;
    text-align: right;
}}
.ltr, .ltr * {{
    direction: ltr;
    unicode-bidi: isolate;
    text-align: left;
}}
.mono {{
    font-family: {monospace_font};
}}
</style>
"
    )
}
