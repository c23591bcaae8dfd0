//! `[video src="URL"]` tag.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{TagTransformer, TransformContext};
use crate::RenderError;

/// The bracketed tag must contain `src="..."` literally; other attributes are
/// ignored.
static VIDEO_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[video\b[^\]]*?src="([^"]*)"[^\]]*\]"#).unwrap());

/// `v=` query parameter of a YouTube watch URL.
static YOUTUBE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^&\]]*)").unwrap());

/// Trailing numeric id of a Vimeo URL, with optional `www.`/`player.` host
/// prefixes and intermediate path segments such as `/videos` or `/channels/x`.
static VIMEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:\w{3}\.|player\.)*vimeo\.com(?:[/\w:]*(?:/videos)?)?/([0-9]+)\S*")
        .unwrap()
});

/// Recognized video hosts, in detection order.
const HOST_NEEDLES: [(&str, VideoHost); 2] =
    [("youtube", VideoHost::YouTube), ("vimeo", VideoHost::Vimeo)];

/// Video host recognized from a `src` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoHost {
    /// youtube.com watch URLs.
    YouTube,
    /// vimeo.com video URLs.
    Vimeo,
}

impl VideoHost {
    /// Detect the host from substrings of `url`.
    ///
    /// Needles are checked in the order `youtube`, `vimeo` and the last one
    /// found wins, so a URL mentioning both is treated as Vimeo.
    #[must_use]
    pub fn detect(url: &str) -> Option<Self> {
        HOST_NEEDLES
            .iter()
            .rev()
            .find(|(needle, _)| url.contains(*needle))
            .map(|&(_, host)| host)
    }

    /// Rewrite a watch URL into the host's embeddable player URL.
    ///
    /// URLs the host pattern does not recognize are returned unchanged.
    #[must_use]
    pub fn embed_url(self, url: &str) -> Cow<'_, str> {
        match self {
            Self::YouTube => match YOUTUBE_ID_RE.captures(url) {
                Some(caps) => Cow::Owned(format!("https://www.youtube.com/embed/{}", &caps[1])),
                None => Cow::Borrowed(url),
            },
            Self::Vimeo => VIMEO_URL_RE.replace(url, "https://player.vimeo.com/video/${1}"),
        }
    }

    /// Build the responsive iframe embed for `src`.
    #[must_use]
    pub fn embed_html(self, src: &str) -> String {
        match self {
            Self::YouTube => format!(
                r#"<div class="video-responsive"><iframe src="{src}" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen referrerpolicy="strict-origin-when-cross-origin"></iframe></div>"#
            ),
            Self::Vimeo => format!(
                r#"<div class="video-responsive"><iframe src="{src}" title="Vimeo video player" frameborder="0" allow="autoplay; fullscreen; picture-in-picture" allowfullscreen sandbox="allow-same-origin allow-scripts allow-forms"></iframe></div>"#
            ),
        }
    }
}

/// Replaces `[video src="..."]` with a YouTube or Vimeo iframe.
///
/// Tags pointing at any other host are left exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoTag;

impl TagTransformer for VideoTag {
    fn name(&self) -> &str {
        "video"
    }

    fn transform<'t>(
        &self,
        text: &'t str,
        _ctx: &TransformContext<'_>,
    ) -> Result<Cow<'t, str>, RenderError> {
        Ok(VIDEO_TAG_RE.replace_all(text, |caps: &Captures<'_>| {
            let url = &caps[1];
            match VideoHost::detect(url) {
                Some(host) => host.embed_html(&host.embed_url(url)),
                None => {
                    tracing::trace!(url, "Unrecognized video host, leaving tag as text");
                    caps[0].to_owned()
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ColorResolver;

    fn expand(text: &str) -> String {
        let colors = ColorResolver::default();
        let ctx = TransformContext {
            colors: &colors,
            nested: &|inner| Ok(inner.to_owned()),
        };
        VideoTag.transform(text, &ctx).unwrap().into_owned()
    }

    #[test]
    fn test_detect_youtube() {
        assert_eq!(
            VideoHost::detect("https://www.youtube.com/watch?v=abc"),
            Some(VideoHost::YouTube)
        );
    }

    #[test]
    fn test_detect_vimeo() {
        assert_eq!(
            VideoHost::detect("https://vimeo.com/123"),
            Some(VideoHost::Vimeo)
        );
    }

    #[test]
    fn test_detect_last_needle_wins() {
        assert_eq!(
            VideoHost::detect("https://vimeo.com/123?ref=youtube"),
            Some(VideoHost::Vimeo)
        );
        assert_eq!(
            VideoHost::detect("https://youtube.com/watch?v=x&from=vimeo"),
            Some(VideoHost::Vimeo)
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(VideoHost::detect("https://example.com/clip.mp4"), None);
    }

    #[test]
    fn test_youtube_embed_url() {
        assert_eq!(
            VideoHost::YouTube.embed_url("https://youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn test_youtube_embed_url_stops_at_ampersand() {
        assert_eq!(
            VideoHost::YouTube.embed_url("https://www.youtube.com/watch?v=abc123&t=42s"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn test_youtube_embed_url_later_param() {
        assert_eq!(
            VideoHost::YouTube.embed_url("https://www.youtube.com/watch?feature=share&v=xyz"),
            "https://www.youtube.com/embed/xyz"
        );
    }

    #[test]
    fn test_youtube_without_id_unchanged() {
        assert_eq!(
            VideoHost::YouTube.embed_url("https://www.youtube.com/embed/abc"),
            "https://www.youtube.com/embed/abc"
        );
    }

    #[test]
    fn test_vimeo_embed_url() {
        assert_eq!(
            VideoHost::Vimeo.embed_url("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }

    #[test]
    fn test_vimeo_embed_url_variants() {
        let cases = [
            "https://www.vimeo.com/76979871",
            "https://player.vimeo.com/video/76979871",
            "https://vimeo.com/channels/staffpicks/76979871",
            "http://vimeo.com/user/videos/76979871?autoplay=1",
        ];
        for url in cases {
            assert_eq!(
                VideoHost::Vimeo.embed_url(url),
                "https://player.vimeo.com/video/76979871",
                "url: {url}"
            );
        }
    }

    #[test]
    fn test_youtube_tag() {
        let out = expand(r#"[video src="https://youtube.com/watch?v=abc123"]"#);
        assert!(out.starts_with(r#"<div class="video-responsive"><iframe src="https://www.youtube.com/embed/abc123""#));
        assert!(out.contains(r#"title="YouTube video player""#));
        assert!(out.ends_with("</iframe></div>"));
    }

    #[test]
    fn test_vimeo_tag() {
        let out = expand(r#"[video src="https://vimeo.com/123456"]"#);
        assert!(out.contains(r#"src="https://player.vimeo.com/video/123456""#));
        assert!(out.contains(r#"sandbox="allow-same-origin allow-scripts allow-forms""#));
    }

    #[test]
    fn test_other_attributes_ignored() {
        let out = expand(r#"[video width="640" src="https://youtube.com/watch?v=abc" autoplay]"#);
        assert!(out.contains(r#"src="https://www.youtube.com/embed/abc""#));
        assert!(!out.contains("640"));
    }

    #[test]
    fn test_unknown_host_unchanged() {
        let text = r#"See [video src="https://example.com/clip.mp4"] here."#;
        assert_eq!(expand(text), text);
    }

    #[test]
    fn test_missing_src_unchanged() {
        let text = "[video https://youtube.com/watch?v=abc]";
        assert_eq!(expand(text), text);
    }

    #[test]
    fn test_two_tags_on_one_line() {
        let out = expand(
            r#"[video src="https://youtube.com/watch?v=a"] [video src="https://vimeo.com/1"]"#,
        );
        assert!(out.contains("https://www.youtube.com/embed/a"));
        assert!(out.contains("https://player.vimeo.com/video/1"));
    }
}
