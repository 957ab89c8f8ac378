//! Markdown + emoji pipeline: turns request text into a [`SafeHtml`] fragment.

use crate::emoji::emojify;
use crate::sanitize::{escape_html, SafeHtml};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// How untrusted text becomes markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentMode {
    /// HTML-escape the text verbatim
    Escape,
    /// Interpret the text as CommonMark
    Markdown,
}

impl FragmentMode {
    pub fn from_md_flag(md: bool) -> Self {
        if md {
            FragmentMode::Markdown
        } else {
            FragmentMode::Escape
        }
    }
}

/// Convert untrusted text into a safe fragment, without emoji substitution.
pub fn to_safe_fragment(raw: &str, mode: FragmentMode) -> SafeHtml {
    match mode {
        FragmentMode::Escape => escape_html(raw),
        FragmentMode::Markdown => markdown_to_html(raw),
    }
}

/// Full pipeline: markdown or escape, then emoji images.
pub fn render(text: &str, md: bool, emoji_base: &str) -> SafeHtml {
    let fragment = to_safe_fragment(text, FragmentMode::from_md_flag(md));
    emojify(&fragment, emoji_base)
}

fn markdown_to_html(src: &str) -> SafeHtml {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    // raw HTML in the source is shown as text, never emitted as markup
    let parser = Parser::new_ext(src, opts).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(tag) => Event::Start(neutralize_tag(tag)),
        Event::End(tag) => Event::End(neutralize_tag(tag)),
        other => other,
    });

    let mut out = String::with_capacity(src.len() * 3 / 2);
    html::push_html(&mut out, parser);
    SafeHtml::from_trusted(out)
}

fn neutralize_tag(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link(kind, dest, title) => Tag::Link(kind, neutralize_url(dest), title),
        Tag::Image(kind, dest, title) => Tag::Image(kind, neutralize_url(dest), title),
        other => other,
    }
}

fn neutralize_url(dest: CowStr<'_>) -> CowStr<'_> {
    let lowered = dest.trim_start().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        CowStr::Borrowed("#")
    } else {
        dest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_escapes_tags() {
        let out = render("<b>hi</b>", false, "https://e/");
        assert_eq!(out.as_str(), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn markdown_mode_renders_bold() {
        let out = render("**hi**", true, "https://e/");
        assert_eq!(out.as_str().trim(), "<p><strong>hi</strong></p>");
    }

    #[test]
    fn markdown_mode_does_not_pass_raw_html() {
        let out = render("hello <script>alert(1)</script>", true, "https://e/");
        assert!(!out.as_str().contains("<script"));
        assert!(out.as_str().contains("&lt;script&gt;"));

        let block = render("<div onclick=\"x\">\n\nhey", true, "https://e/");
        assert!(!block.as_str().contains("<div"));
    }

    #[test]
    fn markdown_links_with_script_urls_are_neutralized() {
        let out = render("[click](javascript:alert(1))", true, "https://e/");
        assert!(!out.as_str().contains("javascript:"));
        assert!(out.as_str().contains("href=\"#\""));

        let ok = render("[site](https://example.com)", true, "https://e/");
        assert!(ok.as_str().contains("href=\"https://example.com\""));
    }

    #[test]
    fn emoji_substitution_runs_after_markdown() {
        let out = render("**Launch 🚀**", true, "https://e/");
        assert!(out.as_str().contains("<strong>Launch <img class=\"emoji\""));
        assert!(out.as_str().contains("src=\"https://e/svg/1f680.svg\""));
    }

    #[test]
    fn emoji_substitution_runs_after_escaping() {
        let out = render("a < b 😀", false, "https://e/");
        assert!(out.as_str().starts_with("a &lt; b <img class=\"emoji\""));
    }
}
