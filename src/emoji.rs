//! Emoji substitution over an already-safe HTML fragment.
//!
//! Every emoji grapheme in a text node is replaced by an `<img class="emoji">`
//! that points at the Twemoji SVG for its code points. Tags and entities are
//! copied through untouched.

use crate::sanitize::{escape_html, SafeHtml};
use unicode_segmentation::UnicodeSegmentation;

/// Default Twemoji asset root; glyphs live under `svg/<code>.svg`.
pub const DEFAULT_EMOJI_BASE: &str = "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/";

/// Class attached to every emoji image so layouts can size them.
pub const EMOJI_CLASS: &str = "emoji";

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';

/// Rewrite emoji glyphs in `fragment` into inline image references.
pub fn emojify(fragment: &SafeHtml, base_url: &str) -> SafeHtml {
    let src = fragment.as_str();
    let base = escape_html(base_url);
    let mut out = String::with_capacity(src.len());
    let mut rest = src;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => {
                // copy the whole tag; quoted attribute values are already escaped
                let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            }
            Some(i) => {
                push_text(&mut out, &rest[..i], base.as_str());
                rest = &rest[i..];
            }
            None => {
                push_text(&mut out, rest, base.as_str());
                rest = "";
            }
        }
    }

    SafeHtml::from_trusted(out)
}

fn push_text(out: &mut String, text: &str, base: &str) {
    for g in text.graphemes(true) {
        if is_emoji(g) {
            out.push_str(&format!(
                "<img class=\"{}\" draggable=\"false\" alt=\"{}\" src=\"{}svg/{}.svg\"/>",
                EMOJI_CLASS,
                g,
                base,
                code_points(g)
            ));
        } else {
            out.push_str(g);
        }
    }
}

/// Whether a grapheme cluster is a recognised emoji.
pub fn is_emoji(g: &str) -> bool {
    // keycap sequences always carry U+20E3, so pure ASCII is never an emoji
    if g.is_ascii() {
        return false;
    }
    if emojis::get(g).is_some() {
        return true;
    }
    let mut chars = g.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest: Vec<char> = chars.collect();
    if rest.is_empty() {
        // text-presentation form of an emoji that is stored with VS16
        return emojis::get(&format!("{}{}", first, VS16)).is_some();
    }
    // base emoji followed only by skin tone modifiers or presentation selectors
    let base_known = emojis::get(&first.to_string()).is_some()
        || emojis::get(&format!("{}{}", first, VS16)).is_some();
    base_known && rest.iter().all(|c| is_modifier(*c))
}

fn is_modifier(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}' | VS16)
}

/// Twemoji file name for a grapheme: lowercase hex code points joined by `-`,
/// with VS16 dropped unless the sequence is joined by ZWJ.
pub fn code_points(g: &str) -> String {
    let keep_vs16 = g.contains(ZWJ);
    g.chars()
        .filter(|c| keep_vs16 || *c != VS16)
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safe(s: &str) -> SafeHtml {
        SafeHtml::from_trusted(s)
    }

    #[test]
    fn code_points_follow_twemoji_naming() {
        assert_eq!(code_points("😀"), "1f600");
        assert_eq!(code_points("❤\u{FE0F}"), "2764");
        assert_eq!(code_points("👍🏽"), "1f44d-1f3fd");
        // ZWJ sequences keep VS16
        assert_eq!(
            code_points("🏳\u{FE0F}\u{200D}🌈"),
            "1f3f3-fe0f-200d-1f308"
        );
    }

    #[test]
    fn replaces_emoji_in_text_nodes() {
        let out = emojify(&safe("<p>Hi 🚀</p>"), "https://e/");
        assert_eq!(
            out.as_str(),
            "<p>Hi <img class=\"emoji\" draggable=\"false\" alt=\"🚀\" src=\"https://e/svg/1f680.svg\"/></p>"
        );
    }

    #[test]
    fn leaves_markup_and_entities_alone() {
        let input = "<a href=\"https://x/?a=1&amp;b=2\" title=\"🚀\">&lt;b&gt;</a>";
        let out = emojify(&safe(input), "https://e/");
        assert_eq!(out.as_str(), input);
    }

    #[test]
    fn plain_text_without_emoji_is_unchanged() {
        let out = emojify(&safe("Hello, world &amp; friends"), DEFAULT_EMOJI_BASE);
        assert_eq!(out.as_str(), "Hello, world &amp; friends");
    }

    #[test]
    fn ascii_digits_are_not_emoji() {
        assert!(!is_emoji("1"));
        assert!(!is_emoji("#"));
        assert!(is_emoji("😀"));
        assert!(is_emoji("👍🏽"));
        assert!(!is_emoji("é"));
    }
}
