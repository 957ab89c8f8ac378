//! HTML escaping and the `SafeHtml` trust boundary.
//!
//! Nothing from a [`ParsedRequest`](crate::ParsedRequest) may be written into
//! a document unless it has first become a [`SafeHtml`]. The only ways to get
//! one are the escaping functions here and the markdown pipeline in
//! [`crate::markdown`]; the constructor is crate-private.

use std::fmt;

/// A string that is known to be free of unescaped user-controlled markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap markup that the crate itself produced or already escaped.
    pub(crate) fn from_trusted(s: impl Into<String>) -> Self {
        SafeHtml(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escape text for an HTML text node or a double/single quoted attribute.
pub fn escape_html(raw: &str) -> SafeHtml {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // control characters other than common whitespace carry no meaning in a card
            c if c.is_control() && !matches!(c, '\n' | '\r' | '\t') => {}
            c => out.push(c),
        }
    }
    SafeHtml(out)
}

/// Reduce a value destined for a CSS declaration inside the `<style>` block
/// to the characters a CSS length can contain.
///
/// Only ASCII alphanumerics, `.`, `%`, `+`, `-` and spaces survive. Entities
/// are never decoded inside `<style>`, so nothing that escaping would turn
/// into `&...;` may reach the stylesheet.
pub fn escape_css_value(raw: &str) -> SafeHtml {
    SafeHtml(
        raw.chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '%' | '+' | '-' | ' '))
            .collect(),
    )
}
