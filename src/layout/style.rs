//! Stylesheet pieces shared by the builders

use crate::fonts::FontSet;
use std::fmt::Write;

/// Sizing for emoji images produced by the pipeline
pub(crate) const EMOJI_RULE: &str = "
    .emoji {
        height: 1em;
        width: 1em;
        margin: 0 .05em 0 .1em;
        vertical-align: -0.1em;
    }";

/// The three embedded faces: Inter regular and bold, Vera mono.
pub(crate) fn font_faces(fonts: &FontSet) -> String {
    let mut css = String::new();
    let faces = [
        ("Inter", "normal", fonts.regular_base64()),
        ("Inter", "bold", fonts.bold_base64()),
        ("Vera", "normal", fonts.mono_base64()),
    ];
    for (family, weight, data) in faces {
        let _ = write!(
            css,
            "
    @font-face {{
        font-family: '{family}';
        font-style: normal;
        font-weight: {weight};
        src: url(data:font/woff2;charset=utf-8;base64,{data}) format('woff2');
    }}
"
        );
    }
    css
}

/// Common head of every document, up to and including the opening `<style>`.
pub(crate) fn document_head(out: &mut String) {
    out.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Generated Image</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>"#,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_faces_embed_each_font() {
        let fonts = FontSet::from_bytes(b"reg", b"bold", b"mono");
        let css = font_faces(&fonts);
        assert_eq!(css.matches("@font-face").count(), 3);
        assert!(css.contains("base64,cmVn)"));
        assert!(css.contains("base64,Ym9sZA==)"));
        assert!(css.contains("base64,bW9ubw==)"));
        assert!(css.contains("font-family: 'Vera'"));
        assert!(css.contains("font-weight: bold"));
    }
}
