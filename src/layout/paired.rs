//! Paired-image (`ab-image`) layout: a full-bleed background image, a small
//! favicon pinned to the top-right corner, and a title bar over the top.
//!
//! This layout is image-forward and uses a web-safe font stack instead of the
//! embedded faces.

use super::style::{document_head, EMOJI_RULE};
use super::{PairedParams, RenderContext};
use crate::markdown;
use crate::sanitize::{escape_css_value, escape_html, SafeHtml};
use crate::theme;
use crate::{CanvasSizing, Document};
use std::fmt::Write;

pub const FONT_STACK: &str = "'Noto Sans SC', Helvetica, Arial, sans-serif";

/// Largest edge of the favicon overlay, in pixels
pub const FAVICON_MAX_PX: u32 = 80;

pub fn build(params: &PairedParams<'_>, ctx: &RenderContext<'_>) -> Document {
    let config = ctx.config;
    let foreground = theme::resolve(params.theme).foreground;
    let font_size = escape_css_value(params.font_size);
    let title = markdown::render(params.text.text, params.text.md, &config.emoji_base_url);
    let background = params
        .background
        .unwrap_or(config.background_placeholder.as_str());
    let favicon = params
        .favicon
        .unwrap_or(config.favicon_placeholder.as_str());
    let background = escape_html(background);
    let favicon = escape_html(favicon);

    let mut html = String::new();
    document_head(&mut html);
    html.push_str(&stylesheet(config.paired_canvas, foreground, &font_size));
    let _ = write!(
        html,
        r#"
    </style>
</head>
<body>
    <div class="title-bar">
        <div class="title-text">{title}</div>
    </div>
    <img class="favicon" src="{favicon}" alt="Icon" />
    <div class="image-container">
        <img class="background-image" src="{background}" alt="Background" />
    </div>
</body>
</html>
"#
    );

    Document::new(html)
}

fn canvas_rules(sizing: CanvasSizing) -> String {
    match sizing {
        CanvasSizing::Fluid => "width: 100vw;\n        height: 100vh;".to_string(),
        CanvasSizing::Fixed(v) => format!("width: {}px;\n        height: {}px;", v.width, v.height),
    }
}

fn stylesheet(sizing: CanvasSizing, foreground: &str, font_size: &SafeHtml) -> String {
    format!(
        r#"
    * {{
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }}

    body {{
        {canvas}
        display: flex;
        flex-direction: column;
        overflow: hidden;
        font-family: {fonts};
    }}

    .title-bar {{
        position: relative;
        background: transparent;
        color: {foreground};
        padding: 30px 40px;
        font-size: {font_size};
        font-weight: bold;
        line-height: 1.3;
        z-index: 2;
        display: flex;
        align-items: center;
        text-shadow: 2px 2px 4px rgba(0,0,0,0.8);
        flex-shrink: 0;
    }}

    .title-text {{
        flex: 1;
    }}

    .favicon {{
        position: absolute;
        top: 20px;
        right: 20px;
        max-height: {max}px;
        max-width: {max}px;
        z-index: 3;
    }}

    .image-container {{
        flex: 1;
        position: relative;
        overflow: hidden;
    }}

    .background-image {{
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: top center;
    }}
{emoji}"#,
        canvas = canvas_rules(sizing),
        fonts = FONT_STACK,
        foreground = foreground,
        font_size = font_size,
        max = FAVICON_MAX_PX,
        emoji = EMOJI_RULE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontSet;
    use crate::{
        ComposerConfig, LayoutMode, ParsedRequest, Theme, Viewport,
        DEFAULT_BACKGROUND_PLACEHOLDER, DEFAULT_FAVICON_PLACEHOLDER,
    };

    fn render_with(req: &ParsedRequest, config: &ComposerConfig) -> String {
        let fonts = FontSet::from_bytes(b"reg", b"bold", b"mono");
        let ctx = RenderContext {
            fonts: &fonts,
            config,
        };
        build(&PairedParams::from_request(req), &ctx).into_string()
    }

    fn render(req: &ParsedRequest) -> String {
        render_with(req, &ComposerConfig::default())
    }

    fn paired(images: &[&str]) -> ParsedRequest {
        ParsedRequest {
            text: "Title".into(),
            images: images.iter().map(|s| s.to_string()).collect(),
            layout_mode: LayoutMode::AbImage,
            ..Default::default()
        }
    }

    #[test]
    fn placeholders_fill_missing_images() {
        let html = render(&paired(&[]));
        assert!(html.contains(&format!(
            r#"class="background-image" src="{}""#,
            escape_html(DEFAULT_BACKGROUND_PLACEHOLDER)
        )));
        assert!(html.contains(&format!(
            r#"class="favicon" src="{}""#,
            escape_html(DEFAULT_FAVICON_PLACEHOLDER)
        )));

        let html = render(&paired(&["https://x/bg.png"]));
        assert!(html.contains(r#"class="background-image" src="https://x/bg.png""#));
        assert!(html.contains(&format!(
            r#"class="favicon" src="{}""#,
            escape_html(DEFAULT_FAVICON_PLACEHOLDER)
        )));
    }

    #[test]
    fn image_urls_are_escaped() {
        let html = render(&paired(&["x\" onerror=\"y", "https://x/i.png?a=1&b=2"]));
        assert!(html.contains(r#"src="x&quot; onerror=&quot;y""#));
        assert!(html.contains(r#"src="https://x/i.png?a=1&amp;b=2""#));
    }

    #[test]
    fn title_uses_theme_foreground() {
        let mut req = paired(&[]);
        req.theme = Theme::Dark;
        assert!(render(&req).contains("color: white;"));
        req.theme = Theme::Light;
        assert!(render(&req).contains("color: black;"));
    }

    #[test]
    fn does_not_embed_font_faces() {
        let html = render(&paired(&[]));
        assert!(!html.contains("@font-face"));
        assert!(html.contains(FONT_STACK));
    }

    #[test]
    fn canvas_sizing_follows_config() {
        let html = render(&paired(&[]));
        assert!(html.contains("width: 100vw;"));
        assert!(html.contains("height: 100vh;"));

        let config = ComposerConfig {
            paired_canvas: CanvasSizing::Fixed(Viewport {
                width: 1200,
                height: 630,
            }),
            ..Default::default()
        };
        let html = render_with(&paired(&[]), &config);
        assert!(html.contains("width: 1200px;"));
        assert!(html.contains("height: 630px;"));
        assert!(!html.contains("100vw"));
    }

    #[test]
    fn markdown_title_is_rendered() {
        let mut req = paired(&[]);
        req.text = "**Big** news".into();
        req.md = true;
        let html = render(&req);
        assert!(html.contains("<strong>Big</strong> news"));
    }
}
