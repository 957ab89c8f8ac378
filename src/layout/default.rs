//! Default layout: a row of logos joined by `+` above the card heading.
//!
//! Sizing is intrinsic. The body centres the content with flexbox and the
//! spacer margins frame it; no canvas dimensions are set.

use super::style::{document_head, font_faces, EMOJI_RULE};
use super::{DefaultParams, ImageSpec, RenderContext};
use crate::markdown;
use crate::sanitize::{escape_css_value, escape_html, SafeHtml};
use crate::theme::{self, ThemeTokens};
use crate::Document;
use std::fmt::Write;

pub const SEPARATOR: &str = r#"<div class="plus">+</div>"#;

pub fn build(params: &DefaultParams<'_>, ctx: &RenderContext<'_>) -> Document {
    let tokens = theme::resolve(params.theme);
    let font_size = escape_css_value(params.font_size);
    let heading = markdown::render(
        params.text.text,
        params.text.md,
        &ctx.config.emoji_base_url,
    );

    let mut html = String::new();
    document_head(&mut html);
    html.push_str(&font_faces(ctx.fonts));
    html.push_str(&stylesheet(&tokens, &font_size));
    html.push_str(
        r#"
    </style>
</head>
<body>
    <div>
        <div class="spacer">
            <div class="logo-wrapper">
"#,
    );
    html.push_str(&logo_row(&params.images));
    let _ = write!(
        html,
        r#"            </div>
            <div class="spacer">
                <div class="heading">{heading}</div>
            </div>
        </div>
    </div>
</body>
</html>
"#
    );

    Document::new(html)
}

fn logo_row(images: &[ImageSpec<'_>]) -> String {
    let mut row = String::new();
    for (i, image) in images.iter().enumerate() {
        if i > 0 {
            row.push_str("                ");
            row.push_str(SEPARATOR);
            row.push('\n');
        }
        let _ = writeln!(
            row,
            r#"                <img class="logo" alt="Generated Image" src="{}" width="{}" height="{}" />"#,
            escape_html(image.src),
            escape_html(image.width),
            escape_html(image.height)
        );
    }
    row
}

fn stylesheet(tokens: &ThemeTokens, font_size: &SafeHtml) -> String {
    format!(
        r#"
    body {{
        background: {background};
        background-image: radial-gradient(circle at 25px 25px, {radial} 2%, transparent 0%), radial-gradient(circle at 75px 75px, {radial} 2%, transparent 0%);
        background-size: 100px 100px;
        height: 100vh;
        display: flex;
        text-align: center;
        align-items: center;
        justify-content: center;
    }}

    code {{
        color: #D400FF;
        font-family: 'Vera';
        white-space: pre-wrap;
        letter-spacing: -5px;
    }}

    code:before, code:after {{
        content: '`';
    }}

    .logo-wrapper {{
        display: flex;
        align-items: center;
        align-content: center;
        justify-content: center;
        justify-items: center;
        margin-bottom: 50px;
    }}

    .logo {{
        margin: 0 75px;
    }}

    .plus {{
        color: #BBB;
        font-family: Times New Roman, Verdana;
        font-size: 100px;
    }}

    .spacer {{
        margin: 150px;
    }}
{emoji}

    .heading {{
        font-family: 'Noto Sans SC', 'Inter', sans-serif;
        font-size: {font_size};
        font-style: normal;
        color: {foreground};
        line-height: 1.8;
    }}"#,
        background = tokens.background,
        radial = tokens.radial_accent,
        foreground = tokens.foreground,
        emoji = EMOJI_RULE,
        font_size = font_size,
    )
}
