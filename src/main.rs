use anyhow::{bail, Context};
use clap::Parser;
use og_compose::{
    CanvasSizing, Composer, ComposerConfig, Error, LayoutMode, ParsedRequest, Theme, Viewport,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Compose the HTML document for a social card image
#[derive(Parser, Debug)]
#[command(name = "og-compose", version, about)]
struct Cli {
    /// JSON request file (`-` reads stdin); flags below are ignored when set
    #[arg(long)]
    request: Option<PathBuf>,

    /// Card text
    #[arg(long, default_value = "")]
    text: String,

    /// `light` or `dark`
    #[arg(long, default_value = "light")]
    theme: String,

    /// Treat text as markdown
    #[arg(long)]
    md: bool,

    #[arg(long, default_value = "96px")]
    font_size: String,

    /// Image URL, repeatable
    #[arg(long = "image")]
    images: Vec<String>,

    /// Image width, repeatable, aligned with --image
    #[arg(long = "width")]
    widths: Vec<String>,

    /// Image height, repeatable, aligned with --image
    #[arg(long = "height")]
    heights: Vec<String>,

    /// `default` or `ab-image`
    #[arg(long, default_value = "default")]
    layout: String,

    /// Directory containing the font assets
    #[arg(long, default_value = "assets/fonts")]
    font_dir: PathBuf,

    /// Fixed canvas for the ab-image layout, e.g. 1200x630
    #[arg(long)]
    fixed_canvas: Option<String>,

    /// Write the document here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn parse_canvas(s: &str) -> anyhow::Result<Viewport> {
    let Some((w, h)) = s.split_once('x') else {
        bail!("expected WIDTHxHEIGHT, got {:?}", s);
    };
    Ok(Viewport {
        width: w.trim().parse().context("canvas width")?,
        height: h.trim().parse().context("canvas height")?,
    })
}

fn read_request(path: &Path) -> og_compose::Result<ParsedRequest> {
    let data = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    if data.trim().is_empty() {
        return Err(Error::RequestError("empty request document".into()));
    }
    Ok(serde_json::from_str(&data)?)
}

fn request_from_flags(cli: &Cli) -> ParsedRequest {
    ParsedRequest {
        text: cli.text.clone(),
        theme: Theme::parse(&cli.theme),
        md: cli.md,
        font_size: cli.font_size.clone(),
        images: cli.images.clone(),
        widths: cli.widths.clone(),
        heights: cli.heights.clone(),
        layout_mode: LayoutMode::parse(&cli.layout),
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paired_canvas = match cli.fixed_canvas.as_deref() {
        Some(s) => CanvasSizing::Fixed(parse_canvas(s)?),
        None => CanvasSizing::Fluid,
    };
    let config = ComposerConfig {
        font_dir: cli.font_dir.clone(),
        paired_canvas,
        ..Default::default()
    };
    // fonts are loaded before any request is read
    let composer = Composer::new(config).context("composer startup failed")?;

    let request = match &cli.request {
        Some(path) => read_request(path)
            .with_context(|| format!("reading request {}", path.display()))?,
        None => request_from_flags(&cli),
    };
    log::info!(
        "Composing {} card ({:?} output)",
        request.layout_mode.as_str(),
        request.file_type
    );
    let document = composer.compose(&request);

    match &cli.output {
        Some(path) => std::fs::write(path, document.as_str())
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(document.as_str().as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_canvas() {
        assert_eq!(
            parse_canvas("1200x630").unwrap(),
            Viewport {
                width: 1200,
                height: 630,
            }
        );
        assert!(parse_canvas("1200").is_err());
        assert!(parse_canvas("axb").is_err());
    }

    #[test]
    fn flags_build_a_request() {
        let cli = Cli::parse_from([
            "og-compose",
            "--text",
            "Hi",
            "--theme",
            "dark",
            "--image",
            "a",
            "--image",
            "b",
            "--width",
            "10",
            "--layout",
            "ab-image",
        ]);
        let req = request_from_flags(&cli);
        assert_eq!(req.theme, Theme::Dark);
        assert_eq!(req.images, vec!["a", "b"]);
        assert_eq!(req.widths, vec!["10"]);
        assert_eq!(req.layout_mode, LayoutMode::AbImage);
    }
}
