//! og-compose
//!
//! Composes the self-contained HTML document that a screenshot renderer turns
//! into a social card image. A [`ParsedRequest`] goes in, a [`Document`]
//! comes out: one HTML string with inlined fonts and styles, no scripts, and
//! every request field escaped or rendered through the markdown pipeline.
//!
//! # Features
//!
//! - **Two layouts**: an N-logo comparison card and a background + favicon card
//! - **Typed trust boundary**: builders only interpolate [`SafeHtml`]
//! - **Fonts loaded once**: the [`FontSet`] is read when the [`Composer`] is
//!   built and shared read-only by every call
//!
//! # Example
//!
//! ```no_run
//! use og_compose::{Composer, ComposerConfig, ParsedRequest, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ComposerConfig {
//!     font_dir: "assets/fonts".into(),
//!     ..Default::default()
//! };
//! let composer = Composer::new(config)?;
//!
//! let request = ParsedRequest {
//!     text: "**Hello** world 👋".to_string(),
//!     md: true,
//!     theme: Theme::Dark,
//!     images: vec!["https://example.com/logo.svg".to_string()],
//!     ..Default::default()
//! };
//! let document = composer.compose(&request);
//! println!("{}", document);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod emoji;
pub mod fonts;
pub mod layout;
pub mod markdown;
pub mod sanitize;
pub mod theme;

pub use fonts::FontSet;
pub use layout::{select, BuildFn, Layout, RenderContext};
pub use sanitize::SafeHtml;
pub use theme::{Theme, ThemeTokens};

/// Placeholder shown when a paired-image request has no background image
pub const DEFAULT_BACKGROUND_PLACEHOLDER: &str =
    "https://via.placeholder.com/1200x630/cccccc/666666?text=Background+Image";

/// Placeholder shown when a paired-image request has no favicon
pub const DEFAULT_FAVICON_PLACEHOLDER: &str =
    "https://via.placeholder.com/64/000000/ffffff?text=Icon";

/// Output image format requested by the caller.
///
/// Composition does not depend on it; it is carried for the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Png,
    Jpeg,
}

/// Which document builder handles a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutMode {
    /// Row of logos above a heading
    #[default]
    Default,
    /// Full-bleed background image with a favicon and a title bar
    AbImage,
}

impl LayoutMode {
    /// Parse a layout identifier. Only `ab-image` selects the paired-image
    /// layout; anything else keeps the default one.
    pub fn parse(s: &str) -> Self {
        match s {
            "ab-image" => LayoutMode::AbImage,
            "default" | "" => LayoutMode::Default,
            other => {
                log::warn!("Unrecognized layout mode {:?}, using default", other);
                LayoutMode::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Default => "default",
            LayoutMode::AbImage => "ab-image",
        }
    }
}

impl From<String> for LayoutMode {
    fn from(s: String) -> Self {
        LayoutMode::parse(&s)
    }
}

impl From<LayoutMode> for String {
    fn from(m: LayoutMode) -> Self {
        m.as_str().to_string()
    }
}

/// A validated image-generation request.
///
/// Every string field is untrusted. The composer never writes one into a
/// document without escaping it or rendering it as markdown first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedRequest {
    pub file_type: FileType,
    /// Card text, markdown when `md` is set
    pub text: String,
    pub theme: Theme,
    /// Interpret `text` as markdown
    pub md: bool,
    /// CSS length for the heading, e.g. `96px`
    pub font_size: String,
    /// Logo URLs, or `[background, favicon]` for the paired-image layout
    pub images: Vec<String>,
    /// Per-image widths aligned with `images`
    pub widths: Vec<String>,
    /// Per-image heights aligned with `images`
    pub heights: Vec<String>,
    pub layout_mode: LayoutMode,
}

impl Default for ParsedRequest {
    fn default() -> Self {
        Self {
            file_type: FileType::Png,
            text: String::new(),
            theme: Theme::Light,
            md: false,
            font_size: "96px".to_string(),
            images: Vec::new(),
            widths: Vec::new(),
            heights: Vec::new(),
            layout_mode: LayoutMode::Default,
        }
    }
}

/// Canvas dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
        }
    }
}

/// How the paired-image layout sizes its canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasSizing {
    /// Fill the renderer's viewport (`100vw` x `100vh`)
    #[default]
    Fluid,
    /// Fixed pixel canvas, e.g. 1200x630
    Fixed(Viewport),
}

/// Configuration for the composer
///
/// The defaults match the stock asset layout and placeholder images:
///
/// ```
/// let cfg = og_compose::ComposerConfig::default();
/// assert_eq!(cfg.paired_canvas, og_compose::CanvasSizing::Fluid);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Directory holding `Inter-Regular.woff2`, `Inter-Bold.woff2` and `Vera-Mono.woff2`
    pub font_dir: PathBuf,
    /// Root URL of the Twemoji assets (must end with `/`)
    pub emoji_base_url: String,
    /// Background used by the paired-image layout when `images[0]` is absent
    pub background_placeholder: String,
    /// Favicon used by the paired-image layout when `images[1]` is absent
    pub favicon_placeholder: String,
    /// Canvas sizing of the paired-image layout
    pub paired_canvas: CanvasSizing,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("assets/fonts"),
            emoji_base_url: emoji::DEFAULT_EMOJI_BASE.to_string(),
            background_placeholder: DEFAULT_BACKGROUND_PLACEHOLDER.to_string(),
            favicon_placeholder: DEFAULT_FAVICON_PLACEHOLDER.to_string(),
            paired_canvas: CanvasSizing::Fluid,
        }
    }
}

impl ComposerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.emoji_base_url.is_empty() {
            return Err(Error::ConfigError("emoji_base_url must not be empty".into()));
        }
        if !self.emoji_base_url.ends_with('/') {
            return Err(Error::ConfigError(format!(
                "emoji_base_url must end with '/': {}",
                self.emoji_base_url
            )));
        }
        if self.background_placeholder.is_empty() || self.favicon_placeholder.is_empty() {
            return Err(Error::ConfigError("placeholder URLs must not be empty".into()));
        }
        if let CanvasSizing::Fixed(v) = self.paired_canvas {
            if v.width == 0 || v.height == 0 {
                return Err(Error::ConfigError(format!(
                    "fixed canvas must be non-empty, got {}x{}",
                    v.width, v.height
                )));
            }
        }
        Ok(())
    }
}

/// A complete HTML document ready for the rasterizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    pub(crate) fn new(html: String) -> Self {
        Self { html }
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// The composition engine.
///
/// Holds the configuration and the font set loaded at construction. It is
/// immutable afterwards, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Composer {
    config: ComposerConfig,
    fonts: FontSet,
}

impl Composer {
    /// Validate `config` and load the fonts from `config.font_dir`.
    pub fn new(config: ComposerConfig) -> Result<Self> {
        config.validate()?;
        let fonts = FontSet::load(&config.font_dir)?;
        Ok(Self { config, fonts })
    }

    /// Build a composer around fonts that are already in memory.
    pub fn with_fonts(config: ComposerConfig, fonts: FontSet) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fonts })
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn context(&self) -> RenderContext<'_> {
        RenderContext {
            fonts: &self.fonts,
            config: &self.config,
        }
    }

    /// Compose the document for one request. Never fails.
    pub fn compose(&self, request: &ParsedRequest) -> Document {
        let layout = Layout::from_request(request);
        let document = layout.render(&self.context());
        log::debug!(
            "Composed {} document ({} images, {} bytes)",
            layout.mode().as_str(),
            request.images.len(),
            document.len()
        );
        document
    }
}
