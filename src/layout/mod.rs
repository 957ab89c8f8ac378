//! Layout selection and the two document builders.
//!
//! A request is resolved once into a [`Layout`] carrying only the fields its
//! builder reads, with index-aligned defaults and placeholders applied.

pub mod default;
pub mod paired;
mod style;

use crate::fonts::FontSet;
use crate::{ComposerConfig, Document, LayoutMode, ParsedRequest, Theme};

pub const DEFAULT_IMAGE_WIDTH: &str = "auto";
pub const DEFAULT_IMAGE_HEIGHT: &str = "225";

/// Everything a builder needs besides its own params
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub fonts: &'a FontSet,
    pub config: &'a ComposerConfig,
}

/// Card text with its rendering flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardText<'a> {
    pub text: &'a str,
    pub md: bool,
}

/// One logo of the default layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec<'a> {
    pub src: &'a str,
    pub width: &'a str,
    pub height: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultParams<'a> {
    pub text: CardText<'a>,
    pub theme: Theme,
    pub font_size: &'a str,
    pub images: Vec<ImageSpec<'a>>,
}

impl<'a> DefaultParams<'a> {
    pub fn from_request(req: &'a ParsedRequest) -> Self {
        let images = req
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| ImageSpec {
                src,
                width: req.widths.get(i).map_or(DEFAULT_IMAGE_WIDTH, String::as_str),
                height: req.heights.get(i).map_or(DEFAULT_IMAGE_HEIGHT, String::as_str),
            })
            .collect();
        Self {
            text: CardText {
                text: &req.text,
                md: req.md,
            },
            theme: req.theme,
            font_size: &req.font_size,
            images,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedParams<'a> {
    pub text: CardText<'a>,
    pub theme: Theme,
    pub font_size: &'a str,
    /// `images[0]`, `None` when absent or empty
    pub background: Option<&'a str>,
    /// `images[1]`, `None` when absent or empty
    pub favicon: Option<&'a str>,
}

impl<'a> PairedParams<'a> {
    pub fn from_request(req: &'a ParsedRequest) -> Self {
        let image = |i: usize| {
            req.images
                .get(i)
                .map(String::as_str)
                .filter(|s| !s.is_empty())
        };
        Self {
            text: CardText {
                text: &req.text,
                md: req.md,
            },
            theme: req.theme,
            font_size: &req.font_size,
            background: image(0),
            favicon: image(1),
        }
    }
}

/// A request resolved to exactly one builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout<'a> {
    Default(DefaultParams<'a>),
    PairedImage(PairedParams<'a>),
}

impl<'a> Layout<'a> {
    pub fn from_request(req: &'a ParsedRequest) -> Self {
        match req.layout_mode {
            LayoutMode::AbImage => Layout::PairedImage(PairedParams::from_request(req)),
            LayoutMode::Default => Layout::Default(DefaultParams::from_request(req)),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        match self {
            Layout::Default(_) => LayoutMode::Default,
            Layout::PairedImage(_) => LayoutMode::AbImage,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Document {
        match self {
            Layout::Default(params) => default::build(params, ctx),
            Layout::PairedImage(params) => paired::build(params, ctx),
        }
    }
}

/// A document builder working from the full request
pub type BuildFn = fn(&ParsedRequest, &RenderContext<'_>) -> Document;

/// Pick the builder for a layout mode.
pub fn select(mode: LayoutMode) -> BuildFn {
    match mode {
        LayoutMode::AbImage => build_paired,
        LayoutMode::Default => build_default,
    }
}

fn build_default(req: &ParsedRequest, ctx: &RenderContext<'_>) -> Document {
    default::build(&DefaultParams::from_request(req), ctx)
}

fn build_paired(req: &ParsedRequest, ctx: &RenderContext<'_>) -> Document {
    paired::build(&PairedParams::from_request(req), ctx)
}
