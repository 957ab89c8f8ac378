//! Font asset embedding.
//!
//! The three font binaries are read once when the [`Composer`](crate::Composer)
//! is built and kept as base64 for its lifetime. Builders receive the set by
//! reference through the render context.

use crate::{Error, Result};
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const REGULAR_FILE: &str = "Inter-Regular.woff2";
pub const BOLD_FILE: &str = "Inter-Bold.woff2";
pub const MONO_FILE: &str = "Vera-Mono.woff2";

/// Base64-encoded font binaries ready to be inlined as `data:` URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    regular: String,
    bold: String,
    mono: String,
}

impl FontSet {
    /// Read the fixed font files from `dir`.
    ///
    /// Any missing or unreadable file is an error: a composer that cannot
    /// embed its fonts must not serve requests.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let regular = read_asset(dir.join(REGULAR_FILE))?;
        let bold = read_asset(dir.join(BOLD_FILE))?;
        let mono = read_asset(dir.join(MONO_FILE))?;
        log::info!(
            "Loaded fonts from {} (regular {}B, bold {}B, mono {}B)",
            dir.display(),
            regular.len(),
            bold.len(),
            mono.len()
        );
        Ok(Self::from_bytes(&regular, &bold, &mono))
    }

    /// Build a font set from in-memory binaries.
    pub fn from_bytes(regular: &[u8], bold: &[u8], mono: &[u8]) -> Self {
        let engine = base64::engine::general_purpose::STANDARD;
        Self {
            regular: engine.encode(regular),
            bold: engine.encode(bold),
            mono: engine.encode(mono),
        }
    }

    pub fn regular_base64(&self) -> &str {
        &self.regular
    }

    pub fn bold_base64(&self) -> &str {
        &self.bold
    }

    pub fn mono_base64(&self) -> &str {
        &self.mono
    }
}

// fs::read opens, reads and closes the handle before returning
fn read_asset(path: PathBuf) -> Result<Vec<u8>> {
    fs::read(&path).map_err(|source| Error::FontAsset { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_encodes_base64() {
        let set = FontSet::from_bytes(b"reg", b"bold", b"mono");
        assert_eq!(set.regular_base64(), "cmVn");
        assert_eq!(set.bold_base64(), "Ym9sZA==");
        assert_eq!(set.mono_base64(), "bW9ubw==");
    }

    #[test]
    fn load_reads_all_three_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGULAR_FILE), b"reg").unwrap();
        fs::write(dir.path().join(BOLD_FILE), b"bold").unwrap();
        fs::write(dir.path().join(MONO_FILE), b"mono").unwrap();

        let set = FontSet::load(dir.path()).expect("fonts should load");
        assert_eq!(set, FontSet::from_bytes(b"reg", b"bold", b"mono"));
    }

    #[test]
    fn missing_font_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(REGULAR_FILE), b"reg").unwrap();
        fs::write(dir.path().join(MONO_FILE), b"mono").unwrap();

        match FontSet::load(dir.path()) {
            Err(Error::FontAsset { path, .. }) => assert!(path.ends_with(BOLD_FILE)),
            other => panic!("expected FontAsset error, got {:?}", other),
        }
    }
}
