//! Theme resolution: maps a theme identifier to its colour tokens.

use serde::{Deserialize, Serialize};

/// Colour theme requested for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme identifier. Only the exact token `dark` selects the dark
    /// theme; anything else is light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            other => {
                log::warn!("Unrecognized theme {:?}, falling back to light", other);
                Theme::Light
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl From<String> for Theme {
    fn from(s: String) -> Self {
        Theme::parse(&s)
    }
}

impl From<Theme> for String {
    fn from(t: Theme) -> Self {
        t.as_str().to_string()
    }
}

/// The resolved colour triple for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub foreground: &'static str,
    /// Colour of the dotted radial-gradient pattern
    pub radial_accent: &'static str,
}

pub const LIGHT: ThemeTokens = ThemeTokens {
    background: "white",
    foreground: "black",
    radial_accent: "lightgray",
};

pub const DARK: ThemeTokens = ThemeTokens {
    background: "black",
    foreground: "white",
    radial_accent: "dimgray",
};

/// Resolve the palette for a theme.
pub fn resolve(theme: Theme) -> ThemeTokens {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// Resolve the palette straight from an identifier string.
pub fn resolve_str(theme: &str) -> ThemeTokens {
    resolve(Theme::parse(theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_only_for_exact_token() {
        assert_eq!(resolve_str("dark"), DARK);
        for other in ["light", "", "Dark", "DARK", " dark", "solarized", "dark\n"] {
            assert_eq!(resolve_str(other), LIGHT, "input {:?}", other);
        }
    }

    #[test]
    fn palettes_match_expected_colours() {
        assert_eq!(LIGHT.background, "white");
        assert_eq!(LIGHT.foreground, "black");
        assert_eq!(LIGHT.radial_accent, "lightgray");
        assert_eq!(DARK.background, "black");
        assert_eq!(DARK.foreground, "white");
        assert_eq!(DARK.radial_accent, "dimgray");
    }

    #[test]
    fn unknown_theme_deserializes_to_light() {
        let t: Theme = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(t, Theme::Light);
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
