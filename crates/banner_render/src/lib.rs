mod banner;
pub mod color;
pub mod font;

use std::str::FromStr;

pub use banner::generate;
pub use banner::shadow::{classify, GlyphSet, ShadowShape};
pub use color::{parse_color, shift_color, Rgb, RESET};
pub use font::{Face, FontCatalog};

#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    #[error("unknown font {name:?} (available: {available})")]
    UnknownFont { name: String, available: String },
    #[error("failed to parse font data: {0}")]
    FontParse(String),
    #[error("invalid color {0:?} (use a preset name, RRGGBB, or r,g,b)")]
    InvalidColor(String),
    #[error("unknown shadow style {0:?} (use outline or solid)")]
    UnknownShadow(String),
}

/// Shadow rendering style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadowStyle {
    #[default]
    None,
    Outline,
    Solid,
}

impl FromStr for ShadowStyle {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(ShadowStyle::None),
            "outline" => Ok(ShadowStyle::Outline),
            "solid" => Ok(ShadowStyle::Solid),
            other => Err(BannerError::UnknownShadow(other.to_string())),
        }
    }
}

/// Controls how a banner is rendered.
#[derive(Clone, Debug, Default)]
pub struct BannerOptions {
    pub shadow: ShadowStyle,
    /// Color specification; `None` renders monochrome. An unparseable
    /// specification also falls back to monochrome instead of failing.
    pub color: Option<String>,
    /// Sweep the hue across the line, left to right.
    pub gradient: bool,
    /// Override for the ink glyph string (default `██`).
    pub on_glyph: Option<String>,
    /// Override for the empty glyph string (default two spaces).
    pub off_glyph: Option<String>,
}
