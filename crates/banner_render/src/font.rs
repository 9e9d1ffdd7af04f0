use std::borrow::Cow;

use fontdue::{Font, FontSettings};
use log::debug;

use crate::BannerError;

/// Coverage at or above this midpoint counts as ink.
const INK_THRESHOLD: u8 = 128;

/// Pixel size the built-in faces are rasterized at.
const BUILTIN_PX: f32 = 8.0;

struct FontEntry {
    name: String,
    data: Cow<'static, [u8]>,
    px: f32,
}

/// The set of fonts a [`Face`] can be built from.
///
/// Supplied explicitly at construction time so tests can register synthetic
/// fonts instead of relying on a process-wide registry.
pub struct FontCatalog {
    fonts: Vec<FontEntry>,
}

impl FontCatalog {
    /// Catalog with no fonts registered.
    pub fn empty() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Catalog of the embedded DejaVu faces.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.register(
            "sans_mono",
            &include_bytes!("../fonts/DejaVuSansMono.ttf")[..],
            BUILTIN_PX,
        );
        catalog.register(
            "sans_bold",
            &include_bytes!("../fonts/DejaVuSansMono-Bold.ttf")[..],
            BUILTIN_PX,
        );
        catalog.register("serif", &include_bytes!("../fonts/DejaVuSerif.ttf")[..], BUILTIN_PX);
        catalog
    }

    /// Registers raw TTF/OTF bytes under `name`, rasterized at `px` pixels.
    pub fn register(&mut self, name: &str, data: impl Into<Cow<'static, [u8]>>, px: f32) {
        self.fonts.push(FontEntry { name: name.to_string(), data: data.into(), px });
    }

    /// Names of all registered fonts, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.fonts.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Builds the face registered under `name`.
    pub fn face(&self, name: &str) -> Result<Face, BannerError> {
        let entry = self
            .fonts
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| BannerError::UnknownFont {
                name: name.to_string(),
                available: self.names().join(", "),
            })?;
        Face::from_bytes(&entry.data, entry.px)
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A parsed font face with a fixed pixel height.
///
/// Construction is the only costly step; the face is immutable afterwards
/// and can be shared read-only across any number of render calls.
#[derive(Debug)]
pub struct Face {
    font: Font,
    px: f32,
    height: usize,
    ascent: i32,
}

impl Face {
    /// Parses raw outline-font bytes into a face rasterized at `px` pixels.
    pub fn from_bytes(data: &[u8], px: f32) -> Result<Self, BannerError> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|err| BannerError::FontParse(err.to_string()))?;

        // Pixel height is ascent plus descent magnitude, whole pixels.
        let (height, ascent) = match font.horizontal_line_metrics(px) {
            Some(metrics) => {
                let ascent = metrics.ascent.ceil() as i32;
                let descent = (-metrics.descent).ceil() as i32;
                ((ascent + descent).max(1) as usize, ascent)
            },
            None => (px.ceil().max(1.0) as usize, px.ceil() as i32),
        };

        debug!("parsed font face: px {}, height {}, ascent {}", px, height, ascent);
        Ok(Self { font, px, height, ascent })
    }

    /// Fixed pixel height of every glyph bitmap this face produces.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Horizontal advance of `ch` in whole pixels. Falls back to the face
    /// height when the font carries no glyph for the code point.
    pub fn advance(&self, ch: char) -> usize {
        if self.font.lookup_glyph_index(ch) == 0 {
            return self.height;
        }
        self.font.metrics(ch, self.px).advance_width.ceil() as usize
    }

    /// Rasterizes `ch` into a binary bitmap of `height()` rows.
    ///
    /// The glyph is drawn with its baseline at the ascent row, thresholded
    /// to ink/no-ink, trimmed to its ink-bearing columns, and given one
    /// blank column of left padding. Concatenating bitmaps edge-to-edge
    /// therefore leaves exactly one empty column between glyphs. A glyph
    /// with no ink (whitespace) yields a single blank column.
    pub fn rune_bitmap(&self, ch: char) -> Vec<Vec<bool>> {
        let advance = self.advance(ch);
        let width = advance.max(self.height);
        let mut canvas = vec![vec![false; width]; self.height];

        let (metrics, coverage) = self.font.rasterize(ch, self.px);
        let top = self.ascent - metrics.ymin - metrics.height as i32;
        for (row, line) in coverage.chunks(metrics.width.max(1)).enumerate() {
            let y = top + row as i32;
            if y < 0 || y >= self.height as i32 {
                continue;
            }
            for (col, &value) in line.iter().enumerate() {
                let x = metrics.xmin + col as i32;
                if x < 0 || x >= width as i32 {
                    continue;
                }
                if value >= INK_THRESHOLD {
                    canvas[y as usize][x as usize] = true;
                }
            }
        }

        let mut min_x = width;
        let mut max_x = 0;
        let mut has_ink = false;
        for row in &canvas {
            for (x, &on) in row.iter().enumerate() {
                if on {
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                    has_ink = true;
                }
            }
        }

        if !has_ink {
            return vec![vec![false]; self.height];
        }

        let trimmed = max_x - min_x + 1;
        canvas
            .into_iter()
            .map(|row| {
                let mut out = vec![false; trimmed + 1];
                out[1..].copy_from_slice(&row[min_x..=max_x]);
                out
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_face() -> Face {
        FontCatalog::builtin().face("sans_mono").unwrap()
    }

    #[test]
    fn builtin_fonts_parse() {
        let catalog = FontCatalog::builtin();
        for name in ["sans_mono", "sans_bold", "serif"] {
            let face = catalog.face(name).unwrap();
            assert!(face.height() > 0, "{} has zero height", name);
        }
    }

    #[test]
    fn unknown_font_errors() {
        let err = FontCatalog::builtin().face("nonexistent_font").unwrap_err();
        assert!(err.to_string().contains("nonexistent_font"));
    }

    #[test]
    fn malformed_font_errors() {
        assert!(Face::from_bytes(&[0u8; 16], 8.0).is_err());
    }

    #[test]
    fn bitmap_has_fixed_height_and_left_pad() {
        let face = test_face();
        let bitmap = face.rune_bitmap('A');
        assert_eq!(bitmap.len(), face.height());

        let width = bitmap[0].len();
        assert!(width > 1);
        assert!(bitmap.iter().all(|row| row.len() == width));
        assert!(bitmap.iter().all(|row| !row[0]), "left padding column carries ink");
        assert!(bitmap.iter().flatten().any(|&on| on), "'A' rasterized blank");
    }

    #[test]
    fn trimmed_columns_touch_ink() {
        let face = test_face();
        let bitmap = face.rune_bitmap('A');
        let width = bitmap[0].len();
        // Column 1 (first after the pad) and the last column both carry ink.
        assert!(bitmap.iter().any(|row| row[1]));
        assert!(bitmap.iter().any(|row| row[width - 1]));
    }

    #[test]
    fn whitespace_is_single_blank_column() {
        let face = test_face();
        let bitmap = face.rune_bitmap(' ');
        assert_eq!(bitmap.len(), face.height());
        assert!(bitmap.iter().all(|row| row.len() == 1 && !row[0]));
    }

    #[test]
    fn advance_is_positive() {
        let face = test_face();
        assert!(face.advance('A') > 0);
        assert!(face.advance(' ') > 0);
    }
}
