use super::grid::PixelGrid;
use crate::color::{shift_color, Rgb, RESET};

/// Largest hue shift of the positional gradient, in degrees. The shift
/// sweeps linearly from `+GRADIENT_HUE_DEG` at the left edge of a line to
/// `-GRADIENT_HUE_DEG` at the right edge; lightness is left untouched so
/// perceived brightness stays stable across the sweep.
const GRADIENT_HUE_DEG: f64 = 18.0;

/// Pseudo-3D shadow cast below and to the right of the ink region,
/// classified per empty cell from the three occupied-neighbor booleans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowShape {
    Corner,
    VerticalThrough,
    Vertical,
    HorizontalThrough,
    Horizontal,
    Diagonal,
}

/// Classifies an empty cell from its left, above, and above-left neighbors.
///
/// Returns the shadow shape together with the `(dy, dx)` offset of the cell
/// the shadow borrows its color from, or `None` when no neighbor is set.
/// The precedence order is the renderer's core compatibility contract.
pub fn classify(left: bool, above: bool, diag: bool) -> Option<(ShadowShape, (isize, isize))> {
    match (left, above, diag) {
        (true, true, _) => Some((ShadowShape::Corner, (0, -1))),
        (true, false, true) => Some((ShadowShape::VerticalThrough, (0, -1))),
        (true, false, false) => Some((ShadowShape::Vertical, (0, -1))),
        (false, true, true) => Some((ShadowShape::HorizontalThrough, (-1, 0))),
        (false, true, false) => Some((ShadowShape::Horizontal, (-1, 0))),
        (false, false, true) => Some((ShadowShape::Diagonal, (-1, -1))),
        (false, false, false) => None,
    }
}

#[derive(Clone, Debug)]
struct ShadowGlyphs {
    corner: &'static str,
    vertical_through: &'static str,
    vertical: &'static str,
    horizontal_through: &'static str,
    horizontal: &'static str,
    diagonal: &'static str,
}

impl ShadowGlyphs {
    fn glyph(&self, shape: ShadowShape) -> &'static str {
        match shape {
            ShadowShape::Corner => self.corner,
            ShadowShape::VerticalThrough => self.vertical_through,
            ShadowShape::Vertical => self.vertical,
            ShadowShape::HorizontalThrough => self.horizontal_through,
            ShadowShape::Horizontal => self.horizontal,
            ShadowShape::Diagonal => self.diagonal,
        }
    }
}

/// Glyph table for one rendering style: the ink and empty strings plus, for
/// shadowed styles, the six shadow strings.
#[derive(Clone, Debug)]
pub struct GlyphSet {
    on: String,
    off: String,
    shadow: Option<ShadowGlyphs>,
}

impl GlyphSet {
    /// Plain style: ink and empty glyphs only, no shadow synthesis.
    pub fn plain(on: Option<&str>, off: Option<&str>) -> Self {
        Self {
            on: on.unwrap_or("██").to_string(),
            off: off.unwrap_or("  ").to_string(),
            shadow: None,
        }
    }

    /// Box-drawing shadow style.
    pub fn outline(on: Option<&str>, off: Option<&str>) -> Self {
        Self {
            on: on.unwrap_or("██").to_string(),
            off: off.unwrap_or("  ").to_string(),
            shadow: Some(ShadowGlyphs {
                corner: "╔═",
                vertical_through: "║ ",
                vertical: "╗ ",
                horizontal_through: "══",
                horizontal: "╚═",
                diagonal: "╝ ",
            }),
        }
    }

    /// Shading/block shadow style.
    pub fn solid(on: Option<&str>, off: Option<&str>) -> Self {
        Self {
            on: on.unwrap_or("░░").to_string(),
            off: off.unwrap_or("  ").to_string(),
            shadow: Some(ShadowGlyphs {
                corner: "█▀",
                vertical_through: "█ ",
                vertical: "▄ ",
                horizontal_through: "▀▀",
                horizontal: " ▀",
                diagonal: "▀ ",
            }),
        }
    }
}

/// Applies the per-call color to glyph strings.
///
/// The color specification is parsed once per render call, never per pixel;
/// the painter only shifts and formats it.
pub struct Painter {
    color: Option<Rgb>,
    gradient: bool,
    /// Width of the original grid; gradients normalize against it even on
    /// the shadow-extended canvas.
    span: usize,
}

impl Painter {
    pub fn new(color: Option<Rgb>, gradient: bool, span: usize) -> Self {
        Self { color, gradient, span }
    }

    fn paint(&self, glyph: &str, x: isize) -> String {
        let Some(base) = self.color else {
            return glyph.to_string();
        };

        let color = if self.gradient && self.span > 1 {
            let t = (x as f64 / (self.span - 1) as f64).clamp(0.0, 1.0);
            shift_color(base, GRADIENT_HUE_DEG * (1.0 - 2.0 * t), 0.0)
        } else {
            base
        };

        format!("{}{}{}", color.ansi(), glyph, RESET)
    }
}

/// Renders the grid to one output line per canvas row, shadowed or plain
/// depending on the glyph set.
pub fn render(grid: &PixelGrid, set: &GlyphSet, painter: &Painter) -> Vec<String> {
    match &set.shadow {
        Some(shadows) => render_shadowed(grid, set, shadows, painter),
        None => render_plain(grid, set, painter),
    }
}

fn render_plain(grid: &PixelGrid, set: &GlyphSet, painter: &Painter) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.height());
    for y in 0..grid.height() as isize {
        let mut line = String::new();
        for x in 0..grid.width() as isize {
            if grid.is_on(y, x) {
                line.push_str(&painter.paint(&set.on, x));
            } else {
                line.push_str(&set.off);
            }
        }
        lines.push(line);
    }
    lines
}

fn render_shadowed(
    grid: &PixelGrid,
    set: &GlyphSet,
    shadows: &ShadowGlyphs,
    painter: &Painter,
) -> Vec<String> {
    // One extra row and column hold the shadow cast past the grid edge.
    let out_height = grid.height() as isize + 1;
    let out_width = grid.width() as isize + 1;

    let mut lines = Vec::with_capacity(out_height as usize);
    for y in 0..out_height {
        let mut line = String::new();
        for x in 0..out_width {
            if grid.is_on(y, x) {
                line.push_str(&painter.paint(&set.on, x));
                continue;
            }

            let left = grid.is_on(y, x - 1);
            let above = grid.is_on(y - 1, x);
            let diag = grid.is_on(y - 1, x - 1);

            match classify(left, above, diag) {
                Some((shape, (_, dx))) => {
                    line.push_str(&painter.paint(shadows.glyph(shape), x + dx));
                },
                None => line.push_str(&set.off),
            }
        }
        lines.push(line);
    }
    lines
}
