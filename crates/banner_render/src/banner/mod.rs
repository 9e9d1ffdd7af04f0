pub mod grid;
pub mod shadow;

use log::debug;

use crate::color::parse_color;
use crate::font::Face;
use crate::{BannerOptions, ShadowStyle};
use grid::PixelGrid;
use shadow::{GlyphSet, Painter};

/// Renders `text` into a multi-line banner string.
///
/// Newline-separated segments are rendered independently and joined with one
/// blank line; empty segments are dropped. A pure function of its inputs:
/// the face is only read, and nothing is cached between calls.
pub fn generate(face: &Face, text: &str, options: &BannerOptions) -> String {
    if text.contains('\n') {
        let blocks: Vec<String> = text
            .split('\n')
            .filter(|segment| !segment.is_empty())
            .map(|segment| generate(face, segment, options))
            .collect();
        return blocks.join("\n\n");
    }

    if text.is_empty() {
        return String::new();
    }

    let bitmaps: Vec<Vec<Vec<bool>>> = text.chars().map(|ch| face.rune_bitmap(ch)).collect();
    let grid = PixelGrid::from_bitmaps(face.height(), &bitmaps);
    debug!("assembled {}x{} grid for {} runes", grid.height(), grid.width(), bitmaps.len());

    // Parse the color once per call; an invalid spec is recoverable and
    // falls back to uncolored output.
    let color = options.color.as_deref().and_then(|spec| match parse_color(spec) {
        Ok(color) => Some(color),
        Err(err) => {
            debug!("rendering uncolored: {}", err);
            None
        },
    });

    let on = options.on_glyph.as_deref();
    let off = options.off_glyph.as_deref();
    let set = match options.shadow {
        ShadowStyle::None => GlyphSet::plain(on, off),
        ShadowStyle::Outline => GlyphSet::outline(on, off),
        ShadowStyle::Solid => GlyphSet::solid(on, off),
    };

    let painter = Painter::new(color, options.gradient, grid.width());
    trim_blank_lines(shadow::render(&grid, &set, &painter))
}

/// Strips leading and trailing lines that are empty after whitespace
/// trimming, then joins the remainder with newlines.
fn trim_blank_lines(lines: Vec<String>) -> String {
    let is_blank = |line: &String| line.trim().is_empty();
    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    lines[first..=last].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontCatalog;

    fn test_face() -> Face {
        FontCatalog::builtin().face("sans_mono").unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_text_renders_empty() {
        let face = test_face();
        assert_eq!(generate(&face, "", &BannerOptions::default()), "");
        assert_eq!(generate(&face, "\n\n", &BannerOptions::default()), "");
    }

    #[test]
    fn plain_lines_share_width_and_fit_height() {
        let face = test_face();
        let result = generate(&face, "A", &BannerOptions::default());
        let lines: Vec<&str> = result.lines().collect();

        assert!(!lines.is_empty());
        assert!(lines.len() <= face.height());
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
        assert!(result.contains("██"));
    }

    #[test]
    fn multiline_blocks_joined_by_blank_line() {
        let face = test_face();
        let result = generate(&face, "A\nB", &BannerOptions::default());
        let blocks: Vec<&str> = result.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|block| !block.trim().is_empty()));
    }

    #[test]
    fn shadow_styles_use_their_glyphs() {
        let face = test_face();
        let outline = generate(
            &face,
            "A",
            &BannerOptions { shadow: ShadowStyle::Outline, ..Default::default() },
        );
        assert!(outline.contains("██"));
        assert!(outline.contains('╝'));

        let solid = generate(
            &face,
            "A",
            &BannerOptions { shadow: ShadowStyle::Solid, ..Default::default() },
        );
        assert!(solid.contains("░░"));
    }

    #[test]
    fn color_wraps_with_escape_and_reset() {
        let face = test_face();
        let result = generate(
            &face,
            "A",
            &BannerOptions { color: Some("c".to_string()), ..Default::default() },
        );
        assert!(result.contains("\x1b[38;2;0;255;255m"));
        assert!(result.contains("\x1b[0m"));
    }

    #[test]
    fn invalid_color_renders_uncolored() {
        let face = test_face();
        let result = generate(
            &face,
            "A",
            &BannerOptions { color: Some("not_a_color".to_string()), ..Default::default() },
        );
        assert!(!result.is_empty());
        assert!(!result.contains("\x1b[38;2;"));
    }

    #[test]
    fn gradient_varies_across_the_line() {
        let face = test_face();
        let result = generate(
            &face,
            "ABC",
            &BannerOptions {
                color: Some("c".to_string()),
                gradient: true,
                ..Default::default()
            },
        );

        let mut escapes: Vec<&str> = result
            .match_indices("\x1b[38;2;")
            .map(|(start, _)| {
                let end = result[start..].find('m').unwrap() + start;
                &result[start..end]
            })
            .collect();
        escapes.dedup();
        assert!(escapes.len() > 1, "gradient produced a single color");
    }

    #[test]
    fn glyph_overrides_reach_the_output() {
        let face = test_face();
        let result = generate(
            &face,
            "A",
            &BannerOptions {
                on_glyph: Some("##".to_string()),
                off_glyph: Some("..".to_string()),
                ..Default::default()
            },
        );
        assert!(result.contains("##"));
        assert!(!result.contains("██"));
    }

    #[test]
    fn trim_blank_lines_strips_both_ends() {
        assert_eq!(trim_blank_lines(strings(&["a", "b"])), "a\nb");
        assert_eq!(trim_blank_lines(strings(&["", "a", "b"])), "a\nb");
        assert_eq!(trim_blank_lines(strings(&["a", "b", ""])), "a\nb");
        assert_eq!(trim_blank_lines(strings(&["", "a", "b", ""])), "a\nb");
        assert_eq!(trim_blank_lines(strings(&["  ", "a", "  "])), "a");
        assert_eq!(trim_blank_lines(strings(&["", "  "])), "");
        assert_eq!(trim_blank_lines(Vec::new()), "");
    }

    #[test]
    fn trim_blank_lines_is_idempotent() {
        let once = trim_blank_lines(strings(&["", "a", "", "b", "  "]));
        let twice = trim_blank_lines(once.split('\n').map(String::from).collect());
        assert_eq!(once, twice);
        assert_eq!(once, "a\n\nb");
    }
}
