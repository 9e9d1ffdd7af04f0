/// Binary pixel grid for one line of text.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl PixelGrid {
    /// Assembles a grid of `height` rows from ordered glyph bitmaps, placing
    /// each bitmap at an accumulating horizontal offset. Ragged bitmaps are
    /// tolerated: rows shorter than `height` and columns shorter than a
    /// glyph's recorded width read as off.
    pub fn from_bitmaps(height: usize, bitmaps: &[Vec<Vec<bool>>]) -> Self {
        let widths: Vec<usize> =
            bitmaps.iter().map(|bm| bm.first().map_or(0, Vec::len)).collect();
        let width = widths.iter().sum();

        let mut rows = vec![vec![false; width]; height];
        for (y, row) in rows.iter_mut().enumerate() {
            let mut x_off = 0;
            for (bitmap, &glyph_width) in bitmaps.iter().zip(&widths) {
                for x in 0..glyph_width {
                    let on = bitmap.get(y).and_then(|r| r.get(x)).copied().unwrap_or(false);
                    if on {
                        row[x_off + x] = true;
                    }
                }
                x_off += glyph_width;
            }
        }

        Self { height, width, rows }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(y, x)` is ink. Signed coordinates; anything
    /// outside the grid reads as off.
    pub fn is_on(&self, y: isize, x: isize) -> bool {
        if y < 0 || x < 0 {
            return false;
        }
        let (y, x) = (y as usize, x as usize);
        y < self.height && x < self.width && self.rows[y][x]
    }
}
