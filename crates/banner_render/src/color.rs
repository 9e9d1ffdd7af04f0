use crate::BannerError;

/// ANSI reset escape sequence.
pub const RESET: &str = "\x1b[0m";

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// ANSI 24-bit foreground escape sequence for this color.
    pub fn ansi(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Transient HSL representation used for hue/lightness shifts.
/// Hue in [0, 360), saturation and lightness in [0, 1].
#[derive(Clone, Copy, Debug)]
struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());

    let sector = if max == r {
        ((g - b) / d + 6.0) % 6.0
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: sector * 60.0, s, l }
}

fn hsl_to_rgb(c: Hsl) -> Rgb {
    if c.s == 0.0 {
        let v = (c.l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    let chroma = (1.0 - (2.0 * c.l - 1.0).abs()) * c.s;
    let x = chroma * (1.0 - ((c.h / 60.0) % 2.0 - 1.0).abs());
    let m = c.l - chroma / 2.0;

    let (r, g, b) = match c.h {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

/// Named color presets accepted by [`parse_color`].
const PRESETS: &[(&str, Rgb)] = &[
    ("c", Rgb { r: 0, g: 255, b: 255 }),
    ("cyan", Rgb { r: 0, g: 255, b: 255 }),
    ("m", Rgb { r: 255, g: 0, b: 255 }),
    ("magenta", Rgb { r: 255, g: 0, b: 255 }),
    ("y", Rgb { r: 255, g: 255, b: 0 }),
    ("yellow", Rgb { r: 255, g: 255, b: 0 }),
];

/// Parses a color specification: a preset name, `RRGGBB`/`#RRGGBB` hex,
/// or a decimal `r,g,b` triple with each channel in 0-255.
pub fn parse_color(spec: &str) -> Result<Rgb, BannerError> {
    let s = spec.strip_prefix('#').unwrap_or(spec);

    if let Some(&(_, color)) = PRESETS.iter().find(|(name, _)| *name == s) {
        return Ok(color);
    }

    // from_str_radix tolerates a sign prefix; require six bare hex digits.
    if s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit()) {
        if let Ok(value) = u32::from_str_radix(s, 16) {
            return Ok(Rgb {
                r: ((value >> 16) & 0xff) as u8,
                g: ((value >> 8) & 0xff) as u8,
                b: (value & 0xff) as u8,
            });
        }
    }

    let channels: Vec<&str> = s.split(',').collect();
    if channels.len() == 3 {
        let mut parsed = [0u8; 3];
        let mut ok = true;
        for (slot, channel) in parsed.iter_mut().zip(&channels) {
            match channel.trim().parse::<i64>() {
                Ok(v) if (0..=255).contains(&v) => *slot = v as u8,
                _ => {
                    ok = false;
                    break;
                },
            }
        }
        if ok {
            return Ok(Rgb { r: parsed[0], g: parsed[1], b: parsed[2] });
        }
    }

    Err(BannerError::InvalidColor(spec.to_string()))
}

/// Shifts a color in HSL space.
///
/// `hue_delta` is in degrees and wraps into [0, 360). A positive
/// `lightness_delta` blends lightness toward 1 by that fraction of the
/// remaining headroom; a non-positive one blends toward 0.
pub fn shift_color(base: Rgb, hue_delta: f64, lightness_delta: f64) -> Rgb {
    let mut hsl = rgb_to_hsl(base);

    hsl.h += hue_delta;
    if hsl.h < 0.0 {
        hsl.h += 360.0;
    } else if hsl.h >= 360.0 {
        hsl.h -= 360.0;
    }

    if lightness_delta > 0.0 {
        hsl.l += (1.0 - hsl.l) * lightness_delta;
    } else {
        hsl.l += hsl.l * lightness_delta;
    }
    hsl.l = hsl.l.clamp(0.0, 1.0);

    hsl_to_rgb(hsl)
}
