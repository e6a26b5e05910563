//! HSL packing and conversion to and from packed RGB.
//!
//! Hue needs 9 bits, so the packing gives it the two high bytes:
//! `(h << 16) | (s << 8) | l`, with saturation and luminosity in percent
//! (0-100). Inputs outside the documented ranges are not rejected; the
//! sextant formulas fold or zero them as described on each function.

use super::{pack_rgb, rgb_from_u32};

/// Pack an HSL triple. Hue in degrees, saturation and luminosity in percent.
pub const fn pack_hsl(h: u16, s: u8, l: u8) -> u32 {
    ((h as u32) << 16) | ((s as u32) << 8) | (l as u32)
}

/// Split a packed HSL integer back into its triple.
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_hsl(hsl: u32) -> (u16, u8, u8) {
    (
        ((hsl >> 16) & 0xFFFF) as u16,
        ((hsl >> 8) & 0xFF) as u8,
        (hsl & 0xFF) as u8,
    )
}

/// Convert a packed `0xRRGGBB` color to packed HSL.
///
/// Standard 60-degrees-per-sextant formula keyed on the dominant channel;
/// achromatic input (zero delta) yields hue and saturation 0. Each output
/// is rounded to the nearest integer before packing. Hue gets no further
/// modulo-360 normalization beyond the red sextant's own wraparound.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: u32) -> u32 {
    let c = rgb_from_u32(rgb);
    let r = f32::from(c.r) / 255.0;
    let g = f32::from(c.g) / 255.0;
    let b = f32::from(c.b) / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let l = (cmax + cmin) / 2.0 * 100.0;
    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let h = if cmax == r {
            60.0 * wrap((g - b) / delta, 6.0)
        } else if cmax == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if l > 50.0 {
            delta / (2.0 - cmax - cmin)
        } else {
            delta / (cmax + cmin)
        };
        (h, s * 100.0)
    };

    pack_hsl(round(h) as u16, round(s) as u8, round(l) as u8)
}

/// Convert packed HSL back to a packed `0xRRGGBB` color.
///
/// Inverse sextant table over six 60-degree bands; a hue outside
/// `[0, 360)` falls through to a zero channel triple (only the luminosity
/// match `m` survives). Channels are rounded to the nearest byte.
pub fn hsl_to_rgb(hsl: u32) -> u32 {
    let (h, s, l) = unpack_hsl(hsl);
    let hf = f32::from(h);
    let sf = f32::from(s) / 100.0;
    let lf = f32::from(l) / 100.0;

    let c = (1.0 - fabs(2.0 * lf - 1.0)) * sf;
    let x = c * (1.0 - fabs(wrap(hf / 60.0, 2.0) - 1.0));
    let m = lf - c / 2.0;

    let (r1, g1, b1) = match h {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        300..=359 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    pack_rgb(to_byte(r1 + m), to_byte(g1 + m), to_byte(b1 + m))
}

// Round-to-nearest for non-negative values; core has no f32::round.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round(v: f32) -> u32 {
    (v + 0.5) as u32
}

#[allow(clippy::cast_possible_truncation)]
fn to_byte(channel: f32) -> u8 {
    round(channel * 255.0) as u8
}

fn fabs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

// Euclidean-style float modulo; `%` alone keeps the dividend's sign.
fn wrap(v: f32, m: f32) -> f32 {
    let r = v % m;
    if r < 0.0 { r + m } else { r }
}
