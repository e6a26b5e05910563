//! Packed-integer color codec and named colors.
//!
//! Colors cross the public API as packed integers: `0xRRGGBB` for RGB,
//! `0xRRGGBBWW` for RGBW and a 4-byte HSL packing (see [`pack_hsl`]).
//! Channel structs come from `smart-leds` so buffers interoperate with the
//! rest of the ecosystem.

mod hsl;

use smart_leds::{RGB8, RGBW, White};

pub use hsl::{hsl_to_rgb, pack_hsl, rgb_to_hsl, unpack_hsl};

/// RGB color with 8-bit channels.
pub type Rgb = RGB8;

/// RGBW color with 8-bit channels; the white channel lives in the
/// `a: White(..)` slot.
pub type Rgbw = RGBW<u8>;

pub const RED: u32 = 0x00FF_0000;
pub const ORANGE: u32 = 0x00FF_A500;
pub const YELLOW: u32 = 0x00FF_FF00;
pub const GREEN: u32 = 0x0000_FF00;
pub const BLUE: u32 = 0x0000_00FF;
pub const INDIGO: u32 = 0x004B_0082;
pub const VIOLET: u32 = 0x008A_2BE2;
pub const PURPLE: u32 = 0x00FF_00FF;

/// Pack three channels into a `0xRRGGBB` integer.
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Pack four channels into a `0xRRGGBBWW` integer.
pub const fn pack_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (w as u32)
}

/// Unpack a `0xRRGGBB` integer; bits above the low 24 are ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Unpack a `0xRRGGBBWW` integer.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    Rgbw {
        r: ((color >> 24) & 0xFF) as u8,
        g: ((color >> 16) & 0xFF) as u8,
        b: ((color >> 8) & 0xFF) as u8,
        a: White((color & 0xFF) as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trip() {
        let c = rgb_from_u32(pack_rgb(0x12, 0x34, 0x56));
        assert_eq!((c.r, c.g, c.b), (0x12, 0x34, 0x56));
        assert_eq!(pack_rgb(0xFF, 0x00, 0xFF), PURPLE);
    }

    #[test]
    fn rgbw_round_trip() {
        let c = rgbw_from_u32(pack_rgbw(0x12, 0x34, 0x56, 0x78));
        assert_eq!((c.r, c.g, c.b, c.a.0), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn rgb_unpack_ignores_high_bits() {
        let c = rgb_from_u32(0xFF12_3456);
        assert_eq!((c.r, c.g, c.b), (0x12, 0x34, 0x56));
    }

    #[test]
    fn named_colors() {
        assert_eq!(rgb_from_u32(RED), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(rgb_from_u32(ORANGE), Rgb { r: 0xFF, g: 0xA5, b: 0 });
        assert_eq!(rgb_from_u32(INDIGO), Rgb { r: 0x4B, g: 0, b: 0x82 });
        assert_eq!(rgb_from_u32(VIOLET), Rgb { r: 0x8A, g: 0x2B, b: 0xE2 });
    }
}
