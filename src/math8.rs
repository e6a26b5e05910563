//! Fixed-point helpers for 8-bit channel math.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems. Approximates
/// division by 255: scaling 255 by 255 gives 254.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_by_zero_is_zero() {
        assert_eq!(scale8(255, 0), 0);
        assert_eq!(scale8(1, 0), 0);
    }

    #[test]
    fn scale_is_fixed_point_shift() {
        assert_eq!(scale8(200, 128), 100);
        assert_eq!(scale8(0x66, 128), 51);
        assert_eq!(scale8(16, 64), 4);
    }

    #[test]
    fn full_scale_loses_one_step() {
        // (255 * 255) >> 8 == 254, which is why brightness 255 skips the scale.
        assert_eq!(scale8(255, 255), 254);
    }
}
