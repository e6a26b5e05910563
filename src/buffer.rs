//! Raw pixel byte storage and stride handling.

use alloc::vec;
use alloc::vec::Vec;

/// Channel layout of a strip, fixed when its buffer is created.
///
/// The stride is derived from the mode so the two can never drift apart.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorMode {
    /// Three channels per LED, `[G,R,B]` on the wire.
    Rgb,
    /// Four channels per LED, `[G,R,B,W]` on the wire (SK6812-style).
    Rgbw,
}

impl ColorMode {
    /// Bytes per LED.
    pub const fn stride(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Rgbw => 4,
        }
    }
}

/// Contiguous, zero-initialized byte storage for every LED of a strip.
///
/// Holds raw wire bytes in `[G,R,B(,W)]` order per LED. Allocated once at
/// strip creation and never resized. The buffer applies no bounds or
/// brightness policy of its own; [`Strip`](crate::Strip) is the sole caller
/// and guarantees that every index it passes is valid.
pub struct PixelBuffer {
    bytes: Vec<u8>,
    stride: usize,
}

impl PixelBuffer {
    pub fn new(led_count: usize, mode: ColorMode) -> Self {
        Self {
            bytes: vec![0; led_count * mode.stride()],
            stride: mode.stride(),
        }
    }

    /// Number of LEDs the buffer covers.
    pub fn led_count(&self) -> usize {
        self.bytes.len() / self.stride
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// The full wire image, ready to hand to a transmit channel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte(&self, index: usize) -> u8 {
        self.bytes[index]
    }

    pub fn set_byte(&mut self, index: usize, value: u8) {
        self.bytes[index] = value;
    }

    /// Zero every byte of `len_pixels` pixels starting at `start_pixel`.
    pub fn fill_zero(&mut self, start_pixel: usize, len_pixels: usize) {
        let start = start_pixel * self.stride;
        self.bytes[start..start + len_pixels * self.stride].fill(0);
    }

    /// Move the bytes inside `[range_start, range_start + range_len)` by
    /// `delta` positions (positive moves toward higher indices). Vacated
    /// positions are zeroed; bytes pushed past either end of the window
    /// are dropped.
    pub fn shift_bytes(&mut self, delta: isize, range_start: usize, range_len: usize) {
        let window = &mut self.bytes[range_start..range_start + range_len];
        let d = delta.unsigned_abs();
        if d >= window.len() {
            window.fill(0);
            return;
        }
        if delta >= 0 {
            window.copy_within(..window.len() - d, d);
            window[..d].fill(0);
        } else {
            window.copy_within(d.., 0);
            let len = window.len();
            window[len - d..].fill(0);
        }
    }

    /// Same window move as [`shift_bytes`](Self::shift_bytes), but vacated
    /// positions are refilled by wraparound from the opposite end.
    pub fn rotate_bytes(&mut self, delta: isize, range_start: usize, range_len: usize) {
        let window = &mut self.bytes[range_start..range_start + range_len];
        if window.is_empty() {
            return;
        }
        let d = delta.unsigned_abs() % window.len();
        if delta >= 0 {
            window.rotate_right(d);
        } else {
            window.rotate_left(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(len: usize) -> PixelBuffer {
        let mut buf = PixelBuffer::new(len, ColorMode::Rgb);
        for i in 0..len * 3 {
            #[allow(clippy::cast_possible_truncation)]
            buf.set_byte(i, i as u8 + 1);
        }
        buf
    }

    #[test]
    fn allocates_zeroed_at_stride() {
        let buf = PixelBuffer::new(4, ColorMode::Rgbw);
        assert_eq!(buf.as_bytes(), &[0; 16]);
        assert_eq!(buf.led_count(), 4);
        assert_eq!(buf.stride(), 4);
    }

    #[test]
    fn fill_zero_covers_only_the_addressed_pixels() {
        let mut buf = seeded(4);
        buf.fill_zero(1, 2);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0, 0, 10, 11, 12]);
    }

    #[test]
    fn shift_forward_zero_fills_the_head() {
        let mut buf = seeded(3);
        buf.shift_bytes(3, 0, 9);
        assert_eq!(buf.as_bytes(), &[0, 0, 0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn shift_backward_zero_fills_the_tail() {
        let mut buf = seeded(3);
        buf.shift_bytes(-3, 0, 9);
        assert_eq!(buf.as_bytes(), &[4, 5, 6, 7, 8, 9, 0, 0, 0]);
    }

    #[test]
    fn shift_respects_the_window() {
        let mut buf = seeded(4);
        buf.shift_bytes(3, 3, 6);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 0, 0, 0, 4, 5, 6, 10, 11, 12]);
    }

    #[test]
    fn oversized_shift_clears_the_window() {
        let mut buf = seeded(3);
        buf.shift_bytes(9, 0, 9);
        assert_eq!(buf.as_bytes(), &[0; 9]);
        let mut buf = seeded(3);
        buf.shift_bytes(-100, 3, 6);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn rotate_wraps_instead_of_zeroing() {
        let mut buf = seeded(3);
        buf.rotate_bytes(3, 0, 9);
        assert_eq!(buf.as_bytes(), &[7, 8, 9, 1, 2, 3, 4, 5, 6]);
        buf.rotate_bytes(-3, 0, 9);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn rotate_reduces_modulo_window_length() {
        let mut buf = seeded(2);
        buf.rotate_bytes(6, 0, 6);
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }
}
