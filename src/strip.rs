//! Strip views and pixel mutation.
//!
//! A [`Strip`] is an addressable window over a shared [`PixelBuffer`]: a
//! start offset, a pixel length, a brightness level and a color mode. The
//! root view owns the allocation; [`Strip::range`] derives narrower views
//! that alias the same buffer. Aliasing is the point, not an accident:
//! writing through one view is immediately visible through every other view
//! whose range overlaps.
//!
//! The buffer is shared mutable state behind `Rc<RefCell<..>>`, which pins
//! the whole model to a single logical thread (`Strip` is `!Send`). If the
//! embedding environment ever introduces more threads of control, callers
//! must serialize access externally; no locking happens here.
//!
//! Every operation is total: out-of-range pixel offsets are silently
//! ignored, [`Strip::range`] clamps malformed bounds into the parent's
//! window, and white-channel writes under RGB mode do nothing. Nothing in
//! this module returns an error or panics on caller input.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;

use crate::buffer::{ColorMode, PixelBuffer};
use crate::color::{self, Rgb};
use crate::driver::{Pin, Transmit};
use crate::fmt::{debug, trace};
use crate::math8::scale8;

/// Latch pause before each transmission, required by the LED reset timing.
const LATCH_DELAY_MS: u32 = 1;

/// Settling pause after binding the output pin.
const PIN_SETUP_DELAY_MS: u32 = 50;

/// Dim yellow sentinel rendered by [`Strip::show_bar_graph`] for a zero bar.
const BAR_SENTINEL: u32 = 0x0066_6600;

struct Shared<T, D> {
    buffer: PixelBuffer,
    channel: T,
    delay: D,
    pin: Pin,
}

/// An addressable window over a shared LED strip buffer.
///
/// Obtained from [`Strip::create`] (the root view, covering the whole
/// strip) or [`Strip::range`] (a narrower alias). Structure is immutable
/// after creation; only brightness and the buffer contents change.
pub struct Strip<T: Transmit, D: DelayNs> {
    shared: Rc<RefCell<Shared<T, D>>>,
    start: usize,
    length: usize,
    brightness: u8,
    mode: ColorMode,
}

impl<T: Transmit, D: DelayNs> Strip<T, D> {
    /// Create the root view for a strip of `led_count` LEDs on `pin`.
    ///
    /// Allocates the zero-filled pixel buffer at the mode's stride, sets
    /// brightness to full and drives the pin to its idle state (see
    /// [`Strip::set_pin`]).
    pub fn create(channel: T, delay: D, pin: Pin, led_count: usize, mode: ColorMode) -> Self {
        let shared = Rc::new(RefCell::new(Shared {
            buffer: PixelBuffer::new(led_count, mode),
            channel,
            delay,
            pin,
        }));
        let mut strip = Self {
            shared,
            start: 0,
            length: led_count,
            brightness: 255,
            mode,
        };
        debug!("strip created: {} leds, stride {}", led_count, mode.stride());
        strip.set_pin(pin);
        strip
    }

    /// Derive a narrower view sharing this view's buffer, pin and
    /// brightness.
    ///
    /// Bounds are clamped, never rejected: `start` is folded into
    /// `[0, len - 1]` of this view and `length` into the space that
    /// remains, so a derived view can never address outside its parent.
    #[allow(clippy::cast_sign_loss)]
    pub fn range(&self, start: i32, length: i32) -> Self {
        let rel = if self.length == 0 {
            0
        } else {
            (start.max(0) as usize).min(self.length - 1)
        };
        let len = (length.max(0) as usize).min(self.length - rel);
        Self {
            shared: Rc::clone(&self.shared),
            start: self.start + rel,
            length: len,
            brightness: self.brightness,
            mode: self.mode,
        }
    }

    /// Write `color` (`0xRRGGBB`, brightness-scaled) to every pixel in
    /// this view, then transmit.
    pub fn show_color(&mut self, color: u32) {
        let c = self.scale_rgb(color::rgb_from_u32(color));
        {
            let mut shared = self.shared.borrow_mut();
            let stride = self.mode.stride();
            for pixel in self.start..self.start + self.length {
                let base = pixel * stride;
                shared.buffer.set_byte(base, c.g);
                shared.buffer.set_byte(base + 1, c.r);
                shared.buffer.set_byte(base + 2, c.b);
            }
        }
        self.show();
    }

    /// Write a 4-channel `0xRRGGBBWW` color to every pixel, then transmit.
    ///
    /// Under RGB mode the white channel is dropped.
    pub fn show_rgbw(&mut self, color: u32) {
        let c = color::rgbw_from_u32(color);
        {
            let mut shared = self.shared.borrow_mut();
            let stride = self.mode.stride();
            for pixel in self.start..self.start + self.length {
                let base = pixel * stride;
                shared.buffer.set_byte(base, self.scale(c.g));
                shared.buffer.set_byte(base + 1, self.scale(c.r));
                shared.buffer.set_byte(base + 2, self.scale(c.b));
                if self.mode == ColorMode::Rgbw {
                    shared.buffer.set_byte(base + 3, self.scale(c.a.0));
                }
            }
        }
        self.show();
    }

    /// Set one pixel to `color` (`0xRRGGBB`).
    ///
    /// An offset outside `[0, len)` is a silent no-op. Channels are
    /// brightness-scaled and written in wire order; under RGBW mode the
    /// white byte is left untouched. Call [`Strip::show`] to make the
    /// change visible.
    pub fn set_pixel_color(&mut self, offset: i32, color: u32) {
        let Some(base) = self.pixel_base(offset) else {
            return;
        };
        let c = self.scale_rgb(color::rgb_from_u32(color));
        let mut shared = self.shared.borrow_mut();
        shared.buffer.set_byte(base, c.g);
        shared.buffer.set_byte(base + 1, c.r);
        shared.buffer.set_byte(base + 2, c.b);
    }

    /// Set one pixel to a 4-channel `0xRRGGBBWW` color.
    ///
    /// Same bounds and scaling policy as [`Strip::set_pixel_color`]; under
    /// RGB mode the white channel is dropped.
    pub fn set_pixel_rgbw(&mut self, offset: i32, color: u32) {
        let Some(base) = self.pixel_base(offset) else {
            return;
        };
        let c = color::rgbw_from_u32(color);
        let mut shared = self.shared.borrow_mut();
        shared.buffer.set_byte(base, self.scale(c.g));
        shared.buffer.set_byte(base + 1, self.scale(c.r));
        shared.buffer.set_byte(base + 2, self.scale(c.b));
        if self.mode == ColorMode::Rgbw {
            shared.buffer.set_byte(base + 3, self.scale(c.a.0));
        }
    }

    /// Set one pixel's white channel (RGBW strips only).
    ///
    /// A silent no-op under RGB mode, which has no white byte to write.
    pub fn set_pixel_white(&mut self, offset: i32, white: u8) {
        if self.mode != ColorMode::Rgbw {
            return;
        }
        let Some(base) = self.pixel_base(offset) else {
            return;
        };
        let value = self.scale(white);
        self.shared.borrow_mut().buffer.set_byte(base + 3, value);
    }

    /// Render `value` against `high` as a red-to-blue bar across the view,
    /// then transmit.
    ///
    /// `high <= 0` clears the view. A bar that rounds to zero pixels gets
    /// a dim yellow sentinel on pixel 0 so a live-but-empty graph stays
    /// distinguishable from a dark strip.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn show_bar_graph(&mut self, value: i32, high: i32) {
        if high <= 0 {
            self.clear();
            return;
        }
        let n = self.length;
        // 64-bit intermediate: value * n can overflow a 32-bit usize.
        let v = usize::try_from(
            u64::from(value.unsigned_abs()) * n as u64 / u64::from(high.unsigned_abs()),
        )
        .unwrap_or(usize::MAX);
        if v == 0 {
            self.set_pixel_color(0, BAR_SENTINEL);
            for i in 1..n {
                self.set_pixel_color(i as i32, 0);
            }
        } else {
            for i in 0..n {
                if i <= v {
                    let b = if n > 1 { i * 255 / (n - 1) } else { 0 };
                    self.set_pixel_color(i as i32, color::pack_rgb(b as u8, 0, (255 - b) as u8));
                } else {
                    self.set_pixel_color(i as i32, 0);
                }
            }
        }
        self.show();
    }

    /// Transmit the strip's state to the hardware.
    ///
    /// Waits out the latch delay, then hands the **entire underlying
    /// buffer** (not just this view's slice) and the configured pin to the
    /// transmit channel.
    pub fn show(&mut self) {
        let mut shared = self.shared.borrow_mut();
        let Shared {
            buffer,
            channel,
            delay,
            pin,
        } = &mut *shared;
        delay.delay_ms(LATCH_DELAY_MS);
        trace!("show: {} bytes on pin {}", buffer.as_bytes().len(), pin.0);
        channel.transmit(buffer.as_bytes(), *pin);
    }

    /// Zero-fill this view's pixels, then transmit.
    pub fn clear(&mut self) {
        self.shared
            .borrow_mut()
            .buffer
            .fill_zero(self.start, self.length);
        self.show();
    }

    /// Number of pixels visible through this view.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The view's color mode (fixed at creation).
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Set this view's brightness (0-255). Applies to subsequent writes;
    /// bytes already in the buffer keep their scaling.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Shift this view's pixels `offset` positions forward (negative
    /// shifts backward), zero-filling the vacated pixels. Pixels pushed
    /// past the view's edge are dropped, never leaked into neighbors.
    pub fn shift(&mut self, offset: i32) {
        let stride = self.mode.stride();
        // Saturating: a delta at or past the window length clears it anyway.
        let delta = (offset as isize).saturating_mul(stride as isize);
        self.shared
            .borrow_mut()
            .buffer
            .shift_bytes(delta, self.start * stride, self.length * stride);
    }

    /// Same move as [`Strip::shift`], but pixels falling off one edge of
    /// the view wrap around to the other.
    pub fn rotate(&mut self, offset: i32) {
        let stride = self.mode.stride();
        let delta = (offset as isize).saturating_mul(stride as isize);
        self.shared
            .borrow_mut()
            .buffer
            .rotate_bytes(delta, self.start * stride, self.length * stride);
    }

    /// Bind the strip to `pin`: drive the line to its idle state and wait
    /// out the settling pause, establishing a safe starting condition
    /// before any transmission.
    pub fn set_pin(&mut self, pin: Pin) {
        let mut shared = self.shared.borrow_mut();
        shared.pin = pin;
        let Shared { channel, delay, .. } = &mut *shared;
        channel.idle(pin);
        delay.delay_ms(PIN_SETUP_DELAY_MS);
        debug!("strip bound to pin {}", pin.0);
    }

    /// Copy of the bytes addressed by this view, in `[G,R,B(,W)]` wire
    /// order. Readback goes through the same shared buffer the writes do,
    /// so it observes mutations made through any aliasing view.
    pub fn bytes(&self) -> Vec<u8> {
        let shared = self.shared.borrow();
        let stride = self.mode.stride();
        let from = self.start * stride;
        shared.buffer.as_bytes()[from..from + self.length * stride].to_vec()
    }

    #[allow(clippy::cast_sign_loss)]
    fn pixel_base(&self, offset: i32) -> Option<usize> {
        if offset < 0 || offset as usize >= self.length {
            return None;
        }
        Some((self.start + offset as usize) * self.mode.stride())
    }

    // Fixed-point brightness attenuation. 255 must mean "unscaled": the
    // shift approximates /255 and would turn 255 into 254.
    fn scale(&self, channel: u8) -> u8 {
        if self.brightness == 255 {
            channel
        } else {
            scale8(channel, self.brightness)
        }
    }

    fn scale_rgb(&self, c: Rgb) -> Rgb {
        Rgb {
            r: self.scale(c.r),
            g: self.scale(c.g),
            b: self.scale(c.b),
        }
    }
}
