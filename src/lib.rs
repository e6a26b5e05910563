#![cfg_attr(not(test), no_std)]

//! Driver core for addressable RGB/RGBW LED strips (WS2812 / SK6812 class).
//!
//! The crate owns the byte buffer holding every LED's color state, exposes
//! logical sub-range views over it, and does the arithmetic turning packed
//! RGB/RGBW integers, named colors and HSL triples into the exact
//! `[G,R,B(,W)]` wire bytes the hardware expects, with brightness
//! attenuation applied consistently in both modes.
//!
//! Layers:
//! - [`color`] - packed-integer codec, HSL conversion, named colors
//! - [`buffer`] - raw pixel byte storage and stride handling
//! - [`strip`] - addressable views with brightness and pixel operations
//! - [`driver`] - the [`Transmit`] seam supplied by the embedding platform
//!
//! The strip is hardware-agnostic: construction takes any [`Transmit`]
//! implementation for the bit-timing transmission plus an
//! [`embedded_hal::delay::DelayNs`] pause primitive for the latch and pin
//! settling delays. Everything else is in-process buffer math on a single
//! logical thread.
//!
//! ```no_run
//! use embedded_hal::delay::DelayNs;
//! use neostrip::{ColorMode, Pin, Strip, Transmit, color};
//!
//! struct Rmt;
//! impl Transmit for Rmt {
//!     fn transmit(&mut self, _buffer: &[u8], _pin: Pin) {
//!         // clock the bytes out with the platform's bit-timing engine
//!     }
//! }
//!
//! struct Busy;
//! impl DelayNs for Busy {
//!     fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! let mut strip = Strip::create(Rmt, Busy, Pin(0), 24, ColorMode::Rgb);
//! strip.show_color(color::RED);
//!
//! // Views alias the same buffer; the tail renders independently.
//! let mut tail = strip.range(10, 14);
//! tail.set_brightness(64);
//! tail.show_bar_graph(5, 10);
//! ```

extern crate alloc;

mod fmt;

pub mod buffer;
pub mod color;
pub mod driver;
pub mod math8;
pub mod strip;

pub use buffer::{ColorMode, PixelBuffer};
pub use color::{Rgb, Rgbw};
pub use driver::{Pin, Transmit};
pub use strip::Strip;
