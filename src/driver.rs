//! The hardware seam: transmit channel and pin identifier.

/// Identifier of the digital output line driving a strip.
///
/// Opaque to this crate: it is stored on the strip and forwarded verbatim
/// to the [`Transmit`] implementation.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pin(pub u8);

/// Bit-timing transmission of a prepared strip buffer.
///
/// Implement this for the platform primitive that clocks bytes out to the
/// LEDs (RMT, PWM sequencer, SPI, bit-banging). The operation has no return
/// value and no error signal: the core assumes nothing about its timing or
/// success, and a failed transmission is not observable here.
pub trait Transmit {
    /// Clock `buffer` out on `pin`.
    ///
    /// `buffer` is the full wire image of the strip, `[G,R,B(,W)]` bytes
    /// per LED with no framing.
    fn transmit(&mut self, buffer: &[u8], pin: Pin);

    /// Drive `pin` to its idle (low) level.
    ///
    /// Called when a strip binds to a pin, before any transmission, to
    /// establish a known line state. The default does nothing, for
    /// transports that do not own the line between frames.
    fn idle(&mut self, pin: Pin) {
        let _ = pin;
    }
}
