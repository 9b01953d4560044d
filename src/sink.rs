//! Strip configuration, sink errors and the in-memory reference sink.

use core::fmt;

use smart_leds::brightness;

use crate::PixelSink;
use crate::color::{ChannelOrder, Rgb};

/// Errors at the hardware boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// The underlying GPIO/PWM/DMA resource could not be claimed.
    /// Fatal; abort startup.
    HardwareInit,
    /// A flush failed to reach the hardware. The animation core logs
    /// and retries a bounded number of times before giving up.
    HardwareWrite,
    /// A pixel write past the end of the strip. Indicates a defect in
    /// animation logic; the built-in routines never produce one.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareInit => write!(f, "hardware resource could not be claimed"),
            Self::HardwareWrite => write!(f, "hardware transfer failed"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} out of range (strip has {len} pixels)")
            }
        }
    }
}

impl core::error::Error for SinkError {}

/// One-time strip configuration
///
/// Passed to a sink constructor at startup; there is no ambient global
/// strip handle. Defaults match the common 50-pixel setup on GPIO 18.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Number of pixels on the strip
    pub pixel_count: usize,
    /// Physical channel order of the strip model
    pub order: ChannelOrder,
    /// Output brightness, 0 (dark) to 255 (full)
    pub brightness: u8,
    /// Invert the data signal (for NPN transistor level shifters)
    pub invert: bool,
    /// GPIO pin carrying the data signal
    pub pin: u8,
    /// Signal frequency in hertz
    pub freq_hz: u32,
    /// DMA channel used to generate the signal
    pub dma_channel: u8,
    /// PWM channel (1 for GPIOs 13/19/41/45/53, otherwise 0)
    pub pwm_channel: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pixel_count: 50,
            order: ChannelOrder::default(),
            brightness: 20,
            invert: false,
            pin: 18,
            freq_hz: 800_000,
            dma_channel: 10,
            pwm_channel: 0,
        }
    }
}

/// In-memory reference sink
///
/// Owns a frame buffer and, on flush, encodes it into wire bytes the
/// way a real driver would: brightness scaling first, then channel
/// reordering. Useful as a test double and as the encoding stage for
/// drivers that only need a byte stream.
///
/// `MAX_PIXELS` bounds the buffer at compile time; the configured
/// pixel count may be anything up to that.
pub struct BufferSink<const MAX_PIXELS: usize> {
    frame: [Rgb; MAX_PIXELS],
    wire: [[u8; 4]; MAX_PIXELS],
    count: usize,
    order: ChannelOrder,
    brightness: u8,
    flushes: u32,
}

impl<const MAX_PIXELS: usize> BufferSink<MAX_PIXELS> {
    /// Create a sink for the configured strip.
    ///
    /// Fails with [`SinkError::HardwareInit`] when the configured pixel
    /// count does not fit the compile-time buffer. The hardware-only
    /// fields (pin, frequency, DMA, invert, PWM channel) are accepted
    /// but unused here; they belong to real strip drivers.
    pub fn new(config: &StripConfig) -> Result<Self, SinkError> {
        if config.pixel_count > MAX_PIXELS {
            return Err(SinkError::HardwareInit);
        }

        Ok(Self {
            frame: [Rgb::default(); MAX_PIXELS],
            wire: [[0; 4]; MAX_PIXELS],
            count: config.pixel_count,
            order: config.order,
            brightness: config.brightness,
            flushes: 0,
        })
    }

    /// Current frame buffer contents (logical colors, pre-scaling)
    pub fn frame(&self) -> &[Rgb] {
        &self.frame[..self.count]
    }

    /// Number of flushes performed so far
    pub fn flushes(&self) -> u32 {
        self.flushes
    }

    /// Wire bytes produced by the most recent flush
    pub fn wire_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        let channels = self.order.channel_count();
        self.wire[..self.count]
            .iter()
            .flat_map(move |pixel| pixel[..channels].iter().copied())
    }
}

impl<const MAX_PIXELS: usize> PixelSink for BufferSink<MAX_PIXELS> {
    fn pixel_count(&self) -> usize {
        self.count
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SinkError> {
        if index >= self.count {
            return Err(SinkError::IndexOutOfRange {
                index,
                len: self.count,
            });
        }

        self.frame[index] = color;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        let scaled = brightness(self.frame[..self.count].iter().copied(), self.brightness);
        for (slot, color) in self.wire[..self.count].iter_mut().zip(scaled) {
            let encoded = self.order.encode(color);
            slot[..encoded.len()].copy_from_slice(&encoded);
        }

        self.flushes = self.flushes.wrapping_add(1);
        Ok(())
    }
}
