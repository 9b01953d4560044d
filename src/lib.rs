#![no_std]

pub mod animation;
pub mod cancel;
pub mod color;
pub mod pacing;
pub mod sink;

pub use animation::{AnimationId, Animator, Completion, clear};
pub use cancel::CancelToken;
pub use color::{ChannelOrder, Rgb, wheel};
pub use pacing::FramePacer;
pub use sink::{BufferSink, SinkError, StripConfig};

pub use embassy_time::Duration;

/// Abstract pixel strip sink
///
/// The hardware boundary the animation core writes through. Implement
/// this trait to support different strip drivers (GPIO/PWM/DMA on real
/// hardware, a terminal or in-memory buffer for previews and tests).
pub trait PixelSink {
    /// Number of pixels on the strip, fixed at configuration time
    fn pixel_count(&self) -> usize;

    /// Write one pixel into the in-memory frame buffer
    ///
    /// Does not touch hardware. Fails with [`SinkError::IndexOutOfRange`]
    /// when `index` is past the end of the strip.
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SinkError>;

    /// Push the frame buffer to hardware
    ///
    /// Blocking, bounded by the hardware transfer time. Fails with
    /// [`SinkError::HardwareWrite`] on a transport fault.
    fn flush(&mut self) -> Result<(), SinkError>;
}
