//! Color wipe animations
//!
//! Reveal a solid color one pixel per frame, leaving already-written
//! pixels at their prior value.

use embassy_time::Duration;

use super::{Animator, Completion, Step};
use crate::PixelSink;
use crate::color::Rgb;
use crate::pacing::FramePacer;
use crate::sink::SinkError;

impl<P: FramePacer> Animator<'_, P> {
    /// Wipe `color` across the strip from pixel 0 upward.
    ///
    /// After completion the whole strip shows `color`; one flush per
    /// pixel, in ascending index order.
    pub fn color_wipe<S: PixelSink>(
        &mut self,
        sink: &mut S,
        color: Rgb,
        delay: Duration,
    ) -> Result<Completion, SinkError> {
        let mut failures = 0;
        for i in 0..sink.pixel_count() {
            sink.set_pixel(i, color)?;
            if let Step::Interrupted = self.advance(sink, delay, &mut failures)? {
                return Ok(Completion::Interrupted);
            }
        }

        Ok(Completion::Finished)
    }

    /// Wipe `color` across the strip from the last pixel downward.
    pub fn reverse_color_wipe<S: PixelSink>(
        &mut self,
        sink: &mut S,
        color: Rgb,
        delay: Duration,
    ) -> Result<Completion, SinkError> {
        let mut failures = 0;
        for i in (0..sink.pixel_count()).rev() {
            sink.set_pixel(i, color)?;
            if let Step::Interrupted = self.advance(sink, delay, &mut failures)? {
                return Ok(Completion::Interrupted);
            }
        }

        Ok(Completion::Finished)
    }
}
