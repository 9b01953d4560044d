//! Rainbow sweep animations

use embassy_time::Duration;

use super::{Animator, Completion, Step};
use crate::PixelSink;
use crate::color::wheel;
use crate::pacing::FramePacer;
use crate::sink::SinkError;

impl<P: FramePacer> Animator<'_, P> {
    /// Rainbow that fades across all pixels at once.
    ///
    /// Every pixel shares the same moving phase offset, so the whole
    /// strip shifts hue together. Runs `256 * iterations` frames.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rainbow<S: PixelSink>(
        &mut self,
        sink: &mut S,
        delay: Duration,
        iterations: usize,
    ) -> Result<Completion, SinkError> {
        let count = sink.pixel_count();
        let mut failures = 0;
        for j in 0..256 * iterations {
            for i in 0..count {
                sink.set_pixel(i, wheel(((i + j) & 255) as u8))?;
            }
            if let Step::Interrupted = self.advance(sink, delay, &mut failures)? {
                return Ok(Completion::Interrupted);
            }
        }

        Ok(Completion::Finished)
    }

    /// Rainbow distributed evenly across the strip, then rotated.
    ///
    /// Each pixel's base hue spreads one full wheel revolution over the
    /// strip (integer division), with the moving offset `j` on top.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rainbow_cycle<S: PixelSink>(
        &mut self,
        sink: &mut S,
        delay: Duration,
        iterations: usize,
    ) -> Result<Completion, SinkError> {
        let count = sink.pixel_count();
        let mut failures = 0;
        for j in 0..256 * iterations {
            for i in 0..count {
                sink.set_pixel(i, wheel(((i * 256 / count + j) & 255) as u8))?;
            }
            if let Step::Interrupted = self.advance(sink, delay, &mut failures)? {
                return Ok(Completion::Interrupted);
            }
        }

        Ok(Completion::Finished)
    }
}
