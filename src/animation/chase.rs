//! Theater chase animations
//!
//! Only every third pixel is lit; the lit subset rotates through the
//! three phase offsets. Lit pixels are reset to black after each flush
//! so the next phase starts from a dark strip.

use embassy_time::Duration;

use super::{Animator, Completion, Step};
use crate::PixelSink;
use crate::color::{BLACK, Rgb, wheel};
use crate::pacing::FramePacer;
use crate::sink::SinkError;

impl<P: FramePacer> Animator<'_, P> {
    /// Movie-theater-marquee style chaser in a single color.
    pub fn theater_chase<S: PixelSink>(
        &mut self,
        sink: &mut S,
        color: Rgb,
        delay: Duration,
        iterations: usize,
    ) -> Result<Completion, SinkError> {
        let count = sink.pixel_count();
        let mut failures = 0;
        for _ in 0..iterations {
            for q in 0..3 {
                for i in (q..count).step_by(3) {
                    sink.set_pixel(i, color)?;
                }
                if let Step::Interrupted = self.advance(sink, delay, &mut failures)? {
                    return Ok(Completion::Interrupted);
                }
                for i in (q..count).step_by(3) {
                    sink.set_pixel(i, BLACK)?;
                }
            }
        }

        Ok(Completion::Finished)
    }

    /// Chaser whose lit pixels cycle through the rainbow.
    ///
    /// The hue is keyed to the base index of each lit triple and wraps
    /// modulo 255, not 256. The shorter cycle is part of this
    /// animation's look; do not "fix" it to match [`Animator::rainbow`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn theater_chase_rainbow<S: PixelSink>(
        &mut self,
        sink: &mut S,
        delay: Duration,
    ) -> Result<Completion, SinkError> {
        let count = sink.pixel_count();
        let mut failures = 0;
        for j in 0..256usize {
            for q in 0..3 {
                for base in (0..count).step_by(3) {
                    let index = base + q;
                    if index >= count {
                        break;
                    }
                    sink.set_pixel(index, wheel(((base + j) % 255) as u8))?;
                }
                if let Step::Interrupted = self.advance(sink, delay, &mut failures)? {
                    return Ok(Completion::Interrupted);
                }
                for base in (0..count).step_by(3) {
                    let index = base + q;
                    if index >= count {
                        break;
                    }
                    sink.set_pixel(index, BLACK)?;
                }
            }
        }

        Ok(Completion::Finished)
    }
}
