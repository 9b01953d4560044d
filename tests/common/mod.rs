#![allow(dead_code)]

use strip_animator::color::BLACK;
use strip_animator::{CancelToken, Duration, FramePacer, PixelSink, Rgb, SinkError};

/// Pacer that returns immediately; tests never wait.
pub struct InstantPacer;

impl FramePacer for InstantPacer {
    fn sleep(&mut self, _duration: Duration) {}
}

/// Pacer that requests cancellation after a fixed number of sleeps,
/// simulating an interrupt arriving mid-animation.
pub struct CancellingPacer<'a> {
    token: &'a CancelToken,
    after: usize,
    slept: usize,
}

impl<'a> CancellingPacer<'a> {
    pub fn new(token: &'a CancelToken, after: usize) -> Self {
        Self {
            token,
            after,
            slept: 0,
        }
    }
}

impl FramePacer for CancellingPacer<'_> {
    fn sleep(&mut self, _duration: Duration) {
        self.slept += 1;
        if self.slept >= self.after {
            self.token.cancel();
        }
    }
}

/// Sink that records a frame snapshot at every flush.
pub struct RecordingSink {
    pub frame: Vec<Rgb>,
    pub flushed: Vec<Vec<Rgb>>,
    /// Number of upcoming flushes that should fail
    pub failing_flushes: usize,
}

impl RecordingSink {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            frame: vec![BLACK; pixel_count],
            flushed: Vec::new(),
            failing_flushes: 0,
        }
    }

    pub fn last_flushed(&self) -> &[Rgb] {
        self.flushed.last().expect("no flush recorded")
    }
}

impl PixelSink for RecordingSink {
    fn pixel_count(&self) -> usize {
        self.frame.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SinkError> {
        let len = self.frame.len();
        match self.frame.get_mut(index) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(SinkError::IndexOutOfRange { index, len }),
        }
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        if self.failing_flushes > 0 {
            self.failing_flushes -= 1;
            return Err(SinkError::HardwareWrite);
        }

        self.flushed.push(self.frame.clone());
        Ok(())
    }
}
