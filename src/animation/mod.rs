//! Blocking strip animations
//!
//! Each routine drives one animation to completion: it writes pixels
//! through a [`PixelSink`], flushes, and sleeps the per-frame delay via
//! the host's [`FramePacer`]. Between every flush and sleep the shared
//! [`CancelToken`] is checked, so an interrupt stops the run within one
//! frame. Whatever was flushed last stays visible until the shutdown
//! [`clear`].

mod chase;
mod rainbow;
mod wipe;

use embassy_time::Duration;
use log::warn;

use crate::PixelSink;
use crate::cancel::CancelToken;
use crate::color::{BLACK, Rgb};
use crate::pacing::FramePacer;
use crate::sink::SinkError;

const ANIMATION_NAME_COLOR_WIPE: &str = "color_wipe";
const ANIMATION_NAME_REVERSE_COLOR_WIPE: &str = "reverse_color_wipe";
const ANIMATION_NAME_THEATER_CHASE: &str = "theater_chase";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const ANIMATION_NAME_THEATER_CHASE_RAINBOW: &str = "theater_chase_rainbow";

/// Consecutive flush failures tolerated before a run aborts
const DEFAULT_MAX_FLUSH_FAILURES: u8 = 5;

/// Known animations that can be requested by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationId {
    ColorWipe,
    ReverseColorWipe,
    TheaterChase,
    Rainbow,
    RainbowCycle,
    TheaterChaseRainbow,
}

impl AnimationId {
    pub const ALL: [Self; 6] = [
        Self::ColorWipe,
        Self::ReverseColorWipe,
        Self::TheaterChase,
        Self::Rainbow,
        Self::RainbowCycle,
        Self::TheaterChaseRainbow,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorWipe => ANIMATION_NAME_COLOR_WIPE,
            Self::ReverseColorWipe => ANIMATION_NAME_REVERSE_COLOR_WIPE,
            Self::TheaterChase => ANIMATION_NAME_THEATER_CHASE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::RainbowCycle => ANIMATION_NAME_RAINBOW_CYCLE,
            Self::TheaterChaseRainbow => ANIMATION_NAME_THEATER_CHASE_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            ANIMATION_NAME_REVERSE_COLOR_WIPE => Some(Self::ReverseColorWipe),
            ANIMATION_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            ANIMATION_NAME_THEATER_CHASE_RAINBOW => Some(Self::TheaterChaseRainbow),
            _ => None,
        }
    }
}

/// How an animation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The routine ran all of its steps.
    Finished,
    /// Cancellation was observed between a flush and the next sleep.
    Interrupted,
}

/// Outcome of a single frame step, internal to the routines.
enum Step {
    Continue,
    Interrupted,
}

/// Animation engine
///
/// Owns the frame pacer and a reference to the host's cancellation
/// token. Per-animation counters live on the stack of each routine;
/// nothing persists between runs.
pub struct Animator<'a, P: FramePacer> {
    pacer: P,
    cancel: &'a CancelToken,
    max_flush_failures: u8,
}

impl<'a, P: FramePacer> Animator<'a, P> {
    pub fn new(pacer: P, cancel: &'a CancelToken) -> Self {
        Self {
            pacer,
            cancel,
            max_flush_failures: DEFAULT_MAX_FLUSH_FAILURES,
        }
    }

    /// Set how many consecutive flush failures a run tolerates
    #[must_use]
    pub fn with_max_flush_failures(mut self, limit: u8) -> Self {
        self.max_flush_failures = limit;
        self
    }

    /// Run one animation by id.
    ///
    /// `color` applies to the solid-fill patterns, `iterations` to the
    /// repeating ones; the others ignore the parameter they do not use.
    pub fn run<S: PixelSink>(
        &mut self,
        id: AnimationId,
        sink: &mut S,
        color: Rgb,
        delay: Duration,
        iterations: usize,
    ) -> Result<Completion, SinkError> {
        match id {
            AnimationId::ColorWipe => self.color_wipe(sink, color, delay),
            AnimationId::ReverseColorWipe => self.reverse_color_wipe(sink, color, delay),
            AnimationId::TheaterChase => self.theater_chase(sink, color, delay, iterations),
            AnimationId::Rainbow => self.rainbow(sink, delay, iterations),
            AnimationId::RainbowCycle => self.rainbow_cycle(sink, delay, iterations),
            AnimationId::TheaterChaseRainbow => self.theater_chase_rainbow(sink, delay),
        }
    }

    /// Finish one frame: flush, observe cancellation, sleep.
    ///
    /// Flush failures are logged and tolerated up to the configured
    /// consecutive limit; a disconnected strip aborts the run instead
    /// of fast-looping forever. Any success resets the count.
    fn advance<S: PixelSink>(
        &mut self,
        sink: &mut S,
        delay: Duration,
        failures: &mut u8,
    ) -> Result<Step, SinkError> {
        match sink.flush() {
            Ok(()) => *failures = 0,
            Err(err) => {
                *failures = failures.saturating_add(1);
                warn!("pixel flush failed ({} consecutive): {err}", *failures);
                if *failures > self.max_flush_failures {
                    return Err(err);
                }
            }
        }

        if self.cancel.is_cancelled() {
            return Ok(Step::Interrupted);
        }

        self.pacer.sleep(delay);
        Ok(Step::Continue)
    }
}

/// Blank the strip: every pixel black, one flush.
///
/// Used at shutdown after an interrupt. Best effort; the caller logs a
/// failure and proceeds to exit.
pub fn clear<S: PixelSink>(sink: &mut S) -> Result<(), SinkError> {
    for i in 0..sink.pixel_count() {
        sink.set_pixel(i, BLACK)?;
    }
    sink.flush()
}
