//! Frame pacing seam.
//!
//! The animation routines block between frames, but how a platform
//! waits differs (thread sleep, timer wait, event polling). The pacer
//! trait keeps the core portable; hosts provide the wait.

use embassy_time::Duration;

/// Blocking wait between animation frames.
///
/// Implementations may return early (for example when an interrupt
/// arrives during the wait); the animation core re-checks its
/// cancellation token on every step, so an early return only shortens
/// one frame delay.
pub trait FramePacer {
    /// Block for approximately `duration`.
    fn sleep(&mut self, duration: Duration);
}
