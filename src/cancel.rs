//! Portable cancellation token for `no_std` environments.
//!
//! Replaces signal-handler-mutates-globals style shutdown: the host
//! sets the token (from a signal handler, an interrupt, or a key event)
//! and the animation loop observes it between frames. Synchronized via
//! critical sections, so a `static` token can be shared with interrupt
//! context.

use core::cell::Cell;

use critical_section::Mutex;

/// A one-way stop flag shared between the driver loop and the host.
pub struct CancelToken {
    cancelled: Mutex<Cell<bool>>,
}

impl CancelToken {
    /// Create a new token in the not-cancelled state.
    pub const fn new() -> Self {
        Self {
            cancelled: Mutex::new(Cell::new(false)),
        }
    }

    /// Request cancellation.
    ///
    /// Safe to call from interrupt or signal context.
    pub fn cancel(&self) {
        critical_section::with(|cs| self.cancelled.borrow(cs).set(true));
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        critical_section::with(|cs| self.cancelled.borrow(cs).get())
    }

    /// Clear the flag so the token can be reused for another run.
    pub fn reset(&self) {
        critical_section::with(|cs| self.cancelled.borrow(cs).set(false));
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
