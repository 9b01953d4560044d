//! Rainbow wheel color math
//!
//! Maps a single hue position to an RGB triple. The colors transition
//! red -> green -> blue and back to red over the 0-255 range.

use crate::color::Rgb;

/// Generate a rainbow color for a wheel position
///
/// `pos` is already masked to 0-255 by the parameter type; callers are
/// responsible for wrapping larger step counters before the call.
///
/// The three segments meet at 85 and 170. Within a segment every
/// product stays below 256, so the arithmetic never overflows.
pub fn wheel(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}
