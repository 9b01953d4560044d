//! Channel wiring order for addressable strips
//!
//! Different strip models expect their color channels in different
//! orders on the wire. The order is resolved once at configuration time
//! and applied when a frame is encoded for transfer.

use heapless::Vec;

use crate::color::Rgb;

const ORDER_NAME_RGB: &str = "RGB";
const ORDER_NAME_RBG: &str = "RBG";
const ORDER_NAME_GRB: &str = "GRB";
const ORDER_NAME_GBR: &str = "GBR";
const ORDER_NAME_BRG: &str = "BRG";
const ORDER_NAME_BGR: &str = "BGR";
const ORDER_NAME_GRBW: &str = "GRBW";

/// Physical channel order of a strip
///
/// The six three-channel permutations, plus `Grbw` for four-channel
/// strips with a dedicated white LED. The white channel is not part of
/// the animation color model and is always written as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
    Grbw,
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::Rbg
    }
}

impl ChannelOrder {
    /// Number of bytes one pixel occupies on the wire
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Grbw => 4,
            _ => 3,
        }
    }

    /// Encode one logical RGB color into wire byte order
    pub fn encode(self, color: Rgb) -> Vec<u8, 4> {
        let Rgb { r, g, b } = color;
        let bytes: &[u8] = match self {
            Self::Rgb => &[r, g, b],
            Self::Rbg => &[r, b, g],
            Self::Grb => &[g, r, b],
            Self::Gbr => &[g, b, r],
            Self::Brg => &[b, r, g],
            Self::Bgr => &[b, g, r],
            Self::Grbw => &[g, r, b, 0],
        };

        let mut out = Vec::new();
        // At most 4 bytes, matching the Vec capacity
        let _ = out.extend_from_slice(bytes);
        out
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => ORDER_NAME_RGB,
            Self::Rbg => ORDER_NAME_RBG,
            Self::Grb => ORDER_NAME_GRB,
            Self::Gbr => ORDER_NAME_GBR,
            Self::Brg => ORDER_NAME_BRG,
            Self::Bgr => ORDER_NAME_BGR,
            Self::Grbw => ORDER_NAME_GRBW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ORDER_NAME_RGB => Some(Self::Rgb),
            ORDER_NAME_RBG => Some(Self::Rbg),
            ORDER_NAME_GRB => Some(Self::Grb),
            ORDER_NAME_GBR => Some(Self::Gbr),
            ORDER_NAME_BRG => Some(Self::Brg),
            ORDER_NAME_BGR => Some(Self::Bgr),
            ORDER_NAME_GRBW => Some(Self::Grbw),
            _ => None,
        }
    }
}
