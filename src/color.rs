//! Color keys used to partition annotations.
//!
//! Two annotations share a group iff their keys are exactly equal in all
//! four channels. Channels compare by bit pattern so the key can serve as
//! an ordered-map key without a tolerance metric.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Normalized RGBA tuple used as the exact-match grouping key.
///
/// Channels are normalized floats in `0.0..=1.0`. A one-unit difference in
/// any 8-bit channel produces a distinct key.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ColorKey {
    /// Red channel, normalized.
    pub red: f64,
    /// Green channel, normalized.
    pub green: f64,
    /// Blue channel, normalized.
    pub blue: f64,
    /// Alpha channel, normalized.
    pub alpha: f64,
}

impl ColorKey {
    /// Create a key from normalized channel values.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a key from 8-bit channel values.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
            alpha: f64::from(alpha) / 255.0,
        }
    }

    /// Render the key as `#rrggbbaa`.
    ///
    /// Each channel is scaled by 255 and truncated toward zero, so `1.0`
    /// encodes as `ff` and `0.0` as `00`.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            Self::channel8(self.red),
            Self::channel8(self.green),
            Self::channel8(self.blue),
            Self::channel8(self.alpha)
        )
    }

    fn channel8(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0) as u8
    }
}

impl PartialEq for ColorKey {
    fn eq(&self, other: &Self) -> bool {
        self.red.to_bits() == other.red.to_bits()
            && self.green.to_bits() == other.green.to_bits()
            && self.blue.to_bits() == other.blue.to_bits()
            && self.alpha.to_bits() == other.alpha.to_bits()
    }
}

impl Eq for ColorKey {}

impl Hash for ColorKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.red.to_bits().hash(state);
        self.green.to_bits().hash(state);
        self.blue.to_bits().hash(state);
        self.alpha.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_encoding_covers_channel_endpoints() {
        assert_eq!(ColorKey::new(1.0, 0.0, 0.0, 1.0).to_hex(), "#ff0000ff");
        assert_eq!(ColorKey::new(0.0, 0.0, 0.0, 0.0).to_hex(), "#00000000");
    }

    #[test]
    fn hex_encoding_truncates_toward_zero() {
        // 0.5 * 255 = 127.5, truncated to 127 = 0x7f.
        assert_eq!(ColorKey::new(0.5, 0.5, 0.5, 0.5).to_hex(), "#7f7f7f7f");
    }

    #[test]
    fn hex_encoding_clamps_out_of_range_channels() {
        assert_eq!(ColorKey::new(1.5, -0.25, 0.0, 1.0).to_hex(), "#ff0000ff");
    }

    #[test]
    fn from_rgba8_round_trips_through_hex() {
        let key = ColorKey::from_rgba8(0xff, 0x80, 0x00, 0xcc);
        assert_eq!(key.to_hex(), "#ff8000cc");
    }

    #[test]
    fn equality_is_exact_per_channel() {
        let yellow = ColorKey::from_rgba8(255, 255, 0, 255);
        assert_eq!(yellow, ColorKey::from_rgba8(255, 255, 0, 255));
        assert_ne!(yellow, ColorKey::from_rgba8(254, 255, 0, 255));
        assert_ne!(yellow, ColorKey::from_rgba8(255, 255, 0, 254));
    }
}
