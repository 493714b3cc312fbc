//! The `Rgb` triple and its hex encodings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::ColorError;

/// An opaque 8-bit-per-channel color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB`, case-insensitive.
    ///
    /// Exactly six hex digits must follow the optional `#`. No whitespace is
    /// trimmed and the short `#RGB` form is not accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let count = digits.chars().count();
        if count != 6 {
            return Err(ColorError::InvalidLength(count));
        }

        let mut nibbles = [0u8; 6];
        for (index, (slot, c)) in nibbles.iter_mut().zip(digits.chars()).enumerate() {
            // `to_digit(16)` only accepts ASCII 0-9, a-f, A-F.
            *slot = c
                .to_digit(16)
                .ok_or(ColorError::InvalidDigit { index, found: c })? as u8;
        }

        Ok(Self {
            r: nibbles[0] << 4 | nibbles[1],
            g: nibbles[2] << 4 | nibbles[3],
            b: nibbles[4] << 4 | nibbles[5],
        })
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(feature = "egui")]
impl From<Rgb> for egui::Color32 {
    fn from(rgb: Rgb) -> Self {
        egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

// Serialized as the `#RRGGBB` string the UI layer already speaks.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s)
            .map_err(|e| de::Error::custom(format!("Invalid color {s:?}: {e}")))
    }
}

/// Decode a hex color, falling back to black for anything malformed.
///
/// Accepts the same shapes as [`Rgb::from_hex`]. This lenient path never
/// fails, so `hex_to_rgb("not-a-color")` is `Rgb { r: 0, g: 0, b: 0 }`.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb,
        Err(e) => {
            log::trace!("hex_to_rgb: {hex:?} decodes to black ({e})");
            Rgb::BLACK
        }
    }
}

/// `true` iff `color` is `#` followed by exactly six hex digits.
///
/// Unlike [`hex_to_rgb`] the leading `#` is mandatory here.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
