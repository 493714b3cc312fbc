//! sRGB relative luminance and black/white contrast selection.

use super::rgb::{Rgb, hex_to_rgb};

/// Foreground for light backgrounds.
pub const CONTRAST_DARK: &str = "#000000";
/// Foreground for dark backgrounds.
pub const CONTRAST_LIGHT: &str = "#FFFFFF";

// BT.709 luma coefficients.
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Below this normalized value a channel is expanded linearly.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Luminance above which black text is chosen.
const CONTRAST_CUTOFF: f64 = 0.5;

#[inline]
fn expand_channel(c: u8) -> f64 {
    let val = f64::from(c) / 255.0;
    if val <= LINEAR_THRESHOLD {
        val / 12.92
    } else {
        ((val + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]` of an sRGB color.
pub fn get_luminance(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * expand_channel(r)
        + GREEN_WEIGHT * expand_channel(g)
        + BLUE_WEIGHT * expand_channel(b)
}

/// Pick black or white text for the given background.
///
/// Returns [`CONTRAST_DARK`] when luminance is strictly above 0.5, otherwise
/// [`CONTRAST_LIGHT`]. Malformed input decodes to black and so gets white.
pub fn get_contrast_color(hex: &str) -> &'static str {
    hex_to_rgb(hex).contrast_color()
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

impl Rgb {
    pub fn luminance(self) -> f64 {
        get_luminance(self.r, self.g, self.b)
    }

    /// See [`get_contrast_color`].
    pub fn contrast_color(self) -> &'static str {
        if self.luminance() > CONTRAST_CUTOFF {
            CONTRAST_DARK
        } else {
            CONTRAST_LIGHT
        }
    }
}
