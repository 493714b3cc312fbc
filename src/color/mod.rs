//! Color math: hex decoding, relative luminance and contrast selection.
//!
//! Two decoding paths exist side by side:
//!
//! * [`Rgb::from_hex`]: strict, returns a [`ColorError`](crate::error::ColorError).
//! * [`hex_to_rgb`]: lenient, anything malformed decodes to black. Callers that
//!   need to reject bad input should check [`is_valid_hex_color`] first.

pub mod input;
pub mod luminance;
pub mod rgb;

pub use input::{HexInput, clean_hex_input};
pub use luminance::{
    CONTRAST_DARK, CONTRAST_LIGHT, contrast_ratio, get_contrast_color, get_luminance,
};
pub use rgb::{Rgb, hex_to_rgb, is_valid_hex_color};
