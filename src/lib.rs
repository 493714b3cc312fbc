//! Pure logic behind the Tallies counter app.
//!
//! * [`color`]: hex decoding, relative luminance, contrast text color.
//! * [`validation`]: counter name, target and increment rules.
//! * [`constants`]: palettes, themes, design tokens, counter templates.
//! * [`draft`]: whole-form validation built from the field rules.
//!
//! Nothing here performs I/O or holds state; every function can be called from
//! any thread.

pub mod color;
pub mod constants;
pub mod draft;
pub mod error;
pub mod validation;

pub use color::{Rgb, get_contrast_color, get_luminance, hex_to_rgb, is_valid_hex_color};
pub use draft::{CounterDraft, DraftReport, Field, FieldError, check_drafts};
pub use error::{ColorError, TallyError, ValidationError};
pub use validation::{
    NumericInput, sanitize_counter_name, validate_counter_name, validate_increment,
    validate_target,
};
