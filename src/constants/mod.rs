//! Static tables consumed by the UI layer: palettes, themes, design tokens and
//! counter templates.

pub mod colors;
pub mod design;
pub mod templates;

pub use colors::{
    DARK_THEME, DEFAULT_COUNTER_COLOR, EXTENDED_PALETTE, LIGHT_THEME, PRESET_COLORS,
    PRESET_SWATCHES, Swatch, ThemeColors,
};
pub use design::DESIGN_TOKENS;
pub use templates::{COUNTER_TEMPLATES, CounterTemplate, find_template};
