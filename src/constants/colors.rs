//! Static color palettes for counters and the two UI themes.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::color::{Rgb, hex_to_rgb};

/// Quick-pick colors offered when creating or editing a counter.
pub const PRESET_COLORS: [&str; 12] = [
    "#007AFF", // Blue
    "#34C759", // Green
    "#FF9500", // Orange
    "#FF3B30", // Red
    "#5856D6", // Purple
    "#AF52DE", // Violet
    "#FF2D55", // Pink
    "#5AC8FA", // Cyan
    "#4CD964", // Light Green
    "#FFCC00", // Yellow
    "#8E8E93", // Gray
    "#000000", // Black
];

pub const DEFAULT_COUNTER_COLOR: &str = "#007AFF";

/// A named row of the custom picker's grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaletteGroup {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

/// The custom picker's full grid, light to dark within each hue.
pub const EXTENDED_PALETTE: &[PaletteGroup] = &[
    PaletteGroup {
        name: "Reds",
        colors: &["#FF0000", "#FF3333", "#FF6666", "#CC0000", "#990000"],
    },
    PaletteGroup {
        name: "Oranges",
        colors: &["#FF6600", "#FF9933", "#FFCC00", "#CC7700", "#994400"],
    },
    PaletteGroup {
        name: "Yellows",
        colors: &["#FFFF00", "#FFFF66", "#FFFFCC", "#CCCC00", "#999900"],
    },
    PaletteGroup {
        name: "Greens",
        colors: &[
            "#00FF00", "#33FF33", "#66FF66", "#00CC00", "#009900", "#00FFCC", "#33FFCC", "#00CCAA",
            "#009988", "#006655",
        ],
    },
    PaletteGroup {
        name: "Blues",
        colors: &[
            "#0000FF", "#3333FF", "#6666FF", "#0000CC", "#000099", "#00CCFF", "#33AAFF", "#0099CC",
            "#006699", "#003366",
        ],
    },
    PaletteGroup {
        name: "Purples",
        colors: &["#9933FF", "#CC66FF", "#7700CC", "#550099", "#330066"],
    },
    PaletteGroup {
        name: "Pinks",
        colors: &["#FF00FF", "#FF66FF", "#FF99CC", "#CC0099", "#990066"],
    },
    PaletteGroup {
        name: "Browns",
        colors: &["#996633", "#CC9966", "#663300", "#997755", "#664422"],
    },
    PaletteGroup {
        name: "Grays",
        colors: &[
            "#FFFFFF", "#CCCCCC", "#999999", "#666666", "#333333", "#000000",
        ],
    },
];

/// Every extended palette color in grid order.
pub fn extended_palette_colors() -> impl Iterator<Item = &'static str> {
    EXTENDED_PALETTE
        .iter()
        .flat_map(|group| group.colors.iter().copied())
}

/// Surface colors for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub card: &'static str,
    pub tab_bar: &'static str,
    pub tab_bar_border: &'static str,
}

pub const LIGHT_THEME: ThemeColors = ThemeColors {
    background: "#FFFFFF",
    text: "#000000",
    text_secondary: "#8E8E93",
    border: "#E5E5EA",
    card: "#F2F2F7",
    tab_bar: "#FFFFFF",
    tab_bar_border: "#E5E5EA",
};

pub const DARK_THEME: ThemeColors = ThemeColors {
    background: "#000000",
    text: "#FFFFFF",
    text_secondary: "#8E8E93",
    border: "#2C2C2C",
    card: "#1E1E1E",
    tab_bar: "#1E1E1E",
    tab_bar_border: "#2C2C2C",
};

impl ThemeColors {
    pub const fn for_mode(dark: bool) -> Self {
        if dark { DARK_THEME } else { LIGHT_THEME }
    }
}

/// A preset color with its decoded channels and the text color to draw on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swatch {
    pub hex: &'static str,
    pub rgb: Rgb,
    pub contrast: &'static str,
}

impl Swatch {
    fn new(hex: &'static str) -> Self {
        let rgb = hex_to_rgb(hex);
        Self {
            hex,
            rgb,
            contrast: rgb.contrast_color(),
        }
    }
}

/// [`PRESET_COLORS`] decoded once.
pub static PRESET_SWATCHES: Lazy<Vec<Swatch>> =
    Lazy::new(|| PRESET_COLORS.iter().copied().map(Swatch::new).collect());
