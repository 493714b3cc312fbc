//! Design tokens shared by every screen. Spacing follows an 8px grid.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    pub xxl: u16,
}

pub const SPACING: Spacing = Spacing {
    xs: 4,
    sm: 8,
    md: 16,
    lg: 24,
    xl: 32,
    xxl: 40,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderWidth {
    pub thin: u16,
    pub medium: u16,
    pub thick: u16,
    pub neobrutal: u16,
}

pub const BORDER_WIDTH: BorderWidth = BorderWidth {
    thin: 1,
    medium: 2,
    thick: 4,
    neobrutal: 5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderRadius {
    pub none: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    /// Large enough to turn any button into a pill.
    pub full: u16,
}

pub const BORDER_RADIUS: BorderRadius = BorderRadius {
    none: 0,
    sm: 8,
    md: 12,
    lg: 16,
    xl: 20,
    full: 9999,
};

/// CSS-style numeric weights, kept as strings the way the renderer takes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontWeight {
    pub regular: &'static str,
    pub medium: &'static str,
    pub semibold: &'static str,
    pub bold: &'static str,
    pub extrabold: &'static str,
    pub black: &'static str,
}

pub const FONT_WEIGHT: FontWeight = FontWeight {
    regular: "400",
    medium: "500",
    semibold: "600",
    bold: "700",
    extrabold: "800",
    black: "900",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSize {
    pub xs: u16,
    pub sm: u16,
    pub base: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    pub xxl: u16,
    pub xxxl: u16,
    pub huge: u16,
}

pub const FONT_SIZE: FontSize = FontSize {
    xs: 11,
    sm: 12,
    base: 14,
    md: 16,
    lg: 18,
    xl: 20,
    xxl: 24,
    xxxl: 32,
    huge: 52,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub offset: ShadowOffset,
    pub opacity: f32,
    pub radius: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadows {
    pub neobrutal: Shadow,
    pub neobrutalism: Shadow,
    pub soft: Shadow,
}

pub const SHADOWS: Shadows = Shadows {
    neobrutal: Shadow {
        offset: ShadowOffset {
            width: 0.0,
            height: 4.0,
        },
        opacity: 1.0,
        radius: 0.0,
        color: "#000000",
    },
    neobrutalism: Shadow {
        offset: ShadowOffset {
            width: 0.0,
            height: 3.0,
        },
        opacity: 1.0,
        radius: 0.0,
        color: "#000000",
    },
    soft: Shadow {
        offset: ShadowOffset {
            width: 0.0,
            height: 2.0,
        },
        opacity: 0.1,
        radius: 4.0,
        color: "#000000",
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonSize {
    pub small: u16,
    pub medium: u16,
    pub large: u16,
    pub xlarge: u16,
}

pub const BUTTON_SIZE: ButtonSize = ButtonSize {
    small: 40,
    medium: 48,
    large: 56,
    xlarge: 60,
};

/// Milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationDuration {
    pub fast: u32,
    pub normal: u32,
    pub slow: u32,
}

pub const ANIMATION_DURATION: AnimationDuration = AnimationDuration {
    fast: 150,
    normal: 250,
    slow: 350,
};

/// Interaction timings, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// Window in which a deleted counter can be restored.
    pub undo_timeout: u32,
    pub long_press_delay: u32,
    pub debounce_delay: u32,
}

pub const TIMING: Timing = Timing {
    undo_timeout: 5000,
    long_press_delay: 500,
    debounce_delay: 300,
};

/// Every token group, for shipping to the UI layer in one piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub spacing: Spacing,
    pub border_width: BorderWidth,
    pub border_radius: BorderRadius,
    pub font_weight: FontWeight,
    pub font_size: FontSize,
    pub shadows: Shadows,
    pub button_size: ButtonSize,
    pub animation_duration: AnimationDuration,
    pub timing: Timing,
}

pub const DESIGN_TOKENS: DesignTokens = DesignTokens {
    spacing: SPACING,
    border_width: BORDER_WIDTH,
    border_radius: BORDER_RADIUS,
    font_weight: FONT_WEIGHT,
    font_size: FONT_SIZE,
    shadows: SHADOWS,
    button_size: BUTTON_SIZE,
    animation_duration: ANIMATION_DURATION,
    timing: TIMING,
};
