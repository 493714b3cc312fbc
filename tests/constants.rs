use tallies_core::color::{hex_to_rgb, is_valid_hex_color};
use tallies_core::constants::colors::extended_palette_colors;
use tallies_core::constants::design::{BORDER_RADIUS, FONT_WEIGHT, SHADOWS, SPACING, TIMING};
use tallies_core::constants::{
    COUNTER_TEMPLATES, DARK_THEME, DEFAULT_COUNTER_COLOR, DESIGN_TOKENS, EXTENDED_PALETTE,
    LIGHT_THEME, PRESET_COLORS, PRESET_SWATCHES, ThemeColors, find_template,
};
use tallies_core::validation::{validate_counter_name, validate_target};

#[test]
fn every_palette_entry_is_a_valid_hex_color() {
    let colors = PRESET_COLORS
        .iter()
        .copied()
        .chain(extended_palette_colors());
    for color in colors {
        assert!(is_valid_hex_color(color), "{color}");
    }
    assert!(is_valid_hex_color(DEFAULT_COUNTER_COLOR));
}

#[test]
fn default_color_is_the_first_preset() {
    assert_eq!(PRESET_COLORS[0], DEFAULT_COUNTER_COLOR);
}

#[test]
fn extended_palette_shape() {
    assert_eq!(EXTENDED_PALETTE.len(), 9);
    assert_eq!(extended_palette_colors().count(), 56);
    assert_eq!(EXTENDED_PALETTE[0].name, "Reds");
    assert_eq!(extended_palette_colors().last(), Some("#000000"));
}

#[test]
fn swatches_mirror_presets() {
    assert_eq!(PRESET_SWATCHES.len(), PRESET_COLORS.len());
    for (swatch, hex) in PRESET_SWATCHES.iter().zip(PRESET_COLORS) {
        assert_eq!(swatch.hex, hex);
        assert_eq!(swatch.rgb, hex_to_rgb(hex));
        assert_eq!(swatch.contrast, swatch.rgb.contrast_color());
    }
    assert_eq!(PRESET_SWATCHES.last().map(|s| s.contrast), Some("#FFFFFF"));
}

#[test]
fn themes_are_inverses_on_text() {
    assert_eq!(LIGHT_THEME.background, DARK_THEME.text);
    assert_eq!(LIGHT_THEME.text, DARK_THEME.background);
    assert_eq!(ThemeColors::for_mode(true), DARK_THEME);
    assert_eq!(ThemeColors::for_mode(false), LIGHT_THEME);

    let json = serde_json::to_value(LIGHT_THEME).unwrap();
    assert_eq!(json["tabBarBorder"], "#E5E5EA");
    assert_eq!(json["textSecondary"], "#8E8E93");
}

#[test]
fn design_tokens_follow_the_grid() {
    for step in [SPACING.sm, SPACING.md, SPACING.lg, SPACING.xl, SPACING.xxl] {
        assert_eq!(step % 8, 0);
    }
    assert_eq!(BORDER_RADIUS.full, 9999);
    assert_eq!(FONT_WEIGHT.black, "900");
    assert_eq!(SHADOWS.soft.radius, 4.0);
    assert_eq!(TIMING.undo_timeout, 5000);

    let json = serde_json::to_value(DESIGN_TOKENS).unwrap();
    assert_eq!(json["timing"]["longPressDelay"], 500);
    assert_eq!(json["animationDuration"]["normal"], 250);
    assert_eq!(json["shadows"]["neobrutal"]["offset"]["height"], 4.0);
}

#[test]
fn templates_pass_their_own_validation() {
    assert_eq!(COUNTER_TEMPLATES.len(), 7);
    for template in &COUNTER_TEMPLATES {
        assert_eq!(
            validate_counter_name(template.name),
            Ok(()),
            "{}",
            template.name
        );
        assert_eq!(
            validate_target(template.target),
            Ok(()),
            "{}",
            template.name
        );
        assert!(is_valid_hex_color(template.color), "{}", template.name);
    }
}

#[test]
fn templates_can_be_found_by_name() {
    let steps = find_template("steps").unwrap();
    assert_eq!(steps.target, 10_000);
    assert_eq!(steps.icon, "👟");
    assert!(find_template("Sleep").is_none());
}
