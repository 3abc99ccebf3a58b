use super::*;

// =============================================================
// Palette declarations
// =============================================================

#[test]
fn light_palette_matches_declared_colors() {
    assert_eq!(LIGHT.primary, "#FFFFFF");
    assert_eq!(LIGHT.secondary, "#1D1135");
    assert_eq!(LIGHT.accent, "#FFFF99");
    assert_eq!(LIGHT.error, "#FF1744");
}

#[test]
fn dark_palette_matches_declared_colors() {
    assert_eq!(DARK.primary, "#314455");
    assert_eq!(DARK.secondary, "#C96567");
    assert_eq!(DARK.accent, "#97AABD");
    assert_eq!(DARK.error, "#FF5252");
}

// =============================================================
// Mode behavior
// =============================================================

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
    assert_eq!(ThemeMode::default().palette(), &LIGHT);
}

#[test]
fn flipped_swaps_modes() {
    assert_eq!(ThemeMode::Light.flipped(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.flipped(), ThemeMode::Light);
}

#[test]
fn css_variables_cover_all_roles() {
    let vars = css_variables(&DARK);
    assert_eq!(vars[0], ("--color-primary", "#314455"));
    assert_eq!(vars[1], ("--color-secondary", "#C96567"));
    assert_eq!(vars[2], ("--color-accent", "#97AABD"));
    assert_eq!(vars[3], ("--color-error", "#FF5252"));
}

#[test]
fn read_preference_defaults_to_light_outside_browser() {
    assert_eq!(read_preference(), ThemeMode::Light);
}
