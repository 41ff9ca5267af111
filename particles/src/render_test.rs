use super::*;

#[test]
fn fill_is_scaled_by_opacity() {
    assert_eq!(fill_style(250.0, 1.0, 0.25), "hsla(250, 70%, 70%, 0.25)");
    assert_eq!(fill_style(200.5, 0.5, 0.5), "hsla(200.5, 70%, 70%, 0.25)");
}

#[test]
fn glow_uses_raw_alpha() {
    assert_eq!(glow_style(320.0, 0.5), "hsla(320, 70%, 70%, 0.5)");
    assert_eq!(glow_style(210.0, 0.0), "hsla(210, 70%, 70%, 0)");
}

#[test]
fn faded_particle_is_transparent() {
    assert!(fill_style(260.0, 0.0, FieldConfig::default().opacity).ends_with(", 0)"));
}

#[test]
fn composite_mode_is_screen() {
    assert_eq!(COMPOSITE_MODE, "screen");
}
