use super::*;

#[test]
fn desktop_profile_defaults() {
    let config = FieldConfig::for_device(false);
    assert_eq!(config, FieldConfig::default());
    assert_eq!(config.max_particles, 100);
    assert!((config.ambient_rate_ms - 400.0).abs() < f64::EPSILON);
    assert!((config.boot_delay_ms - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn mobile_profile_spawns_half_as_often() {
    let config = FieldConfig::for_device(true);
    assert!((config.ambient_rate_ms - 800.0).abs() < f64::EPSILON);
    assert_eq!(config.max_particles, FieldConfig::default().max_particles);
}

#[test]
fn ambient_particles_move_at_half_speed() {
    let config = FieldConfig::default();
    assert!((config.ambient_velocity_scale() - 0.2).abs() < 1e-12);
}

#[test]
fn mobile_width_breakpoint() {
    assert!(is_mobile_width(375.0));
    assert!(is_mobile_width(768.0));
    assert!(!is_mobile_width(769.0));
}
