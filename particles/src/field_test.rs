use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn field() -> ParticleField<SmallRng> {
    let mut field = ParticleField::new(FieldConfig::default(), SmallRng::seed_from_u64(1), 0.0, true);
    field.resize(1200.0, 700.0, 2.0);
    field
}

// =============================================================
// Gating
// =============================================================

#[test]
fn idle_until_boot_delay_elapses() {
    let mut field = field();
    assert_eq!(field.frame(16.0), FrameOutcome::Idle);
    assert_eq!(field.frame(1999.0), FrameOutcome::Idle);
    assert_eq!(field.pool().active_count(), 0);

    assert_eq!(field.frame(2000.0), FrameOutcome::Stepped);
    assert!(field.gates().booted);
    assert!(field.pool().active_count() >= 1);
}

#[test]
fn hidden_hero_suspends_updates() {
    let mut field = field();
    field.frame(2000.0);
    let before: Vec<_> = field.pool().active().copied().collect();

    field.set_hero_visible(false);
    for i in 1..=50 {
        assert_eq!(field.frame(2000.0 + f64::from(i) * 16.0), FrameOutcome::Idle);
    }
    let after: Vec<_> = field.pool().active().copied().collect();
    assert_eq!(before, after);

    field.set_hero_visible(true);
    assert_eq!(field.frame(3000.0), FrameOutcome::Stepped);
}

#[test]
fn background_tab_suspends_updates() {
    let mut field = ParticleField::new(FieldConfig::default(), SmallRng::seed_from_u64(1), 0.0, false);
    assert_eq!(field.frame(5000.0), FrameOutcome::Idle);
    assert!(field.gates().booted);

    field.set_tab_visible(true);
    assert_eq!(field.frame(5016.0), FrameOutcome::Stepped);
}

// =============================================================
// Capacity
// =============================================================

#[test]
fn active_count_never_exceeds_capacity() {
    let config = FieldConfig { max_particles: 12, ambient_rate_ms: 0.0, cluster_chance: 1.0, ..FieldConfig::default() };
    let mut field = ParticleField::new(config, SmallRng::seed_from_u64(9), 0.0, true);
    field.resize(400.0, 300.0, 1.0);

    let mut now = config.boot_delay_ms;
    for _ in 0..2_000 {
        now += 16.0;
        field.frame(now);
        assert!(field.pool().active_count() <= field.pool().capacity());
    }
    assert_eq!(field.pool().capacity(), 12);
}

#[test]
fn particles_expire_once_spawning_stops() {
    let config = FieldConfig { ambient_rate_ms: f64::INFINITY, ..FieldConfig::default() };
    let mut field = ParticleField::new(config, SmallRng::seed_from_u64(3), 0.0, true);
    field.resize(400.0, 300.0, 1.0);

    let mut now = config.boot_delay_ms;
    field.frame(now);
    assert!(field.pool().active_count() >= 1);

    // Longest jittered life is under 1.2 * particle_life frames.
    for _ in 0..200 {
        now += 16.0;
        field.frame(now);
    }
    assert_eq!(field.pool().active_count(), 0);
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn resize_tracks_device_pixels() {
    let field = field();
    assert_eq!(field.viewport().device_size(), (2400, 1400));
}

#[test]
fn non_positive_dpr_falls_back_to_one() {
    let mut field = field();
    field.resize(100.0, 50.0, 0.0);
    assert!((field.viewport().dpr - 1.0).abs() < f64::EPSILON);
    assert_eq!(field.viewport().device_size(), (100, 50));
}

#[test]
fn device_profile_switches_spawn_cadence() {
    let mut field = field();
    field.use_device_profile(true);
    assert!((field.config().ambient_rate_ms - 800.0).abs() < f64::EPSILON);

    assert_eq!(field.frame(2000.0), FrameOutcome::Stepped);
    assert!(!field.spawner.is_due(2600.0));

    field.use_device_profile(false);
    assert!((field.config().ambient_rate_ms - 400.0).abs() < f64::EPSILON);
    assert!(field.spawner.is_due(2600.0));
}

// =============================================================
// Reduced motion
// =============================================================

#[test]
fn reduced_motion_is_static() {
    let mut effect = HeroEffect::new(true, FieldConfig::default(), SmallRng::seed_from_u64(1), 0.0, true);
    assert!(effect.field().is_none());
    assert!(effect.field_mut().is_none());
    assert_eq!(effect.frame(10_000.0), FrameOutcome::Idle);
}

#[test]
fn animated_effect_delegates_to_field() {
    let mut effect = HeroEffect::new(false, FieldConfig::default(), SmallRng::seed_from_u64(1), 0.0, true);
    if let Some(field) = effect.field_mut() {
        field.resize(800.0, 600.0, 1.0);
    }
    assert_eq!(effect.frame(2500.0), FrameOutcome::Stepped);
    assert!(effect.field().is_some_and(|f| f.pool().active_count() >= 1));
}
