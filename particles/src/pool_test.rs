use super::*;

fn seed(life: f64) -> ParticleSeed {
    ParticleSeed { x: 10.0, y: 20.0, vx: 1.0, vy: -2.0, radius: 2.0, life, hue: 250.0 }
}

#[test]
fn new_pool_is_empty() {
    let pool = ParticlePool::new(8);
    assert_eq!(pool.capacity(), 8);
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn spawn_starts_at_full_alpha() {
    let mut pool = ParticlePool::new(4);
    assert!(pool.spawn(seed(10.0)));
    let p = pool.active().next().unwrap();
    assert!((p.alpha - 1.0).abs() < f64::EPSILON);
    assert!((p.max_life - 10.0).abs() < f64::EPSILON);
}

#[test]
fn full_pool_drops_spawn() {
    let mut pool = ParticlePool::new(3);
    for _ in 0..3 {
        assert!(pool.spawn(seed(10.0)));
    }
    assert!(!pool.spawn(seed(10.0)));
    assert_eq!(pool.active_count(), 3);
}

#[test]
fn zero_life_seed_is_rejected() {
    let mut pool = ParticlePool::new(2);
    assert!(!pool.spawn(seed(0.0)));
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn step_moves_and_damps() {
    let mut pool = ParticlePool::new(1);
    pool.spawn(seed(10.0));
    pool.step(0.5);
    let p = pool.active().next().unwrap();
    assert!((p.x - 11.0).abs() < 1e-12);
    assert!((p.y - 18.0).abs() < 1e-12);
    assert!((p.vx - 0.5).abs() < 1e-12);
    assert!((p.vy + 1.0).abs() < 1e-12);
    assert!((p.alpha - 0.9).abs() < 1e-12);
}

#[test]
fn alpha_is_monotonic_until_deactivation() {
    let mut pool = ParticlePool::new(1);
    pool.spawn(seed(5.5));
    let mut last = 1.0;
    let mut frames = 0;
    while pool.active_count() == 1 {
        pool.step(0.98);
        frames += 1;
        let alpha = pool.slots[0].alpha;
        assert!(alpha <= last);
        assert!(alpha >= 0.0);
        last = alpha;
    }
    assert_eq!(frames, 6);
    assert!(last.abs() < f64::EPSILON);
}

#[test]
fn expired_slot_is_reused() {
    let mut pool = ParticlePool::new(1);
    pool.spawn(seed(1.0));
    pool.step(0.98);
    assert_eq!(pool.active_count(), 0);

    let mut fresh = seed(3.0);
    fresh.hue = 300.0;
    assert!(pool.spawn(fresh));
    let p = pool.active().next().unwrap();
    assert!((p.hue - 300.0).abs() < f64::EPSILON);
    assert!((p.x - 10.0).abs() < f64::EPSILON);
}
