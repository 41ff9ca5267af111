//! Time-gated ambient spawn policy.
//!
//! Each due poll picks a random centre in the viewport. With probability
//! `cluster_chance` it emits a small cluster scattered around that centre,
//! otherwise a single particle. Spawns beyond pool capacity are dropped.

use rand::Rng;

use crate::config::FieldConfig;
use crate::pool::{ParticlePool, ParticleSeed};

#[derive(Debug, Clone)]
pub struct AmbientSpawner {
    rate_ms: f64,
    last_spawn_ms: Option<f64>,
}

impl AmbientSpawner {
    #[must_use]
    pub fn new(rate_ms: f64) -> Self {
        Self { rate_ms, last_spawn_ms: None }
    }

    /// Change the cadence; the last spawn time is kept.
    pub fn set_rate(&mut self, rate_ms: f64) {
        self.rate_ms = rate_ms;
    }

    /// True on the first poll and whenever more than `rate_ms` has passed
    /// since the last spawn.
    #[must_use]
    pub fn is_due(&self, now_ms: f64) -> bool {
        self.last_spawn_ms.is_none_or(|last| now_ms - last > self.rate_ms)
    }

    /// Spawn a burst into `pool` if one is due. Returns how many particles
    /// were actually placed.
    pub fn poll<R: Rng>(
        &mut self,
        now_ms: f64,
        viewport: (f64, f64),
        config: &FieldConfig,
        pool: &mut ParticlePool,
        rng: &mut R,
    ) -> usize {
        if !self.is_due(now_ms) {
            return 0;
        }
        self.last_spawn_ms = Some(now_ms);

        let (width, height) = viewport;
        let cx = between(rng, 0.0, width);
        let cy = between(rng, 0.0, height);

        let cluster = rng.random_bool(config.cluster_chance.clamp(0.0, 1.0));
        let count = if cluster { cluster_size(rng, config) } else { 1 };
        let vscale = config.ambient_velocity_scale();

        let mut placed = 0;
        for _ in 0..count {
            let (dx, dy) = if cluster {
                let half = config.cluster_spread * 0.5;
                (between(rng, -half, half), between(rng, -half, half))
            } else {
                (0.0, 0.0)
            };
            if pool.spawn(seed(rng, config, cx + dx, cy + dy, vscale)) {
                placed += 1;
            }
        }
        placed
    }
}

/// Randomised particle at `(x, y)` with per-axis speed in `±vscale/2`.
pub fn seed<R: Rng>(rng: &mut R, config: &FieldConfig, x: f64, y: f64, vscale: f64) -> ParticleSeed {
    let jitter = config.life_jitter;
    ParticleSeed {
        x,
        y,
        vx: between(rng, -0.5, 0.5) * vscale,
        vy: between(rng, -0.5, 0.5) * vscale,
        radius: between(rng, config.min_radius, config.max_radius),
        life: config.particle_life * between(rng, 1.0 - jitter, 1.0 + jitter),
        hue: between(rng, config.min_hue, config.max_hue),
    }
}

fn cluster_size<R: Rng>(rng: &mut R, config: &FieldConfig) -> usize {
    if config.cluster_max > config.cluster_min {
        rng.random_range(config.cluster_min..=config.cluster_max)
    } else {
        config.cluster_min
    }
}

/// Uniform in `[lo, hi)`; returns `lo` for an empty range.
fn between<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.random::<f64>() * (hi - lo)
}

#[cfg(test)]
#[path = "spawner_test.rs"]
mod spawner_test;
