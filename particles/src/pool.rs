//! Fixed-capacity particle pool.
//!
//! DESIGN
//! ======
//! All slots are allocated once in [`ParticlePool::new`]. Spawning reuses the
//! first inactive slot and stepping never allocates, so the steady-state
//! frame loop produces no garbage. A spawn with no free slot is dropped and
//! reported as `false`; there is no queue.

/// One particle slot. Inactive slots keep their stale values until reused.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    /// Frames remaining.
    pub life: f64,
    pub max_life: f64,
    pub hue: f64,
    /// `life / max_life`, clamped at zero.
    pub alpha: f64,
    pub active: bool,
}

/// Initial state for a new particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub life: f64,
    pub hue: f64,
}

#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Vec<Particle>,
}

impl ParticlePool {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![Particle::default(); capacity] }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Activate the first free slot with `seed`.
    ///
    /// Returns `false` when the pool is full or the seed has no lifetime.
    pub fn spawn(&mut self, seed: ParticleSeed) -> bool {
        if seed.life <= 0.0 {
            return false;
        }
        let Some(slot) = self.slots.iter_mut().find(|p| !p.active) else {
            return false;
        };
        *slot = Particle {
            x: seed.x,
            y: seed.y,
            vx: seed.vx,
            vy: seed.vy,
            radius: seed.radius,
            life: seed.life,
            max_life: seed.life,
            hue: seed.hue,
            alpha: 1.0,
            active: true,
        };
        true
    }

    /// Advance every active particle by one frame.
    pub fn step(&mut self, damping: f64) {
        for p in self.slots.iter_mut().filter(|p| p.active) {
            p.x += p.vx;
            p.y += p.vy;
            p.vx *= damping;
            p.vy *= damping;
            p.life -= 1.0;
            p.alpha = (p.life / p.max_life).max(0.0);
            if p.life <= 0.0 {
                p.active = false;
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.active)
    }
}

#[cfg(test)]
#[path = "pool_test.rs"]
mod pool_test;
