//! Per-frame driver for the hero particle field.
//!
//! `ParticleField` holds every piece of state that does not depend on the
//! canvas element, so it can be tested without WASM or a browser. The host
//! in [`crate::host`] owns one and forwards DOM events to it.

use rand::Rng;

use crate::config::FieldConfig;
use crate::gate::Gates;
use crate::pool::ParticlePool;
use crate::spawner::AmbientSpawner;

/// What a call to [`ParticleField::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A gate was closed; nothing changed and nothing should be drawn.
    Idle,
    /// Particles were spawned and advanced; the canvas should be redrawn.
    Stepped,
}

/// Drawing surface size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Clamp sizes to zero; non-positive ratios fall back to 1.
    #[must_use]
    pub fn new(width_css: f64, height_css: f64, dpr: f64) -> Self {
        Self {
            width: width_css.max(0.0),
            height: height_css.max(0.0),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    /// Backing-store size in device pixels.
    #[must_use]
    pub fn device_size(&self) -> (u32, u32) {
        ((self.width * self.dpr).round() as u32, (self.height * self.dpr).round() as u32)
    }
}

pub struct ParticleField<R: Rng> {
    config: FieldConfig,
    pool: ParticlePool,
    gates: Gates,
    spawner: AmbientSpawner,
    viewport: Viewport,
    mounted_at_ms: f64,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// Allocate the pool and start the boot clock at `mounted_at_ms`.
    #[must_use]
    pub fn new(config: FieldConfig, rng: R, mounted_at_ms: f64, tab_visible: bool) -> Self {
        Self {
            pool: ParticlePool::new(config.max_particles),
            spawner: AmbientSpawner::new(config.ambient_rate_ms),
            gates: Gates::at_mount(tab_visible),
            viewport: Viewport::default(),
            config,
            mounted_at_ms,
            rng,
        }
    }

    // --- Host inputs ---

    /// Record a new CSS size and pixel ratio.
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport = Viewport::new(width_css, height_css, dpr);
    }

    /// Switch between the desktop and mobile spawn cadence.
    pub fn use_device_profile(&mut self, mobile: bool) {
        let rate = FieldConfig::for_device(mobile).ambient_rate_ms;
        self.config.ambient_rate_ms = rate;
        self.spawner.set_rate(rate);
    }

    pub fn set_hero_visible(&mut self, visible: bool) {
        self.gates.hero_visible = visible;
    }

    pub fn set_tab_visible(&mut self, visible: bool) {
        self.gates.tab_visible = visible;
    }

    /// Run one animation frame at `now_ms` (same clock as `mounted_at_ms`).
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.gates.booted && now_ms - self.mounted_at_ms >= self.config.boot_delay_ms {
            self.gates.booted = true;
        }
        if !self.gates.is_open() {
            return FrameOutcome::Idle;
        }

        self.spawner.poll(
            now_ms,
            (self.viewport.width, self.viewport.height),
            &self.config,
            &mut self.pool,
            &mut self.rng,
        );
        self.pool.step(self.config.damping);
        FrameOutcome::Stepped
    }

    // --- Queries ---

    #[must_use]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    #[must_use]
    pub fn gates(&self) -> Gates {
        self.gates
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// The hero background: animated particles, or a static gradient when the
/// visitor prefers reduced motion. `Static` allocates no particle state.
pub enum HeroEffect<R: Rng> {
    Animated(ParticleField<R>),
    Static,
}

impl<R: Rng> HeroEffect<R> {
    #[must_use]
    pub fn new(reduced_motion: bool, config: FieldConfig, rng: R, mounted_at_ms: f64, tab_visible: bool) -> Self {
        if reduced_motion {
            Self::Static
        } else {
            Self::Animated(ParticleField::new(config, rng, mounted_at_ms, tab_visible))
        }
    }

    #[must_use]
    pub fn field(&self) -> Option<&ParticleField<R>> {
        match self {
            Self::Animated(field) => Some(field),
            Self::Static => None,
        }
    }

    pub fn field_mut(&mut self) -> Option<&mut ParticleField<R>> {
        match self {
            Self::Animated(field) => Some(field),
            Self::Static => None,
        }
    }

    /// Static effects never step.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        match self {
            Self::Animated(field) => field.frame(now_ms),
            Self::Static => FrameOutcome::Idle,
        }
    }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
