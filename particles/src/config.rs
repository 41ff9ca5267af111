//! Field tuning.

use crate::consts::*;

/// Every knob the field reads. `Default` is the desktop profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub ambient_rate_ms: f64,
    pub cluster_chance: f64,
    pub cluster_min: usize,
    pub cluster_max: usize,
    pub cluster_spread: f64,
    pub opacity: f64,
    pub particle_life: f64,
    pub life_jitter: f64,
    pub blur: f64,
    pub min_hue: f64,
    pub max_hue: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub velocity_scale: f64,
    pub damping: f64,
    pub boot_delay_ms: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            ambient_rate_ms: AMBIENT_RATE_MS,
            cluster_chance: CLUSTER_CHANCE,
            cluster_min: CLUSTER_MIN,
            cluster_max: CLUSTER_MAX,
            cluster_spread: CLUSTER_SPREAD_PX,
            opacity: OPACITY,
            particle_life: PARTICLE_LIFE_FRAMES,
            life_jitter: LIFE_JITTER,
            blur: GLOW_BLUR,
            min_hue: MIN_HUE,
            max_hue: MAX_HUE,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            velocity_scale: VELOCITY_SCALE,
            damping: DAMPING,
            boot_delay_ms: BOOT_DELAY_MS,
        }
    }
}

impl FieldConfig {
    /// Desktop defaults, with the spawn cadence halved on mobile.
    #[must_use]
    pub fn for_device(mobile: bool) -> Self {
        let mut config = Self::default();
        if mobile {
            config.ambient_rate_ms = AMBIENT_RATE_MOBILE_MS;
        }
        config
    }

    /// Speed scale for timer-spawned particles.
    #[must_use]
    pub fn ambient_velocity_scale(&self) -> f64 {
        self.velocity_scale * AMBIENT_VELOCITY_FACTOR
    }
}

/// Whether a viewport this wide (CSS pixels) gets the mobile profile.
#[must_use]
pub fn is_mobile_width(width_css: f64) -> bool {
    width_css <= MOBILE_MAX_WIDTH_PX
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
