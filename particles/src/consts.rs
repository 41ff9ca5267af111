//! Default tuning constants for the particle field.

// ── Pool ────────────────────────────────────────────────────────

/// Hard cap on simultaneously live particles.
pub const MAX_PARTICLES: usize = 100;

/// Frames a particle lives before jitter.
pub const PARTICLE_LIFE_FRAMES: f64 = 150.0;

/// Lifetime jitter: each particle lives `life * [1 - j, 1 + j)` frames.
pub const LIFE_JITTER: f64 = 0.2;

/// Per-frame velocity multiplier.
pub const DAMPING: f64 = 0.98;

// ── Spawning ────────────────────────────────────────────────────

/// Milliseconds between ambient spawns on desktop.
pub const AMBIENT_RATE_MS: f64 = 400.0;

/// Milliseconds between ambient spawns on narrow (mobile) viewports.
pub const AMBIENT_RATE_MOBILE_MS: f64 = 800.0;

/// Probability that an ambient spawn is a cluster instead of one particle.
pub const CLUSTER_CHANCE: f64 = 0.3;

pub const CLUSTER_MIN: usize = 3;
pub const CLUSTER_MAX: usize = 6;

/// Side of the square, in CSS pixels, that cluster members scatter across.
pub const CLUSTER_SPREAD_PX: f64 = 40.0;

/// Peak speed in CSS pixels per frame along each axis.
pub const VELOCITY_SCALE: f64 = 0.4;

/// Ambient particles move at this fraction of [`VELOCITY_SCALE`].
pub const AMBIENT_VELOCITY_FACTOR: f64 = 0.5;

/// Delay after mount before the field starts animating.
pub const BOOT_DELAY_MS: f64 = 2000.0;

// ── Appearance ──────────────────────────────────────────────────

pub const MIN_HUE: f64 = 200.0;
pub const MAX_HUE: f64 = 320.0;

/// Particle radius range in CSS pixels.
pub const MIN_RADIUS: f64 = 1.2;
pub const MAX_RADIUS: f64 = 4.0;

/// Fill alpha multiplier applied on top of the life-derived alpha.
pub const OPACITY: f64 = 0.28;

/// Glow radius passed to `shadowBlur`.
pub const GLOW_BLUR: f64 = 5.5;

/// Viewports at or below this CSS width count as mobile.
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;
