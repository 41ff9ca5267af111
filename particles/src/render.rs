//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads pool and config state and produces pixels; it does not mutate
//! any field state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::host::HeroParticles::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::FieldConfig;
use crate::field::Viewport;
use crate::pool::{Particle, ParticlePool};

/// Compositing mode that lets overlapping particles brighten each other.
pub const COMPOSITE_MODE: &str = "screen";

/// Colour stops for the reduced-motion backdrop, top-left to bottom-right.
const STATIC_STOPS: [(f32, &str); 3] = [
    (0.0, "hsla(200, 70%, 70%, 0.05)"),
    (0.5, "hsla(260, 70%, 70%, 0.05)"),
    (1.0, "hsla(320, 70%, 70%, 0.10)"),
];

/// Fill colour for a particle: faded by life and by the global opacity.
#[must_use]
pub fn fill_style(hue: f64, alpha: f64, opacity: f64) -> String {
    format!("hsla({hue}, 70%, 70%, {})", alpha * opacity)
}

/// Glow colour for a particle: faded by life only.
#[must_use]
pub fn glow_style(hue: f64, alpha: f64) -> String {
    format!("hsla({hue}, 70%, 70%, {alpha})")
}

/// Clear the canvas and draw every active particle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    pool: &ParticlePool,
    config: &FieldConfig,
    viewport: Viewport,
) -> Result<(), JsValue> {
    reset(ctx, viewport)?;
    ctx.set_global_composite_operation(COMPOSITE_MODE)?;
    ctx.set_shadow_blur(config.blur);

    for p in pool.active() {
        draw_particle(ctx, p, config.opacity)?;
    }
    Ok(())
}

/// Paint the reduced-motion backdrop: a soft diagonal gradient, drawn once.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_static(ctx: &CanvasRenderingContext2d, viewport: Viewport) -> Result<(), JsValue> {
    reset(ctx, viewport)?;
    let gradient = ctx.create_linear_gradient(0.0, 0.0, viewport.width, viewport.height);
    for (offset, color) in STATIC_STOPS {
        gradient.add_color_stop(offset, color)?;
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    Ok(())
}

/// Scale to device pixels and clear in CSS-pixel space.
fn reset(ctx: &CanvasRenderingContext2d, viewport: Viewport) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    Ok(())
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle, opacity: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&fill_style(p.hue, p.alpha, opacity));
    ctx.set_shadow_color(&glow_style(p.hue, p.alpha));
    ctx.fill();
    Ok(())
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
