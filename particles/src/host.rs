//! Browser entry point.
//!
//! The host page creates one [`HeroParticles`] per hero canvas, calls
//! [`HeroParticles::frame`] from `requestAnimationFrame`, and forwards
//! resize, `IntersectionObserver` and `visibilitychange` events. If the
//! canvas has no 2D context every method is a no-op.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{FieldConfig, is_mobile_width};
use crate::field::{FrameOutcome, HeroEffect, Viewport};
use crate::render;

#[wasm_bindgen]
pub struct HeroParticles {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    effect: HeroEffect<SmallRng>,
    viewport: Viewport,
    static_painted: bool,
}

#[wasm_bindgen]
impl HeroParticles {
    /// Bind to `canvas`. `now_ms` starts the boot delay and should come from
    /// the same clock later passed to `frame` (`performance.now()`). The
    /// device profile is picked from the width given to `resize`.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, reduced_motion: bool, now_ms: f64, tab_visible: bool) -> Self {
        let ctx = context_2d(&canvas);
        let rng = SmallRng::seed_from_u64((js_sys::Math::random() * f64::from(u32::MAX)) as u64);
        let effect = HeroEffect::new(reduced_motion, FieldConfig::default(), rng, now_ms, tab_visible);
        Self { canvas, ctx, effect, viewport: Viewport::default(), static_painted: false }
    }

    /// Size the backing store to `css * dpr` device pixels.
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        if self.ctx.is_none() {
            return;
        }
        self.viewport = Viewport::new(width_css, height_css, dpr);
        let (width, height) = self.viewport.device_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        if let Some(field) = self.effect.field_mut() {
            field.resize(width_css, height_css, dpr);
            field.use_device_profile(is_mobile_width(width_css));
        }
        // Resizing clears the canvas.
        self.static_painted = false;
    }

    pub fn set_hero_visible(&mut self, visible: bool) {
        if let Some(field) = self.effect.field_mut() {
            field.set_hero_visible(visible);
        }
    }

    pub fn set_tab_visible(&mut self, visible: bool) {
        if let Some(field) = self.effect.field_mut() {
            field.set_tab_visible(visible);
        }
    }

    /// Advance and redraw. Returns `true` when the canvas was repainted.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let Some(ctx) = &self.ctx else {
            return false;
        };

        let drawn = match &mut self.effect {
            HeroEffect::Static => {
                if self.static_painted {
                    return false;
                }
                self.static_painted = true;
                render::draw_static(ctx, self.viewport)
            }
            HeroEffect::Animated(field) => {
                if field.frame(now_ms) == FrameOutcome::Idle {
                    return false;
                }
                render::draw(ctx, field.pool(), field.config(), field.viewport())
            }
        };

        // A context that rejects draw calls disables the effect.
        if drawn.is_err() {
            self.ctx = None;
            return false;
        }
        true
    }

    /// Live particle count, for debugging from the console.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.effect.field().map_or(0, |field| field.pool().active_count())
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let Ok(Some(obj)) = canvas.get_context("2d") else {
        return None;
    };
    obj.dyn_into::<CanvasRenderingContext2d>().ok()
}
