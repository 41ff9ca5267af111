//! Ambient particle field for the hero section of the site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! fixed-capacity pool of glowing particles, spawns them on a timer, and
//! draws them behind the hero copy. The host JavaScript layer only wires
//! `requestAnimationFrame`, resize, intersection and page-visibility events
//! to [`host::HeroParticles`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | `#[wasm_bindgen]` entry point bound to a canvas element |
//! | [`field`] | Testable per-frame driver [`field::ParticleField`] and [`field::HeroEffect`] |
//! | [`pool`] | Fixed-capacity particle pool and per-frame decay |
//! | [`spawner`] | Time-gated ambient spawn policy |
//! | [`gate`] | Boot / hero-visible / tab-visible suspension flags |
//! | [`config`] | Tunable [`config::FieldConfig`] |
//! | [`render`] | Canvas drawing and style-string helpers |
//! | [`consts`] | Default tuning constants |

pub mod config;
pub mod consts;
pub mod field;
pub mod gate;
pub mod host;
pub mod pool;
pub mod render;
pub mod spawner;
