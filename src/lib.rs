//! HTTP service for the studio site: content JSON API, contact pipeline,
//! and the built single-page site.
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Environment-driven [`config::Config`] |
//! | [`content`] | Compiled-in catalog and work-grid filtering |
//! | [`contact`] | Submission pipeline and delivery channels |
//! | [`rate_limit`] | Injectable per-source limiter |
//! | [`routes`] | Axum router and handlers |
//! | [`state`] | Shared [`state::AppState`] |

pub mod config;
pub mod contact;
pub mod content;
pub mod rate_limit;
pub mod routes;
pub mod state;
