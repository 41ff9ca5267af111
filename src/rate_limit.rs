//! Per-source rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`RateLimit`] trait, never on a concrete store, so
//! a multi-instance deployment can swap in a shared backend. The bundled
//! [`LastSeenLimiter`] keeps `key -> last accepted Instant` in process
//! memory: at most one accepted submission per key per window.
//!
//! TRADE-OFFS
//! ==========
//! State is lost on restart and not shared across instances. Acceptable for
//! a low-traffic inquiry form; the trait seam exists for when it is not.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Prune stale keys once the map holds this many entries.
const PRUNE_THRESHOLD: usize = 1024;

const FORWARDED_FOR: &str = "x-forwarded-for";
const UNKNOWN_SOURCE: &str = "unknown";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit exceeded (retry after {}s)", retry_after.as_secs())]
    Limited { retry_after: Duration },
    #[error("rate limit backend failed: {0}")]
    Backend(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Capability injected into the contact pipeline.
#[async_trait::async_trait]
pub trait RateLimit: Send + Sync {
    /// Admit one submission for `key`, recording it on success.
    ///
    /// # Errors
    ///
    /// [`RateLimitError::Limited`] when the key submitted within the window;
    /// [`RateLimitError::Backend`] when the store itself fails.
    async fn check_and_record(&self, key: &str) -> Result<(), RateLimitError>;
}

// =============================================================================
// IN-MEMORY LIMITER
// =============================================================================

pub struct LastSeenLimiter {
    window: Duration,
    last_seen: Mutex<HashMap<String, Instant>>,
}

impl LastSeenLimiter {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, last_seen: Mutex::new(HashMap::new()) }
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut last_seen = self
            .last_seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(&previous) = last_seen.get(key) {
            let elapsed = now.saturating_duration_since(previous);
            if elapsed < self.window {
                return Err(RateLimitError::Limited { retry_after: self.window - elapsed });
            }
        }

        if last_seen.len() >= PRUNE_THRESHOLD {
            let window = self.window;
            last_seen.retain(|_, seen| now.saturating_duration_since(*seen) < window);
        }
        last_seen.insert(key.to_owned(), now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.last_seen
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

#[async_trait::async_trait]
impl RateLimit for LastSeenLimiter {
    async fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(key, Instant::now())
    }
}

// =============================================================================
// SOURCE KEY EXTRACTOR
// =============================================================================

/// Rate-limit key for the calling client: first `X-Forwarded-For` hop, else
/// the peer address, else `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey(pub String);

impl<S> FromRequestParts<S> for SourceKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(Self(source_key(&parts.headers, peer)))
    }
}

#[must_use]
pub fn source_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    match (forwarded, peer) {
        (Some(hop), _) => hop.to_owned(),
        (None, Some(addr)) => addr.ip().to_string(),
        (None, None) => UNKNOWN_SOURCE.to_owned(),
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
