//! Submission pipeline: honeypot → validation → rate limit → delivery.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, warn};

use super::{ContactError, ContactOutcome, ContactRequest, ContactSubmission, DeliveryChannel};
use crate::rate_limit::RateLimit;

pub struct ContactService {
    limiter: Arc<dyn RateLimit>,
    channels: Vec<Arc<dyn DeliveryChannel>>,
}

impl ContactService {
    #[must_use]
    pub fn new(limiter: Arc<dyn RateLimit>, channels: Vec<Arc<dyn DeliveryChannel>>) -> Self {
        Self { limiter, channels }
    }

    #[must_use]
    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// Process one inquiry from `source` (the rate-limit key).
    ///
    /// # Errors
    ///
    /// - [`ContactError::MissingFields`] when name, email, or message is blank.
    /// - [`ContactError::RateLimited`] when `source` submitted within the window.
    /// - [`ContactError::Internal`] when the rate-limit backend fails.
    ///
    /// Channel failures are never returned.
    pub async fn submit(&self, request: ContactRequest, source: &str) -> Result<ContactOutcome, ContactError> {
        if request.is_honeypot_filled() {
            info!(%source, "honeypot tripped; discarding submission");
            return Ok(ContactOutcome::Discarded);
        }

        let submission = ContactSubmission::from_request(request)?;
        self.limiter.check_and_record(source).await?;

        let received_at = OffsetDateTime::now_utc();
        let mut delivered = 0;
        let mut failed = 0;
        for channel in &self.channels {
            match channel.deliver(&submission, received_at).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    failed += 1;
                    tracing::error!(channel = channel.name(), error = %e, "contact delivery failed");
                }
            }
        }

        if self.channels.is_empty() {
            warn!(%source, "no delivery channels configured; submission dropped");
        }
        info!(%source, delivered, failed, "contact submission accepted");
        Ok(ContactOutcome::Accepted { delivered, failed })
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
