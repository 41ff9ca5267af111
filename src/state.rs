//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable site catalog and the contact pipeline, whose rate
//! limiter and delivery channels are chosen at startup from config.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::config::Config;
use crate::contact::email::EmailNotifier;
use crate::contact::forms::FormsRelay;
use crate::contact::sheets::{ServiceAccountTokens, SheetAppender};
use crate::contact::{ContactService, DeliveryChannel, DeliveryError};
use crate::content::SiteContent;
use crate::rate_limit::{LastSeenLimiter, RateLimit};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    pub contact: Arc<ContactService>,
}

impl AppState {
    #[must_use]
    pub fn new(content: SiteContent, contact: ContactService) -> Self {
        Self { content: Arc::new(content), contact: Arc::new(contact) }
    }

    /// Wire the catalog, an in-memory limiter, and every configured channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared outbound HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.outbound_timeout_secs))
            .build()?;

        let limiter: Arc<dyn RateLimit> =
            Arc::new(LastSeenLimiter::new(Duration::from_secs(config.rate_limit_window_secs)));
        let contact = ContactService::new(limiter, delivery_channels(config, &http));
        Ok(Self::new(SiteContent::catalog(), contact))
    }
}

/// Build every channel whose configuration is present. A channel with
/// missing or broken configuration is skipped with a warning.
fn delivery_channels(config: &Config, http: &reqwest::Client) -> Vec<Arc<dyn DeliveryChannel>> {
    let mut channels: Vec<Arc<dyn DeliveryChannel>> = Vec::new();

    match &config.email {
        Some(email) => channels.push(Arc::new(EmailNotifier::new(email))),
        None => warn!("RESEND_API_KEY not set: inquiry emails disabled"),
    }

    match &config.sheets {
        Some(sheets) => match ServiceAccountTokens::new(http.clone(), sheets) {
            Ok(tokens) => channels.push(Arc::new(SheetAppender::new(
                http.clone(),
                Arc::new(tokens),
                sheets.spreadsheet_id.clone(),
            ))),
            Err(e) => warn!(error = %e, "Google service account unusable: spreadsheet logging disabled"),
        },
        None => warn!("Google credentials not set: spreadsheet logging disabled"),
    }

    if let Some(forms) = &config.forms {
        channels.push(Arc::new(FormsRelay::new(http.clone(), forms)));
    }

    channels
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with the real catalog, a 60 s limiter, and the given channels.
    #[must_use]
    pub fn test_app_state(channels: Vec<Arc<dyn DeliveryChannel>>) -> AppState {
        let limiter: Arc<dyn RateLimit> = Arc::new(LastSeenLimiter::new(Duration::from_secs(60)));
        AppState::new(SiteContent::catalog(), ContactService::new(limiter, channels))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
