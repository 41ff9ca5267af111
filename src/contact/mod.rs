//! Contact inquiries: validation, spam defense, and best-effort delivery.
//!
//! DESIGN
//! ======
//! [`ContactService`] runs one submission through honeypot, validation, and
//! rate limiting, then hands it to every configured [`DeliveryChannel`].
//! Channels are independent: a failing channel is logged and skipped, and
//! the caller sees success as long as the submission itself was admitted.
//! The response never reveals which channels delivered.

pub mod email;
pub mod forms;
pub mod pipeline;
pub mod sheets;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use time::OffsetDateTime;

pub use pipeline::ContactService;

// =============================================================================
// WIRE TYPES
// =============================================================================

/// `POST /api/contact` body. Every field is optional on the wire; required
/// fields are enforced by [`ContactSubmission::from_request`]. Text fields
/// accept any JSON scalar, so `"name": 42` reads as `"42"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ig: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    /// Honeypot. Hidden from humans; bots fill it with anything.
    #[serde(default)]
    pub hp: Option<Value>,
}

impl ContactRequest {
    /// Any truthy honeypot value: a non-empty string, a non-zero number,
    /// `true`, or any array or object.
    #[must_use]
    pub fn is_honeypot_filled(&self) -> bool {
        match &self.hp {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// A submission that passed validation. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub instagram: Option<String>,
    pub date: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Validate presence of name, email, and message. No format checks.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] when any required field is absent or blank.
    pub fn from_request(request: ContactRequest) -> Result<Self, ContactError> {
        let (Some(name), Some(email), Some(message)) =
            (present(request.name), present(request.email), present(request.message))
        else {
            return Err(ContactError::MissingFields);
        };
        Ok(Self {
            name,
            email,
            instagram: present(request.ig),
            date: present(request.date),
            project_type: present(request.project_type),
            budget: present(request.budget),
            message,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// What happened to an admitted or discarded submission. Internal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Honeypot tripped: reported as success, nothing delivered.
    Discarded,
    Accepted { delivered: usize, failed: usize },
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("missing required fields")]
    MissingFields,
    #[error("too many requests (retry after {}s)", retry_after.as_secs())]
    RateLimited { retry_after: std::time::Duration },
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<crate::rate_limit::RateLimitError> for ContactError {
    fn from(err: crate::rate_limit::RateLimitError) -> Self {
        use crate::rate_limit::RateLimitError;
        match err {
            RateLimitError::Limited { retry_after } => Self::RateLimited { retry_after },
            RateLimitError::Backend(msg) => Self::Internal(msg),
        }
    }
}

/// Failure of a single outbound channel. Logged, never surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Request(String),
    #[error("upstream responded with status {status}")]
    Status { status: u16, body: String },
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("email delivery failed: {0}")]
    Email(String),
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

// =============================================================================
// CHANNEL TRAIT
// =============================================================================

/// One best-effort destination for admitted submissions. Enables mocking in tests.
#[async_trait::async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] describing the failed hop.
    async fn deliver(&self, submission: &ContactSubmission, received_at: OffsetDateTime) -> Result<(), DeliveryError>;
}

/// Check a non-2xx response into a [`DeliveryError::Status`].
pub(crate) async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DeliveryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DeliveryError::Status { status: status.as_u16(), body })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
