//! Inquiry spreadsheet: one appended row per admitted submission.
//!
//! DESIGN
//! ======
//! Two pieces behind the channel: a [`TokenSource`] that yields a bearer
//! token, and [`SheetAppender`] that posts the row to the Sheets v4
//! `values:append` endpoint. Production tokens come from a Google service
//! account (RS256 JWT exchanged at the OAuth endpoint, cached until shortly
//! before expiry); tests plug in a fixed token.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;

use super::{ContactSubmission, DeliveryChannel, DeliveryError, ensure_success};
use crate::config::SheetsConfig;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const APPEND_RANGE: &str = "A:H";
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

// =============================================================================
// TOKENS
// =============================================================================

#[async_trait::async_trait]
pub trait TokenSource: Send + Sync {
    /// Return a bearer token valid for the Sheets API.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Auth`] when no token can be obtained.
    async fn access_token(&self) -> Result<String, DeliveryError>;
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ServiceAccountClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl ServiceAccountClaims {
    #[must_use]
    pub fn new(client_email: &str, token_url: &str, issued_at: i64) -> Self {
        Self {
            iss: client_email.to_owned(),
            scope: SPREADSHEETS_SCOPE.to_owned(),
            aud: token_url.to_owned(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

struct CachedToken {
    value: String,
    expires_at: i64,
}

/// Service-account token exchange with an in-process cache.
pub struct ServiceAccountTokens {
    http: reqwest::Client,
    client_email: String,
    key: EncodingKey,
    token_url: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokens {
    /// # Errors
    ///
    /// Returns [`DeliveryError::Auth`] if the private key is not a valid RSA PEM.
    pub fn new(http: reqwest::Client, config: &SheetsConfig) -> Result<Self, DeliveryError> {
        let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
            .map_err(|e| DeliveryError::Auth(format!("invalid service account key: {e}")))?;
        Ok(Self {
            http,
            client_email: config.service_account_email.clone(),
            key,
            token_url: GOOGLE_TOKEN_URL.to_owned(),
            cached: Mutex::new(None),
        })
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    async fn exchange(&self, now: i64) -> Result<CachedToken, DeliveryError> {
        let claims = ServiceAccountClaims::new(&self.client_email, &self.token_url, now);
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|e| DeliveryError::Auth(format!("jwt signing failed: {e}")))?;

        let response = self
            .http
            .post(&self.token_url)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let token: TokenResponse = ensure_success(response)
            .await
            .map_err(|e| DeliveryError::Auth(e.to_string()))?
            .json()
            .await?;

        Ok(CachedToken {
            value: token.access_token,
            expires_at: now + token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS),
        })
    }
}

#[async_trait::async_trait]
impl TokenSource for ServiceAccountTokens {
    async fn access_token(&self) -> Result<String, DeliveryError> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref()
            && token.expires_at - TOKEN_REFRESH_MARGIN_SECS > now
        {
            return Ok(token.value.clone());
        }

        let fresh = self.exchange(now).await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }
}

// =============================================================================
// APPENDER
// =============================================================================

pub struct SheetAppender {
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
    spreadsheet_id: String,
    api_base: String,
}

impl SheetAppender {
    #[must_use]
    pub fn new(http: reqwest::Client, tokens: Arc<dyn TokenSource>, spreadsheet_id: impl Into<String>) -> Self {
        Self { http, tokens, spreadsheet_id: spreadsheet_id.into(), api_base: SHEETS_API_BASE.to_owned() }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_owned();
        self
    }

    fn append_url(&self) -> String {
        format!("{}/spreadsheets/{}/values/{APPEND_RANGE}:append", self.api_base, self.spreadsheet_id)
    }
}

#[derive(Serialize)]
struct AppendBody {
    values: Vec<Vec<String>>,
}

#[async_trait::async_trait]
impl DeliveryChannel for SheetAppender {
    fn name(&self) -> &'static str {
        "sheets"
    }

    async fn deliver(&self, submission: &ContactSubmission, received_at: OffsetDateTime) -> Result<(), DeliveryError> {
        let token = self.tokens.access_token().await?;
        let body = AppendBody { values: vec![sheet_row(submission, received_at)] };

        let response = self
            .http
            .post(self.append_url())
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// `[timestamp, name, email, instagram, date, type, budget, message]`
#[must_use]
pub fn sheet_row(submission: &ContactSubmission, received_at: OffsetDateTime) -> Vec<String> {
    let timestamp = received_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| received_at.unix_timestamp().to_string());
    let or_blank = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        timestamp,
        submission.name.clone(),
        submission.email.clone(),
        or_blank(&submission.instagram),
        or_blank(&submission.date),
        or_blank(&submission.project_type),
        or_blank(&submission.budget),
        submission.message.clone(),
    ]
}

#[cfg(test)]
#[path = "sheets_test.rs"]
mod tests;
