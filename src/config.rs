//! Service configuration parsed from environment variables.
//!
//! Every outbound integration is optional. A channel whose variables are
//! absent is reported as `None` here and skipped at startup with a warning,
//! so a bare `cargo run` still serves the site and accepts submissions.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBSITE_DIR: &str = "website";
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
pub const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_EMAIL_FROM: &str = "Contact Form <onboarding@resend.dev>";
pub const DEFAULT_EMAIL_TO: &str = "hello@ntg.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Resend notification settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub from: String,
    pub to: Vec<String>,
}

/// Google service-account credentials for the inquiry spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetsConfig {
    pub service_account_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
}

/// Google Forms relay target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormsConfig {
    pub action_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub website_dir: PathBuf,
    pub rate_limit_window_secs: u64,
    pub outbound_timeout_secs: u64,
    pub email: Option<EmailConfig>,
    pub sheets: Option<SheetsConfig>,
    pub forms: Option<FormsConfig>,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WEBSITE_DIR`: static site build, default `website`
    /// - `CONTACT_RATE_LIMIT_WINDOW_SECS`: default 60
    /// - `OUTBOUND_TIMEOUT_SECS`: default 15
    /// - `RESEND_API_KEY`, `CONTACT_EMAIL_FROM`, `CONTACT_EMAIL_TO`
    /// - `GOOGLE_SERVICE_ACCOUNT_EMAIL`, `GOOGLE_PRIVATE_KEY`, `GOOGLE_SHEET_ID`
    /// - `GOOGLE_FORM_ACTION_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (tests pass a map).
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let website_dir = get("WEBSITE_DIR").map_or_else(|| PathBuf::from(DEFAULT_WEBSITE_DIR), PathBuf::from);
        let rate_limit_window_secs = parse_or(
            "CONTACT_RATE_LIMIT_WINDOW_SECS",
            get("CONTACT_RATE_LIMIT_WINDOW_SECS"),
            DEFAULT_RATE_LIMIT_WINDOW_SECS,
        )?;
        let outbound_timeout_secs =
            parse_or("OUTBOUND_TIMEOUT_SECS", get("OUTBOUND_TIMEOUT_SECS"), DEFAULT_OUTBOUND_TIMEOUT_SECS)?;

        let email = get("RESEND_API_KEY").map(|api_key| EmailConfig {
            api_key,
            from: get("CONTACT_EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_owned()),
            to: get("CONTACT_EMAIL_TO")
                .map(|raw| split_recipients(&raw))
                .filter(|to| !to.is_empty())
                .unwrap_or_else(|| vec![DEFAULT_EMAIL_TO.to_owned()]),
        });

        let sheets = match (
            get("GOOGLE_SERVICE_ACCOUNT_EMAIL"),
            get("GOOGLE_PRIVATE_KEY"),
            get("GOOGLE_SHEET_ID"),
        ) {
            (Some(service_account_email), Some(raw_key), Some(spreadsheet_id)) => Some(SheetsConfig {
                service_account_email,
                private_key: unescape_private_key(&raw_key),
                spreadsheet_id,
            }),
            _ => None,
        };

        let forms = get("GOOGLE_FORM_ACTION_URL").map(|action_url| FormsConfig { action_url });

        Ok(Self { port, website_dir, rate_limit_window_secs, outbound_timeout_secs, email, sheets, forms })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}

fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Hosting dashboards store PEM keys on one line with literal `\n`.
#[must_use]
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
