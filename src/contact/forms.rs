//! Google Forms relay: the no-backend delivery mode.
//!
//! Fields are posted form-encoded under provider-assigned entry ids. The
//! form endpoint answers opaquely, so only transport failures are errors.

use time::OffsetDateTime;

use super::{ContactSubmission, DeliveryChannel, DeliveryError};
use crate::config::FormsConfig;

/// Provider entry ids for each form question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormEntryIds {
    pub name: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
    pub project_type: &'static str,
    pub budget: &'static str,
    pub message: &'static str,
    pub date_year: &'static str,
    pub date_month: &'static str,
    pub date_day: &'static str,
}

impl Default for FormEntryIds {
    fn default() -> Self {
        Self {
            name: "entry.899649035",
            email: "entry.1436265529",
            instagram: "entry.2072878158",
            project_type: "entry.1919973654",
            budget: "entry.1649371035",
            message: "entry.2056025095",
            date_year: "entry.1144187709_year",
            date_month: "entry.1144187709_month",
            date_day: "entry.1144187709_day",
        }
    }
}

pub struct FormsRelay {
    http: reqwest::Client,
    action_url: String,
    entries: FormEntryIds,
}

impl FormsRelay {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &FormsConfig) -> Self {
        Self { http, action_url: config.action_url.clone(), entries: FormEntryIds::default() }
    }
}

#[async_trait::async_trait]
impl DeliveryChannel for FormsRelay {
    fn name(&self) -> &'static str {
        "forms"
    }

    async fn deliver(&self, submission: &ContactSubmission, _received_at: OffsetDateTime) -> Result<(), DeliveryError> {
        let fields = form_fields(submission, &self.entries);
        self.http
            .post(&self.action_url)
            .form(&fields)
            .send()
            .await?;
        Ok(())
    }
}

/// Encode a submission as `(entry id, value)` pairs.
#[must_use]
pub fn form_fields(submission: &ContactSubmission, ids: &FormEntryIds) -> Vec<(&'static str, String)> {
    let mut fields = vec![(ids.name, submission.name.clone()), (ids.email, submission.email.clone())];

    for (id, value) in [
        (ids.instagram, &submission.instagram),
        (ids.project_type, &submission.project_type),
        (ids.budget, &submission.budget),
    ] {
        if let Some(value) = value {
            fields.push((id, value.clone()));
        }
    }

    fields.push((ids.message, submission.message.clone()));

    if let Some((year, month, day)) = submission.date.as_deref().and_then(split_date) {
        fields.push((ids.date_year, year.to_owned()));
        fields.push((ids.date_month, month.to_owned()));
        fields.push((ids.date_day, day.to_owned()));
    }
    fields
}

/// Split an ISO `YYYY-MM-DD` date into its components.
#[must_use]
pub fn split_date(date: &str) -> Option<(&str, &str, &str)> {
    let mut parts = date.trim().splitn(3, '-');
    let year = parts.next().filter(|p| !p.is_empty())?;
    let month = parts.next().filter(|p| !p.is_empty())?;
    let day = parts.next().filter(|p| !p.is_empty())?;
    Some((year, month, day))
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
