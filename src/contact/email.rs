//! Inquiry notification email via Resend.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use time::OffsetDateTime;

use super::{ContactSubmission, DeliveryChannel, DeliveryError};
use crate::config::EmailConfig;

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_email.html");
const NOT_PROVIDED: &str = "N/A";

pub struct EmailNotifier {
    resend: Resend,
    from: String,
    to: Vec<String>,
}

impl EmailNotifier {
    #[must_use]
    pub fn new(config: &EmailConfig) -> Self {
        Self { resend: Resend::new(&config.api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl DeliveryChannel for EmailNotifier {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, submission: &ContactSubmission, _received_at: OffsetDateTime) -> Result<(), DeliveryError> {
        let to: Vec<&str> = self.to.iter().map(String::as_str).collect();
        let subject = render_subject(submission);
        let html = render_contact_template(submission);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| DeliveryError::Email(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn render_subject(submission: &ContactSubmission) -> String {
    format!("New Inquiry from {}", submission.name)
}

#[must_use]
pub fn render_contact_template(submission: &ContactSubmission) -> String {
    let optional = |value: &Option<String>| escape_html(value.as_deref().unwrap_or(NOT_PROVIDED));
    CONTACT_EMAIL_TEMPLATE
        .replace("{{NAME}}", &escape_html(&submission.name))
        .replace("{{EMAIL}}", &escape_html(&submission.email))
        .replace("{{INSTAGRAM}}", &optional(&submission.instagram))
        .replace("{{DATE}}", &optional(&submission.date))
        .replace("{{TYPE}}", &optional(&submission.project_type))
        .replace("{{BUDGET}}", &optional(&submission.budget))
        .replace("{{MESSAGE}}", &escape_html(&submission.message))
}

/// Visitor text is untrusted; it must not inject markup into the inbox.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;
