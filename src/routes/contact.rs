//! `POST /api/contact`: inquiry submission.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::contact::{ContactError, ContactOutcome, ContactRequest};
use crate::rate_limit::SourceKey;
use crate::state::AppState;

const MSG_DISCARDED: &str = "Message sent";
const MSG_ACCEPTED: &str = "Message sent successfully";

/// `POST /api/contact`: run the submission pipeline.
pub async fn submit(
    State(state): State<AppState>,
    SourceKey(source): SourceKey,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(%source, error = %rejection, "rejected contact body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match state.contact.submit(request, &source).await {
        Ok(ContactOutcome::Discarded) => success_response(MSG_DISCARDED),
        Ok(ContactOutcome::Accepted { .. }) => success_response(MSG_ACCEPTED),
        Err(e) => {
            let status = contact_error_to_status(&e);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!(error = %e, "error handling contact form");
            }
            error_response(status, contact_error_message(&e))
        }
    }
}

/// Any method other than POST on `/api/contact`.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingFields => StatusCode::BAD_REQUEST,
        ContactError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        ContactError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn contact_error_message(err: &ContactError) -> &'static str {
    match err {
        ContactError::MissingFields => "Missing required fields",
        ContactError::RateLimited { .. } => "Too many requests. Please try again later.",
        ContactError::Internal(_) => "Internal server error",
    }
}

fn success_response(message: &str) -> Response {
    (StatusCode::OK, Json(json!({ "success": true, "message": message }))).into_response()
}

pub(super) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
