use httpmock::prelude::*;
use serde_json::json;
use time::macros::datetime;

use super::*;

struct StaticToken(&'static str);

#[async_trait::async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String, DeliveryError> {
        Ok(self.0.to_owned())
    }
}

struct NoToken;

#[async_trait::async_trait]
impl TokenSource for NoToken {
    async fn access_token(&self) -> Result<String, DeliveryError> {
        Err(DeliveryError::Auth("revoked".into()))
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        instagram: None,
        date: Some("2025-07-04".into()),
        project_type: Some("Photo Session".into()),
        budget: None,
        message: "Hi".into(),
    }
}

fn appender(server: &MockServer, tokens: Arc<dyn TokenSource>) -> SheetAppender {
    SheetAppender::new(reqwest::Client::new(), tokens, "sheet-1").with_api_base(server.base_url())
}

#[test]
fn row_has_eight_columns_in_order() {
    let row = sheet_row(&submission(), datetime!(2025-06-01 12:30:00 UTC));
    assert_eq!(
        row,
        vec![
            "2025-06-01T12:30:00Z",
            "Jane",
            "jane@x.com",
            "",
            "2025-07-04",
            "Photo Session",
            "",
            "Hi"
        ]
    );
}

#[test]
fn claims_target_spreadsheets_scope() {
    let claims = ServiceAccountClaims::new("svc@proj.iam.gserviceaccount.com", GOOGLE_TOKEN_URL, 1_700_000_000);
    assert_eq!(claims.iss, "svc@proj.iam.gserviceaccount.com");
    assert_eq!(claims.scope, SPREADSHEETS_SCOPE);
    assert_eq!(claims.aud, GOOGLE_TOKEN_URL);
    assert_eq!(claims.exp - claims.iat, ASSERTION_LIFETIME_SECS);
}

#[test]
fn invalid_private_key_is_rejected() {
    let config = SheetsConfig {
        service_account_email: "svc@proj.iam.gserviceaccount.com".into(),
        private_key: "not a pem".into(),
        spreadsheet_id: "sheet-1".into(),
    };
    assert!(matches!(
        ServiceAccountTokens::new(reqwest::Client::new(), &config),
        Err(DeliveryError::Auth(_))
    ));
}

#[tokio::test]
async fn deliver_appends_row_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/spreadsheets/sheet-1/values/A:H:append")
                .query_param("valueInputOption", "USER_ENTERED")
                .header("authorization", "Bearer test-token")
                .json_body(json!({
                    "values": [[
                        "2025-06-01T12:30:00Z", "Jane", "jane@x.com", "",
                        "2025-07-04", "Photo Session", "", "Hi"
                    ]]
                }));
            then.status(200).json_body(json!({"updates": {"updatedRows": 1}}));
        })
        .await;

    let sheet = appender(&server, Arc::new(StaticToken("test-token")));
    sheet
        .deliver(&submission(), datetime!(2025-06-01 12:30:00 UTC))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(403).body("PERMISSION_DENIED");
        })
        .await;

    let sheet = appender(&server, Arc::new(StaticToken("test-token")));
    let err = sheet
        .deliver(&submission(), OffsetDateTime::now_utc())
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Status { status: 403, ref body } if body == "PERMISSION_DENIED"));
}

#[tokio::test]
async fn token_failure_skips_the_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200);
        })
        .await;

    let sheet = appender(&server, Arc::new(NoToken));
    assert!(matches!(
        sheet.deliver(&submission(), OffsetDateTime::now_utc()).await,
        Err(DeliveryError::Auth(_))
    ));
    mock.assert_hits_async(0).await;
}

// =========================================================================
// Service-account token exchange
// =========================================================================

const TEST_KEY_PEM: &str = include_str!("testdata/service_account_key.pem");

fn tokens(server: &MockServer) -> ServiceAccountTokens {
    let config = SheetsConfig {
        service_account_email: "svc@proj.iam.gserviceaccount.com".into(),
        private_key: TEST_KEY_PEM.into(),
        spreadsheet_id: "sheet-1".into(),
    };
    ServiceAccountTokens::new(reqwest::Client::new(), &config)
        .unwrap()
        .with_token_url(server.url("/token"))
}

#[tokio::test]
async fn token_is_exchanged_once_and_cached() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/token")
                .body_contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer")
                .body_contains("assertion=");
            then.status(200).json_body(json!({"access_token": "ya29.cached", "expires_in": 3600}));
        })
        .await;

    let tokens = tokens(&server);
    assert_eq!(tokens.access_token().await.unwrap(), "ya29.cached");
    assert_eq!(tokens.access_token().await.unwrap(), "ya29.cached");
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn nearly_expired_token_is_refreshed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/token");
            then.status(200).json_body(json!({"access_token": "ya29.short", "expires_in": 30}));
        })
        .await;

    let tokens = tokens(&server);
    tokens.access_token().await.unwrap();
    tokens.access_token().await.unwrap();
    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn rejected_exchange_is_an_auth_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/token");
            then.status(400).json_body(json!({"error": "invalid_grant"}));
        })
        .await;

    assert!(matches!(tokens(&server).access_token().await, Err(DeliveryError::Auth(_))));
}
