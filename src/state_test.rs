use std::path::PathBuf;

use super::*;
use crate::config::{EmailConfig, FormsConfig, SheetsConfig};

fn bare_config() -> Config {
    Config {
        port: 3000,
        website_dir: PathBuf::from("website"),
        rate_limit_window_secs: 60,
        outbound_timeout_secs: 5,
        email: None,
        sheets: None,
        forms: None,
    }
}

#[tokio::test]
async fn bare_config_has_no_channels() {
    let state = AppState::from_config(&bare_config()).unwrap();
    assert!(state.contact.channel_names().is_empty());
    assert!(!state.content.work.is_empty());
}

#[tokio::test]
async fn configured_channels_are_registered_in_order() {
    let mut config = bare_config();
    config.email = Some(EmailConfig { api_key: "re_test".into(), from: "a@b.c".into(), to: vec!["d@e.f".into()] });
    config.forms = Some(FormsConfig { action_url: "https://docs.google.com/forms/d/e/x/formResponse".into() });

    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.contact.channel_names(), vec!["email", "forms"]);
}

#[tokio::test]
async fn broken_service_account_key_skips_sheets() {
    let mut config = bare_config();
    config.sheets = Some(SheetsConfig {
        service_account_email: "svc@proj.iam.gserviceaccount.com".into(),
        private_key: "garbage".into(),
        spreadsheet_id: "sheet-1".into(),
    });

    let state = AppState::from_config(&config).unwrap();
    assert!(state.contact.channel_names().is_empty());
}

#[test]
fn test_helper_state_shares_catalog() {
    let state = test_helpers::test_app_state(Vec::new());
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.content, &clone.content));
}
