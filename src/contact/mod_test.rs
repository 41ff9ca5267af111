use super::*;

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: Some(name.into()),
        email: Some(email.into()),
        message: Some(message.into()),
        ..ContactRequest::default()
    }
}

#[test]
fn request_parses_type_field() {
    let req: ContactRequest =
        serde_json::from_str(r#"{"name":"Jane","email":"jane@x.com","message":"Hi","type":"Event Highlights"}"#)
            .unwrap();
    assert_eq!(req.project_type.as_deref(), Some("Event Highlights"));
    assert!(req.hp.is_none());
}

#[test]
fn empty_honeypot_is_not_filled() {
    let mut req = request("Jane", "jane@x.com", "Hi");
    req.hp = Some(String::new().into());
    assert!(!req.is_honeypot_filled());
    req.hp = Some("filled".into());
    assert!(req.is_honeypot_filled());
}

#[test]
fn honeypot_follows_truthiness() {
    let parse = |hp: &str| -> ContactRequest { serde_json::from_str(&format!(r#"{{"hp":{hp}}}"#)).unwrap() };
    assert!(parse("1").is_honeypot_filled());
    assert!(parse("true").is_honeypot_filled());
    assert!(parse(r#"{"a":1}"#).is_honeypot_filled());
    assert!(!parse("0").is_honeypot_filled());
    assert!(!parse("false").is_honeypot_filled());
    assert!(!parse("null").is_honeypot_filled());
    assert!(!parse(r#""""#).is_honeypot_filled());
}

#[test]
fn scalar_text_fields_read_as_strings() {
    let req: ContactRequest =
        serde_json::from_str(r#"{"name":42,"email":"a@b.co","message":true,"budget":null}"#).unwrap();
    assert_eq!(req.name.as_deref(), Some("42"));
    assert_eq!(req.message.as_deref(), Some("true"));
    assert!(req.budget.is_none());
    assert!(req.ig.is_none());
}

#[test]
fn valid_request_becomes_submission() {
    let mut req = request("Jane", "jane@x.com", "Hi");
    req.ig = Some("@jane".into());
    req.budget = Some(String::new());
    let sub = ContactSubmission::from_request(req).unwrap();
    assert_eq!(sub.name, "Jane");
    assert_eq!(sub.instagram.as_deref(), Some("@jane"));
    assert!(sub.budget.is_none());
}

#[test]
fn each_missing_required_field_is_rejected() {
    for req in [
        request("", "jane@x.com", "Hi"),
        request("Jane", "", "Hi"),
        request("Jane", "jane@x.com", "   "),
        ContactRequest::default(),
    ] {
        assert!(matches!(ContactSubmission::from_request(req), Err(ContactError::MissingFields)));
    }
}

#[test]
fn email_format_is_not_checked() {
    assert!(ContactSubmission::from_request(request("Jane", "not-an-email", "Hi")).is_ok());
}

#[test]
fn rate_limit_errors_map_to_contact_errors() {
    use crate::rate_limit::RateLimitError;
    use std::time::Duration;

    let limited: ContactError = RateLimitError::Limited { retry_after: Duration::from_secs(5) }.into();
    assert!(matches!(limited, ContactError::RateLimited { .. }));

    let backend: ContactError = RateLimitError::Backend("redis down".into()).into();
    assert!(matches!(backend, ContactError::Internal(msg) if msg == "redis down"));
}
