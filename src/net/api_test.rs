#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn lead_payload_uses_intake_field_names() {
    let fields = FormFields {
        plate_number: "12가3456".to_owned(),
        phone: "01012345678".to_owned(),
        region: "서울".to_owned(),
        mileage: "120000".to_owned(),
    };
    let json = serde_json::to_value(LeadPayload::from(&fields)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "carNumber": "12가3456",
            "phone": "01012345678",
            "region": "서울",
            "mileage": "120000",
        })
    );
}

#[test]
fn send_response_parses_minimal_ack() {
    let body: SendResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert!(body.ok);
    assert_eq!(body.error, None);
}

#[test]
fn send_response_missing_ack_counts_as_rejected() {
    let body: SendResponse = serde_json::from_str("{}").unwrap();
    assert!(!body.ok);
}

#[test]
fn resolve_ack_requires_transport_and_body_success() {
    let accepted = SendResponse {
        ok: true,
        error: None,
    };
    assert_eq!(resolve_ack(true, &accepted), Ok(()));
    assert_eq!(
        resolve_ack(false, &accepted),
        Err(MSG_SEND_REJECTED.to_owned())
    );
}

#[test]
fn resolve_ack_prefers_server_message() {
    let body = SendResponse {
        ok: false,
        error: Some("limit reached".to_owned()),
    };
    assert_eq!(resolve_ack(true, &body), Err("limit reached".to_owned()));
}

#[test]
fn resolve_ack_falls_back_to_generic_rejection() {
    let body = SendResponse {
        ok: false,
        error: None,
    };
    assert_eq!(resolve_ack(true, &body), Err(MSG_SEND_REJECTED.to_owned()));
}

#[test]
fn endpoint_is_the_fixed_relative_path() {
    assert_eq!(SEND_ENDPOINT, "/api/send");
}
