use super::*;
use crate::utils::mailer::{MailTransport, MockMailTransport};

fn payload(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

fn state_without_mailer() -> Arc<AppState> {
    Arc::new(AppState { mailer: None })
}

fn state_with(mock: MockMailTransport) -> Arc<AppState> {
    Arc::new(AppState {
        mailer: Some(Arc::new(mock) as Arc<dyn MailTransport>),
    })
}

#[tokio::test]
async fn missing_credentials_still_reports_success() {
    let result = submit_contact(
        State(state_without_mailer()),
        Json(payload("Ana", "ana@example.com", "Oi")),
    )
    .await;

    let Json(body) = result.expect("degraded mode must not surface an error");
    assert!(body.success);
    assert_eq!(body.message, MSG_RECEIVED);
}

#[tokio::test]
async fn valid_payload_is_dispatched_with_its_fields() {
    let mut mock = MockMailTransport::new();
    mock.expect_send_contact()
        .withf(|mail| {
            mail.name == "Ana" && mail.email == "ana@example.com" && mail.message == "Oi"
        })
        .times(1)
        .returning(|_| Ok(()));

    let result = submit_contact(
        State(state_with(mock)),
        Json(payload("Ana", "ana@example.com", "Oi")),
    )
    .await;

    let Json(body) = result.expect("dispatch succeeded");
    assert!(body.success);
    assert_eq!(body.message, MSG_RECEIVED);
}

#[tokio::test]
async fn failing_transport_maps_to_500_with_generic_message() {
    let mut mock = MockMailTransport::new();
    mock.expect_send_contact()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("smtp connection refused")));

    let result = submit_contact(
        State(state_with(mock)),
        Json(payload("Ana", "ana@example.com", "Oi")),
    )
    .await;

    let (status, Json(body)) = result.expect_err("dispatch failure must map to an error");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.success);
    assert_eq!(body.message, MSG_FAILED);
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_dispatch() {
    // The mock would panic on any unexpected call, proving no email is
    // attempted for a rejected payload.
    let mock = MockMailTransport::new();

    let result = submit_contact(
        State(state_with(mock)),
        Json(payload("", "x@x.com", "hi")),
    )
    .await;

    let (status, Json(body)) = result.expect_err("empty name must be rejected");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.success);
    assert_eq!(body.message, MSG_INVALID);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let result = submit_contact(
        State(state_without_mailer()),
        Json(payload("Ana", "not-an-email", "Oi")),
    )
    .await;

    let (status, Json(body)) = result.expect_err("malformed email must be rejected");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, MSG_INVALID);
}
