use super::*;

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn accepts_well_formed_payload() {
    assert_eq!(request("Ana", "ana@example.com", "Oi").validate(), Ok(()));
}

#[test]
fn rejects_empty_name() {
    assert_eq!(
        request("", "ana@example.com", "Oi").validate(),
        Err(ValidationError::EmptyName)
    );
}

#[test]
fn rejects_whitespace_only_name() {
    assert_eq!(
        request("   ", "ana@example.com", "Oi").validate(),
        Err(ValidationError::EmptyName)
    );
}

#[test]
fn rejects_malformed_email() {
    for email in ["", "ana", "ana@", "@example.com", "ana example@com", "ana@example"] {
        assert_eq!(
            request("Ana", email, "Oi").validate(),
            Err(ValidationError::InvalidEmail),
            "expected {email:?} to be rejected"
        );
    }
}

#[test]
fn rejects_empty_message() {
    assert_eq!(
        request("Ana", "ana@example.com", "").validate(),
        Err(ValidationError::EmptyMessage)
    );
}

#[test]
fn missing_json_fields_default_to_empty() {
    let parsed: ContactRequest =
        serde_json::from_str(r#"{"email":"x@x.com"}"#).expect("partial payload should parse");
    assert_eq!(parsed.name, "");
    assert_eq!(parsed.validate(), Err(ValidationError::EmptyName));
}

#[test]
fn name_checked_before_email() {
    // A payload failing several rules reports the first one, matching the
    // order the form presents its fields.
    assert_eq!(
        request("", "not-an-email", "").validate(),
        Err(ValidationError::EmptyName)
    );
}
