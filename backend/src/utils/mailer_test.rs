use super::*;

fn mail() -> ContactEmail {
    ContactEmail {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "Primeira linha\nSegunda linha".to_string(),
    }
}

#[test]
fn plain_body_carries_all_fields() {
    let body = plain_body(&mail());
    assert!(body.contains("Nome: Ana"));
    assert!(body.contains("Email: ana@example.com"));
    assert!(body.contains("Mensagem: Primeira linha\nSegunda linha"));
}

#[test]
fn html_body_converts_newlines_to_breaks() {
    let body = html_body(&mail());
    assert!(body.contains("Primeira linha<br>Segunda linha"));
    assert!(body.contains("Nova Mensagem - Trampay"));
    assert!(body.contains("ana@example.com"));
}

#[tokio::test]
async fn from_env_requires_the_mail_secret() {
    // Both cases in one test; EMAIL_PASS is shared process state.
    std::env::remove_var("EMAIL_PASS");
    assert!(SmtpMailer::from_env().is_none());

    std::env::set_var("EMAIL_PASS", "app-password");
    assert!(SmtpMailer::from_env().is_some());
    std::env::remove_var("EMAIL_PASS");
}
