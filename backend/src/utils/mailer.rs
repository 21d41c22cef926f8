use async_trait::async_trait;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// Every contact message lands in this inbox.
pub const OPERATOR_ADDRESS: &str = "trampayapp@gmail.com";

#[derive(Clone, Debug)]
pub struct ContactEmail {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send_contact(&self, mail: ContactEmail) -> anyhow::Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Returns `None` when `EMAIL_PASS` is missing, which puts the contact
    /// endpoint into its record-only mode.
    pub fn from_env() -> Option<Self> {
        let pass = std::env::var("EMAIL_PASS").ok()?;
        let user = std::env::var("EMAIL_USER").unwrap_or_else(|_| OPERATOR_ADDRESS.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay("smtp.gmail.com")
            .expect("failed to configure smtp relay")
            .credentials(Credentials::new(user, pass))
            .build();

        Some(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_contact(&self, mail: ContactEmail) -> anyhow::Result<()> {
        let email = Message::builder()
            .from(mail.email.parse()?)
            .to(OPERATOR_ADDRESS.parse()?)
            .subject(format!("Contato via Landing Page - {}", mail.name))
            .multipart(MultiPart::alternative_plain_html(
                plain_body(&mail),
                html_body(&mail),
            ))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

pub(crate) fn plain_body(mail: &ContactEmail) -> String {
    format!(
        "Nome: {}\nEmail: {}\nMensagem: {}\n",
        mail.name, mail.email, mail.message
    )
}

pub(crate) fn html_body(mail: &ContactEmail) -> String {
    format!(
        r#"<div style="font-family: 'Poppins', Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #2C5F7C; padding: 20px; border-radius: 10px 10px 0 0;">
    <h1 style="color: #FDB913; margin: 0; font-size: 24px;">Nova Mensagem - Trampay</h1>
  </div>
  <div style="background-color: #f5f5f5; padding: 20px; border-radius: 0 0 10px 10px;">
    <p style="margin: 0 0 10px;"><strong>Nome:</strong> {name}</p>
    <p style="margin: 0 0 10px;"><strong>Email:</strong> {email}</p>
    <p style="margin: 0 0 10px;"><strong>Mensagem:</strong></p>
    <div style="background-color: white; padding: 15px; border-radius: 5px; border-left: 4px solid #FDB913;">
      {message}
    </div>
  </div>
</div>"#,
        name = mail.name,
        email = mail.email,
        message = mail.message.replace('\n', "<br>"),
    )
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
