use crate::email::types::{OutboundEmail, SmtpConfig, SmtpCredentials};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::MultiPart, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
  Tokio1Executor,
};
use std::time::Duration;

/// Boundary to the mail-delivery provider. One call, one delivery attempt;
/// the returned string is the provider's opaque identifier for the accepted
/// message.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, credentials: &SmtpCredentials, email: &OutboundEmail) -> Result<String>;
}

/// Sends through an SMTP relay, authenticating with the credentials supplied
/// for this call. The transport is built per call and dropped with it, so no
/// session ever outlives or is shared across requests.
pub struct SmtpMailer {
  config: SmtpConfig,
}

impl SmtpMailer {
  pub fn new(config: SmtpConfig) -> Self {
    SmtpMailer { config }
  }

  fn transport(&self, credentials: &SmtpCredentials) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    let creds = Credentials::new(credentials.username.clone(), credentials.password.clone());
    let timeout = Some(Duration::from_secs(self.config.timeout_secs));

    let transport = if self.config.host == "localhost" || self.config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
        .credentials(creds)
        .port(self.config.port)
        .timeout(timeout)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
        .credentials(creds)
        .port(self.config.port)
        .timeout(timeout)
        .build()
    };

    Ok(transport)
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, credentials: &SmtpCredentials, email: &OutboundEmail) -> Result<String> {
    let message = Message::builder()
      .from(email.from.parse()?)
      .to(email.to.parse()?)
      .subject(&email.subject)
      .multipart(MultiPart::alternative_plain_html(
        email.text.clone(),
        email.html.clone(),
      ))?;

    // lettre stamps a Message-ID while building; that is what the caller gets
    // back as the provider identifier.
    let message_id = message.headers().get_raw("Message-ID").map(|v| v.to_string());

    let response = self.transport(credentials)?.send(message).await?;

    Ok(message_id.unwrap_or_else(|| response.message().collect::<Vec<_>>().join(" ")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::env;

  fn test_credentials() -> SmtpCredentials {
    SmtpCredentials::new("sender@example.com".to_string(), "app-password".to_string())
  }

  #[tokio::test]
  async fn builds_transport_for_localhost() -> Result<()> {
    let mailer = SmtpMailer::new(SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      timeout_secs: 5,
    });

    mailer.transport(&test_credentials())?;
    Ok(())
  }

  #[tokio::test]
  async fn builds_transport_for_remote_relay() -> Result<()> {
    let mailer = SmtpMailer::new(SmtpConfig::default());

    mailer.transport(&test_credentials())?;
    Ok(())
  }

  #[tokio::test]
  async fn rejects_unparseable_from_address_before_connecting() {
    let mailer = SmtpMailer::new(SmtpConfig::default());
    let email = OutboundEmail {
      from: "<unterminated".to_string(),
      to: "to@example.com".to_string(),
      subject: "Hi".to_string(),
      text: "body".to_string(),
      html: "<p>body</p>".to_string(),
    };

    let result = mailer.send(&test_credentials(), &email).await;
    assert!(result.is_err());
  }

  #[tokio::test]
  #[ignore]
  async fn test_send_real_email() -> Result<()> {
    dotenvy::dotenv().ok();

    let mailer = SmtpMailer::new(SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT").unwrap_or_else(|_| "587".to_string()).parse()?,
      timeout_secs: 30,
    });

    let credentials = SmtpCredentials::new(
      env::var("TEST_SMTP_USERNAME").expect("TEST_SMTP_USERNAME environment variable must be set."),
      env::var("TEST_SMTP_PASSWORD").expect("TEST_SMTP_PASSWORD environment variable must be set."),
    );

    let email = OutboundEmail {
      from: credentials.username.clone(),
      to: credentials.username.clone(),
      subject: "Test Subject".to_string(),
      text: "Test Body".to_string(),
      html: crate::email::template::render_html_body("Test Subject", "Test Body"),
    };

    let message_id = mailer.send(&credentials, &email).await?;
    assert!(!message_id.is_empty());

    Ok(())
  }
}
