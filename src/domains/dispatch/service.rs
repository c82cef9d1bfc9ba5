use async_trait::async_trait;
use std::error::Error;
use std::time::Duration;

use super::model::{DispatchReceipt, SendEmailRequest};
use crate::email::{template, Mailer, OutboundEmail, SmtpCredentials};
use crate::utils::mailbox_shape;

#[derive(Debug)]
pub enum DispatchServiceError {
  MissingFields,
  InvalidSenderAddress,
  InvalidRecipientAddress,
  DeliveryFailed(String),
}

impl Error for DispatchServiceError {}

impl std::fmt::Display for DispatchServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DispatchServiceError::MissingFields => {
        write!(f, "Please provide sender email, password, recipient email, subject, and message")
      }
      DispatchServiceError::InvalidSenderAddress => write!(f, "Please provide a valid sender email address"),
      DispatchServiceError::InvalidRecipientAddress => write!(f, "Please provide a valid recipient email address"),
      DispatchServiceError::DeliveryFailed(details) => write!(f, "Failed to send email: {}", details),
    }
  }
}

#[async_trait]
pub trait DispatchService: Send + Sync {
  async fn send_email(&self, request: SendEmailRequest) -> Result<DispatchReceipt, DispatchServiceError>;
}

pub struct DispatchServiceImpl<M> {
  mailer: M,
  delivery_timeout: Duration,
}

impl<M> DispatchServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, delivery_timeout: Duration) -> Self {
    Self {
      mailer,
      delivery_timeout,
    }
  }
}

#[async_trait]
impl<M> DispatchService for DispatchServiceImpl<M>
where
  M: Mailer,
{
  async fn send_email(&self, request: SendEmailRequest) -> Result<DispatchReceipt, DispatchServiceError> {
    if request.from.is_empty()
      || request.password.is_empty()
      || request.to.is_empty()
      || request.subject.is_empty()
      || request.message.is_empty()
    {
      return Err(DispatchServiceError::MissingFields);
    }

    // Sender first: when both addresses are malformed, the sender error wins.
    if !mailbox_shape(&request.from) {
      return Err(DispatchServiceError::InvalidSenderAddress);
    }
    if !mailbox_shape(&request.to) {
      return Err(DispatchServiceError::InvalidRecipientAddress);
    }

    let email = OutboundEmail {
      from: request.from.clone(),
      to: request.to.clone(),
      subject: request.subject.clone(),
      text: request.message.clone(),
      html: template::render_html_body(&request.subject, &request.message),
    };
    let credentials = SmtpCredentials::new(request.from.clone(), request.password.clone());

    match tokio::time::timeout(self.delivery_timeout, self.mailer.send(&credentials, &email)).await {
      Ok(Ok(message_id)) => {
        tracing::info!("Email sent successfully: {}", message_id);
        Ok(DispatchReceipt { message_id })
      }
      Ok(Err(e)) => {
        tracing::error!("Error sending email: {}", e);
        Err(DispatchServiceError::DeliveryFailed(e.to_string()))
      }
      Err(_) => {
        let details = format!(
          "provider did not respond within {}s",
          self.delivery_timeout.as_secs()
        );
        tracing::error!("Error sending email: {}", details);
        Err(DispatchServiceError::DeliveryFailed(details))
      }
    }
  }
}
