use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub timeout_secs: u64,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      timeout_secs: 30,
    }
  }
}

/// Per-request sender identity. The password is relayed to the provider and
/// nowhere else; `Debug` output never contains it.
#[derive(Clone)]
pub struct SmtpCredentials {
  pub username: String,
  pub password: String,
}

impl SmtpCredentials {
  pub fn new(username: String, password: String) -> Self {
    SmtpCredentials { username, password }
  }
}

impl std::fmt::Debug for SmtpCredentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SmtpCredentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct OutboundEmail {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub text: String,
  pub html: String,
}
