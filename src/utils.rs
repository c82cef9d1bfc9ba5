use std::sync::Arc;
use std::time::Duration;

use regex::Regex;

use crate::domains::dispatch::service::{DispatchService, DispatchServiceImpl};
use crate::email::{SmtpConfig, SmtpMailer};

/// Permissive mailbox-shape check: non-whitespace local part, "@", then a
/// non-whitespace domain containing at least one ".". Looser than RFC 5322;
/// the provider has the final say on deliverability.
pub fn mailbox_shape(address: &str) -> bool {
  let address_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
  address_regex.is_match(address)
}

pub fn smtp_config_from_env() -> SmtpConfig {
  use std::env;

  SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
    port: env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .unwrap_or(587),
    timeout_secs: env::var("SMTP_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .unwrap_or(30),
  }
}

pub fn init_dispatch_service() -> Arc<dyn DispatchService> {
  let smtp_config = smtp_config_from_env();
  let delivery_timeout = Duration::from_secs(smtp_config.timeout_secs);

  Arc::new(DispatchServiceImpl::new(SmtpMailer::new(smtp_config), delivery_timeout))
}
