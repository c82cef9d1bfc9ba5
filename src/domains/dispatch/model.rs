use serde::{Deserialize, Serialize};

/// Incoming send request. Absent fields deserialize to empty strings so that
/// a missing field and an empty one get the same validation answer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SendEmailRequest {
  pub from: String,
  pub password: String,
  pub to: String,
  pub subject: String,
  pub message: String,
}

/// Success payload for the send endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailResponse {
  pub success: bool,
  pub message: String,
  #[serde(rename = "messageId")]
  pub message_id: String,
}

/// What the dispatch pipeline hands back on success: the provider's opaque
/// identifier for the accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
  pub message_id: String,
}
