//! Outbound email functionality
//!
//! This module provides the provider boundary for sending mail using lettre,
//! a popular email library for Rust, plus the HTML rendition of outgoing
//! messages.

mod service;
pub mod template;
mod types;

pub use service::{Mailer, SmtpMailer};
pub use types::{OutboundEmail, SmtpConfig, SmtpCredentials};
