use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::dispatch::service::DispatchServiceImpl,
  email::{Mailer, OutboundEmail, SmtpCredentials},
  state::SharedAppState,
};

/// Stub provider that accepts every message and echoes a fixed id.
pub struct EchoMailer {
  message_id: String,
}

impl EchoMailer {
  pub fn new(message_id: &str) -> Self {
    EchoMailer {
      message_id: message_id.to_string(),
    }
  }
}

#[async_trait]
impl Mailer for EchoMailer {
  async fn send(&self, _credentials: &SmtpCredentials, _email: &OutboundEmail) -> anyhow::Result<String> {
    Ok(self.message_id.clone())
  }
}

/// Stub provider that rejects every message with a fixed diagnostic.
pub struct FailingMailer {
  details: String,
}

impl FailingMailer {
  pub fn new(details: &str) -> Self {
    FailingMailer {
      details: details.to_string(),
    }
  }
}

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, _credentials: &SmtpCredentials, _email: &OutboundEmail) -> anyhow::Result<String> {
    Err(anyhow::anyhow!("{}", self.details))
  }
}

pub fn app_with_mailer(mailer: impl Mailer + 'static) -> Router {
  let service = Arc::new(DispatchServiceImpl::new(mailer, Duration::from_secs(5)));
  let state = SharedAppState::new(service);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
