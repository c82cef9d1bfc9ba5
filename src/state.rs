use std::sync::Arc;

use crate::domains::dispatch::{
  model::{DispatchReceipt, SendEmailRequest},
  service::{DispatchService, DispatchServiceError},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(
    &self,
    request: SendEmailRequest,
  ) -> impl std::future::Future<Output = Result<DispatchReceipt, DispatchServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub dispatch_service: Arc<dyn DispatchService>,
}

impl SharedAppState {
  pub fn new(dispatch_service: Arc<dyn DispatchService>) -> Self {
    Self { dispatch_service }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, request: SendEmailRequest) -> Result<DispatchReceipt, DispatchServiceError> {
    self.dispatch_service.send_email(request).await
  }
}
