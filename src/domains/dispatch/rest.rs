use axum::{
  extract::{Json, State},
  http::StatusCode,
  response::{IntoResponse, Json as JsonResponse, Response},
  routing::{post, Router},
};
use serde_json::json;

use super::model::{SendEmailRequest, SendEmailResponse};
use super::service::DispatchServiceError;
use crate::state::{AppState, SharedAppState};

pub fn dispatch_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendEmailRequest>,
) -> Result<JsonResponse<SendEmailResponse>, DispatchServiceError> {
  let receipt = state.send_email(payload).await?;

  Ok(JsonResponse(SendEmailResponse {
    success: true,
    message: "Email sent successfully!".to_string(),
    message_id: receipt.message_id,
  }))
}

impl IntoResponse for DispatchServiceError {
  fn into_response(self) -> Response {
    let (status_code, body) = match self {
      DispatchServiceError::DeliveryFailed(details) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
          "success": false,
          "error": "Failed to send email. Please check your email credentials.",
          "details": details,
        }),
      ),
      validation => (
        StatusCode::BAD_REQUEST,
        json!({
          "success": false,
          "error": validation.to_string(),
        }),
      ),
    };

    (status_code, JsonResponse(body)).into_response()
  }
}
