use tokio::signal;

use dotenvy::dotenv;

use email_sender_api::app::create_app;
use email_sender_api::state::SharedAppState;
use email_sender_api::utils::init_dispatch_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let dispatch_service = init_dispatch_service();
  let app_state = SharedAppState::new(dispatch_service);
  let app = create_app(app_state);

  let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
  let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

  println!("Server is running on http://localhost:{}", port);
  println!("Email service ready - credentials will be provided per request");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
