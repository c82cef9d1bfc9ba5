pub mod app;
pub mod domains;
pub mod email;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use domains::dispatch::service::DispatchServiceError;
