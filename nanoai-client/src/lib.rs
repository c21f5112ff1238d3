pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use client::NanoAiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use models::{ApiResponse, ConnectionStatus, Payload};
