//! Utility modules for common functionality.
//!
//! - `http`: Retryable HTTP client construction
//! - `logging`: Structured logging setup

mod http;
mod logging;

pub use http::{create_retryable_http_client, HttpRetryConfig};
pub use logging::{setup_logging, setup_logging_with_writer};
