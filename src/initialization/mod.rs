//! Shared resource setup.
//!
//! This module provides functions to initialize the resources a calling
//! pipeline shares across documents:
//! - The logger
//! - The HTTP client used for frame fetches

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger, init_logger_with};
