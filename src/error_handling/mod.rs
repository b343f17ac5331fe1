//! Error handling.
//!
//! This module provides:
//! - Error type definitions for invalid inputs, frame fetches and initialization
//! - Categorization of HTTP client errors
//!
//! Missing data is not an error anywhere in this crate: absent fields come back
//! as empty strings, `None` or empty vectors.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ExtractError, FrameError, InitializationError};
