//! Error type definitions.
//!
//! This module defines the error types used throughout the crate. Missing
//! data (no email, no zip, unknown country) is never an error; these types
//! cover programmer errors at the call boundary and I/O failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors raised when extraction inputs violate their invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// A token span whose start lies after its end.
    #[error("Invalid token span: start {start} is greater than end {end}")]
    InvertedSpan {
        /// Span start
        start: usize,
        /// Span end
        end: usize,
    },

    /// A token span reaching past the end of the token array.
    #[error("Token span [{start}, {end}) exceeds token count {len}")]
    SpanOutOfBounds {
        /// Span start
        start: usize,
        /// Span end
        end: usize,
        /// Number of tokens
        len: usize,
    },

    /// A candidate probability outside `[0, 1]` (or NaN).
    #[error("Probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Errors raised while fetching a frame's referenced document.
#[derive(Error, Debug)]
pub enum FrameError {
    /// The frame source could not be turned into an absolute URL.
    #[error("Invalid frame source '{source_attr}': {reason}")]
    InvalidSource {
        /// Raw `src` attribute
        source_attr: String,
        /// Why resolution failed
        reason: String,
    },

    /// The request timed out.
    #[error("Frame fetch timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// The connection could not be established.
    #[error("Frame fetch connection error: {0}")]
    Connect(#[source] ReqwestError),

    /// The server answered with a non-success status code.
    #[error("Frame fetch returned HTTP {0}")]
    Status(u16),

    /// The response body could not be read or decoded.
    #[error("Frame fetch body error: {0}")]
    Body(#[source] ReqwestError),

    /// Any other HTTP client failure.
    #[error("Frame fetch failed: {0}")]
    Other(#[source] ReqwestError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured frame base URL does not parse.
    #[error("Invalid frame base URL: {0}")]
    BaseUrlError(#[from] url::ParseError),
}
