//! Error categorization for frame fetches.

use super::types::FrameError;

/// Categorizes a `reqwest::Error` into a `FrameError`.
///
/// Status codes are checked first, then the reqwest error kind. Anything not
/// recognized ends up in `FrameError::Other`.
pub fn categorize_reqwest_error(error: reqwest::Error) -> FrameError {
    if let Some(status) = error.status() {
        return FrameError::Status(status.as_u16());
    }

    if error.is_timeout() {
        FrameError::Timeout(error)
    } else if error.is_connect() {
        FrameError::Connect(error)
    } else if error.is_body() || error.is_decode() {
        FrameError::Body(error)
    } else {
        FrameError::Other(error)
    }
}
