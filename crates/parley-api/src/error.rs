//! API error taxonomy.

use thiserror::Error;

/// Errors produced by [`crate::ApiClient`] calls.
///
/// Transport failures, decode failures, and non-2xx responses all collapse
/// into this one type; the terminal client renders the `Display` output
/// inline and never treats any of them as fatal.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout, or body-decode failure from the HTTP layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Raw response body, usually the backend's `{"error": ...}` JSON.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_formats_code_and_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: r#"{"error":"Password Verification Failed"}"#.to_owned(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("Password Verification Failed"));
    }
}
