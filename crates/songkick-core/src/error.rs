//! Error types for the Songkick integration
//!
//! A single error enum covers classified upstream failures (auth / API),
//! the search "no results" signal, and transport problems. Serializes to
//! its display string so callers can forward it across JSON boundaries.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all Songkick integration operations
#[derive(Error, Debug)]
pub enum SongkickError {
    /// Upstream rejected the session (HTTP 401)
    #[error("{message}")]
    Auth {
        integration: String,
        message: String,
        status: u16,
        code: String,
    },

    /// Any other classified upstream failure
    #[error("{integration}: {message}")]
    Api {
        integration: String,
        message: String,
        status: u16,
        code: String,
    },

    /// Location search returned the "no results" page
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// HTML endpoint answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to parse HTML content or build a request
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Caller supplied an unusable argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SongkickError {
    /// Status code reported to whoever called the integration
    ///
    /// For classified errors this is the *reported* status, so an upstream
    /// 500 surfaces as 501.
    pub fn status(&self) -> u16 {
        match self {
            SongkickError::Auth { status, .. } | SongkickError::Api { status, .. } => *status,
            SongkickError::NotFound(_) => 404,
            SongkickError::HttpStatus { status, .. } => *status,
            SongkickError::HttpError(e) => e.status().map(|s| s.as_u16()).unwrap_or(502),
            SongkickError::ParseError(_) => 500,
            SongkickError::InvalidInput(_) => 400,
        }
    }

    /// Whether this error means the session cookie is no longer accepted
    pub fn is_auth(&self) -> bool {
        matches!(self, SongkickError::Auth { .. })
    }
}

impl Serialize for SongkickError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Songkick operations
pub type Result<T> = std::result::Result<T, SongkickError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(message: &str, status: u16) -> SongkickError {
        SongkickError::Api {
            integration: "songkick".to_string(),
            message: message.to_string(),
            status,
            code: status.to_string(),
        }
    }

    #[test]
    fn test_error_display_api() {
        let error = api("Bad request: missing id", 400);
        assert_eq!(error.to_string(), "songkick: Bad request: missing id");
    }

    #[test]
    fn test_error_display_auth() {
        let error = SongkickError::Auth {
            integration: "songkick".to_string(),
            message: "songkick: Session expired".to_string(),
            status: 401,
            code: "401".to_string(),
        };
        assert_eq!(error.to_string(), "songkick: Session expired");
        assert!(error.is_auth());
    }

    #[test]
    fn test_error_display_not_found() {
        let error = SongkickError::NotFound("No results found for atlantis".to_string());
        assert_eq!(error.to_string(), "Not found: No results found for atlantis");
    }

    #[test]
    fn test_error_display_http_status() {
        let error = SongkickError::HttpStatus {
            status: 503,
            url: "https://www.songkick.com/concerts/1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 503 for https://www.songkick.com/concerts/1"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(api("x", 501).status(), 501);
        assert_eq!(SongkickError::NotFound("x".into()).status(), 404);
        assert_eq!(SongkickError::InvalidInput("x".into()).status(), 400);
        assert_eq!(SongkickError::ParseError("x".into()).status(), 500);
        assert!(!api("x", 400).is_auth());
    }

    #[test]
    fn test_error_serialize() {
        let error = SongkickError::InvalidInput("empty query".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Invalid input: empty query\"");
    }
}
