//! Error types for image editing sessions.

use std::time::Duration;

/// Message shown when an error carries no usable description.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Maximum length of a provider error message kept for display.
const MAX_ERROR_MESSAGE_LEN: usize = 500;

/// Errors that can occur while preparing or running an edit.
#[derive(Debug, thiserror::Error)]
pub enum GenEditError {
    /// Submission attempted without a selected image.
    #[error("Please upload an image first.")]
    MissingImage,

    /// Submission attempted with a blank prompt.
    #[error("Please enter a prompt.")]
    EmptyPrompt,

    /// Submission attempted while another one is still running.
    #[error("A request is already in progress.")]
    Busy,

    /// The service answered, but no part carried inline image data.
    #[error("The model did not return an image. Please try a different prompt.")]
    NoImage,

    /// API key missing or invalid.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    /// Content was blocked by safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// Invalid request parameters (unknown model, bad media type, ...).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The response was well-formed JSON but not shaped as expected.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The selected image could not be turned into a base64 payload.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (reading the selected image, saving a result).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure without any further detail.
    #[error("{}", UNKNOWN_ERROR_MESSAGE)]
    Unknown,
}

impl GenEditError {
    /// Returns true for errors raised before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingImage | Self::EmptyPrompt | Self::Busy)
    }

    /// Returns true for errors raised while reading or encoding the image.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Decode(_))
    }

    /// Returns the single line shown to the user in the result area.
    ///
    /// Variants whose detail is blank fall back to their bare label, so the
    /// message never ends in a dangling separator.
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited {
                retry_after: Some(delay),
            } => format!("Rate limited. Try again in {}s.", delay.as_secs().max(1)),
            Self::RateLimited { retry_after: None } => {
                "Rate limited. Please try again later.".to_string()
            }
            Self::Api { message, .. } if message.trim().is_empty() => {
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
            Self::Auth(detail) if detail.trim().is_empty() => "Authentication failed.".to_string(),
            Self::ContentBlocked(detail) if detail.trim().is_empty() => {
                "Content blocked by safety filters.".to_string()
            }
            Self::InvalidRequest(detail) if detail.trim().is_empty() => {
                "Invalid request.".to_string()
            }
            Self::UnexpectedResponse(detail) | Self::Decode(detail) if detail.trim().is_empty() => {
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for image editing operations.
pub type Result<T> = std::result::Result<T, GenEditError>;

/// Reduces a raw provider error body to something safe to display.
///
/// JSON bodies of the form `{"error": {"message": "..."}}` are unwrapped,
/// `key=...` query fragments are redacted and the result is truncated.
pub(crate) fn sanitize_error_message(text: &str) -> String {
    let extracted = serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| text.trim().to_string());

    let redacted = redact_keys(&extracted);

    if redacted.chars().count() > MAX_ERROR_MESSAGE_LEN {
        let truncated: String = redacted.chars().take(MAX_ERROR_MESSAGE_LEN).collect();
        format!("{truncated}...")
    } else {
        redacted
    }
}

fn redact_keys(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("key=") {
        out.push_str(&rest[..pos + 4]);
        out.push_str("[REDACTED]");
        let tail = &rest[pos + 4..];
        let end = tail
            .find(|c: char| c == '&' || c.is_whitespace() || c == '"')
            .unwrap_or(tail.len());
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

/// Parses a `Retry-After` header given in whole seconds.
pub(crate) fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}
