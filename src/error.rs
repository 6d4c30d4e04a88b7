//! Error types for ProxyCheck operations.

use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// Every failure is returned as one of these variants; nothing is retried or
/// masked. A batch entry that is missing from an otherwise successful
/// response is not an error and degrades to an empty model instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The query target was empty or otherwise unusable.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The batch held more targets than one request may carry.
    #[error("batch of {count} targets exceeds the limit of {max}")]
    BatchTooLarge {
        /// Number of targets left after trimming and dropping blank entries.
        count: usize,
        /// Maximum number of targets per request.
        max: usize,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON object the provider should send.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The provider answered with an error status.
    ///
    /// `status` and `message` are passed through verbatim for display.
    #[error("provider returned {status}{}", message_suffix(.message))]
    Provider {
        /// Provider status (`denied`, `error`) or the HTTP status code.
        status: String,
        /// Provider message, when one was sent.
        message: Option<String>,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl Error {
    /// Returns `true` when no request was sent because the input was rejected.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::BatchTooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_message() {
        let err = Error::Provider {
            status: "denied".to_string(),
            message: Some("Invalid API key.".to_string()),
        };
        assert_eq!(err.to_string(), "provider returned denied: Invalid API key.");

        let err = Error::Provider {
            status: "503".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "provider returned 503");
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(Error::Validation("empty ip".into()).is_input_error());
        assert!(Error::BatchTooLarge { count: 1001, max: 1000 }.is_input_error());
        assert!(!Error::Decode("bad".into()).is_input_error());
    }
}
