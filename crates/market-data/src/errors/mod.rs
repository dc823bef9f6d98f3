//! Error types and recovery classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for every acquisition step
//! - [`RecoveryScope`]: How much of a fetch an error invalidates

mod recovery;

pub use recovery::RecoveryScope;

use thiserror::Error;

/// Errors that can occur while fetching or parsing upstream payloads.
///
/// None of these ever reach a caller of the acquisition facade. Each variant is
/// classified via [`recovery_scope`](Self::recovery_scope), which tells the
/// fetcher whether to drop one record or the whole source.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// Connection failure, TLS failure, or body read failure.
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The source that failed
        provider: String,
        /// The underlying error message
        message: String,
    },

    /// The request exceeded the configured per-request timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The source that timed out
        provider: String,
    },

    /// The source answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    Http {
        /// The source that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The payload could not be decoded, or its envelope has an unexpected shape.
    #[error("Decode error: {provider} - {message}")]
    Decode {
        /// The source whose payload failed to decode
        provider: String,
        /// Description of the decoding failure
        message: String,
    },

    /// One instrument's fields could not be parsed.
    #[error("Parse error for '{code}': {message}")]
    Parse {
        /// The instrument code the record belongs to (may be empty if unknown)
        code: String,
        /// Description of the field failure
        message: String,
    },
}

impl MarketDataError {
    /// Builds a transport or timeout error from a `reqwest` failure.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Http {
                provider: provider.to_string(),
                status: status.as_u16(),
            }
        } else {
            Self::Transport {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub fn decode(provider: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Returns how far the damage of this error extends.
    ///
    /// # Examples
    ///
    /// ```
    /// use fundpulse_market_data::errors::{MarketDataError, RecoveryScope};
    ///
    /// let error = MarketDataError::parse("sh000001", "bad price");
    /// assert_eq!(error.recovery_scope(), RecoveryScope::Record);
    ///
    /// let error = MarketDataError::Timeout { provider: "SINA".to_string() };
    /// assert_eq!(error.recovery_scope(), RecoveryScope::Source);
    /// ```
    pub fn recovery_scope(&self) -> RecoveryScope {
        match self {
            Self::Parse { .. } => RecoveryScope::Record,
            Self::Transport { .. }
            | Self::Timeout { .. }
            | Self::Http { .. }
            | Self::Decode { .. } => RecoveryScope::Source,
        }
    }
}
