//! # Checkout Error Types
//!
//! Typed error handling for the checkout gateway.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing env values, malformed keys).
    /// Fatal: the process must not reach a listening state with one of these.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (empty price identifier)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider rejected the request (non-2xx response)
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Provider response could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns true if this error should terminate the process at startup.
    ///
    /// Everything else is recovered per-request: logged, and surfaced to the
    /// HTTP caller as a generic failure without distinguishing the cause.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckoutError::Configuration(_))
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_configuration_is_fatal() {
        assert!(CheckoutError::Configuration("DOMAIN not set".into()).is_fatal());
        assert!(!CheckoutError::InvalidRequest("empty price id".into()).is_fatal());
        assert!(!CheckoutError::Network("timeout".into()).is_fatal());
        assert!(!CheckoutError::Provider {
            message: "No such price".into()
        }
        .is_fatal());
        assert!(!CheckoutError::Serialization("bad json".into()).is_fatal());
    }

    #[test]
    fn test_display_includes_cause() {
        let err = CheckoutError::Provider {
            message: "No such price: price_abc".into(),
        };
        assert_eq!(err.to_string(), "Provider error: No such price: price_abc");
    }
}
