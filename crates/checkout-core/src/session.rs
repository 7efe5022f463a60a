//! # Checkout Session Types
//!
//! Request/response types for checkout session creation.
//! Both are transient: built per HTTP call, never persisted.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};

/// Placeholder the provider substitutes with the real session id in the
/// success redirect. Sent literally; this system never expands it.
pub const SESSION_ID_TOKEN: &str = "{CHECKOUT_SESSION_ID}";

/// A single-item purchase request forwarded to the payment provider.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    /// Opaque catalog key identifying the price in the provider's system
    pub price_id: String,

    /// Quantity (always 1 for this gateway)
    pub quantity: u32,

    /// URL to redirect after successful payment (carries the session token)
    pub success_url: String,

    /// URL to redirect if the customer cancels
    pub cancel_url: String,

    /// Whether the hosted checkout page accepts promotion codes
    pub allow_promotion_codes: bool,
}

impl CheckoutRequest {
    /// Build a one-item, single-quantity purchase request.
    ///
    /// Fails if `price_id` is empty; that is the only local invariant.
    pub fn single(price_id: impl Into<String>, urls: &RedirectUrls) -> CheckoutResult<Self> {
        let price_id = price_id.into();
        if price_id.trim().is_empty() {
            return Err(CheckoutError::InvalidRequest(
                "price identifier must be non-empty".to_string(),
            ));
        }

        Ok(Self {
            price_id,
            quantity: 1,
            success_url: urls.success_url(),
            cancel_url: urls.cancel_url(),
            allow_promotion_codes: true,
        })
    }
}

/// Reference to a provider-side checkout session.
///
/// Held only long enough to relay to the client; the session itself lives
/// entirely in the provider's system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRef {
    /// Provider's opaque session id
    pub id: String,
}

impl SessionRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Redirect targets built from the configured base domain.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
    /// Base URL of the application (e.g., "https://shop.example.com")
    base_url: String,
}

impl RedirectUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Success redirect with the session id substitution token.
    pub fn success_url(&self) -> String {
        format!("{}/success?id={}", self.base_url, SESSION_ID_TOKEN)
    }

    /// Cancel redirect. Constant, carries no token.
    pub fn cancel_url(&self) -> String {
        format!("{}/cancel", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_is_one_item_with_promos() {
        let urls = RedirectUrls::new("https://shop.example.com");
        let request = CheckoutRequest::single("price_1ABC", &urls).unwrap();

        assert_eq!(request.price_id, "price_1ABC");
        assert_eq!(request.quantity, 1);
        assert!(request.allow_promotion_codes);
    }

    #[test]
    fn test_empty_price_id_rejected() {
        let urls = RedirectUrls::new("https://shop.example.com");

        assert!(matches!(
            CheckoutRequest::single("", &urls),
            Err(CheckoutError::InvalidRequest(_))
        ));
        assert!(matches!(
            CheckoutRequest::single("   ", &urls),
            Err(CheckoutError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_success_url_carries_literal_token() {
        let urls = RedirectUrls::new("https://shop.example.com");

        assert_eq!(
            urls.success_url(),
            "https://shop.example.com/success?id={CHECKOUT_SESSION_ID}"
        );
    }

    #[test]
    fn test_cancel_url_is_constant_and_token_free() {
        let urls = RedirectUrls::new("https://shop.example.com");

        assert_eq!(urls.cancel_url(), "https://shop.example.com/cancel");
        assert!(!urls.cancel_url().contains(SESSION_ID_TOKEN));
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let urls = RedirectUrls::new("https://shop.example.com/");
        assert_eq!(urls.cancel_url(), "https://shop.example.com/cancel");
    }
}
