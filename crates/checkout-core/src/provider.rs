//! # Checkout Provider Trait
//!
//! The payment provider is a capability injected into the HTTP layer.
//! Production wires in the Stripe client; tests substitute a double.

use crate::error::CheckoutResult;
use crate::session::{CheckoutRequest, SessionRef};
use async_trait::async_trait;
use std::sync::Arc;

/// A hosted payment provider that can open checkout sessions.
///
/// Each call is independent and stateless: the provider owns all session
/// lifecycle; this system only relays the resulting id.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a checkout session with the provider and return its id.
    ///
    /// Suspends while awaiting the remote response; no retries are attempted
    /// beyond what the underlying HTTP client does implicitly.
    async fn create_session(&self, request: &CheckoutRequest) -> CheckoutResult<SessionRef>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared, dynamically dispatched provider
pub type BoxedCheckoutProvider = Arc<dyn CheckoutProvider>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RedirectUrls;

    struct EchoProvider;

    #[async_trait]
    impl CheckoutProvider for EchoProvider {
        async fn create_session(&self, request: &CheckoutRequest) -> CheckoutResult<SessionRef> {
            Ok(SessionRef::new(format!("cs_{}", request.price_id)))
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_provider_is_object_safe() {
        let provider: BoxedCheckoutProvider = Arc::new(EchoProvider);
        let urls = RedirectUrls::new("https://shop.example.com");
        let request = CheckoutRequest::single("price_123", &urls).unwrap();

        let session = provider.create_session(&request).await.unwrap();
        assert_eq!(session.id, "cs_price_123");
        assert_eq!(provider.provider_name(), "echo");
    }
}
