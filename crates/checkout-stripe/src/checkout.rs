//! # Stripe Checkout Sessions
//!
//! `CheckoutProvider` implementation backed by Stripe's Checkout Sessions
//! API. The gateway holds no session state: it forwards one request and
//! relays the session id from the response.

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutProvider, CheckoutRequest, CheckoutResult, SessionRef,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Stripe checkout provider
///
/// Uses Stripe's hosted checkout page; all pricing, fraud detection, and
/// session lifecycle live on the provider side.
pub struct StripeCheckout {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckout {
    /// Create a new Stripe checkout provider
    pub fn new(config: StripeConfig) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                CheckoutError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    /// Build form data for the Checkout Sessions API.
    ///
    /// Stripe takes a form-encoded body with bracketed array keys.
    fn build_form(request: &CheckoutRequest) -> Vec<(&'static str, String)> {
        vec![
            ("mode", "payment".to_string()),
            ("payment_method_types[0]", "card".to_string()),
            ("line_items[0][price]", request.price_id.clone()),
            ("line_items[0][quantity]", request.quantity.to_string()),
            ("success_url", request.success_url.clone()),
            ("cancel_url", request.cancel_url.clone()),
            (
                "allow_promotion_codes",
                request.allow_promotion_codes.to_string(),
            ),
        ]
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    #[instrument(skip(self, request), fields(price_id = %request.price_id))]
    async fn create_session(&self, request: &CheckoutRequest) -> CheckoutResult<SessionRef> {
        let form = Self::build_form(request);
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        debug!("Creating Stripe checkout session: mode=payment, quantity=1");

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(CheckoutError::Provider {
                    message: error_response.error.message,
                });
            }

            return Err(CheckoutError::Provider {
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session: StripeSessionResponse = serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!("Created Stripe checkout session: id={}", session.id);

        Ok(SessionRef::new(session.id))
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
