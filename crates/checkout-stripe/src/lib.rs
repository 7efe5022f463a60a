//! # checkout-stripe
//!
//! Stripe checkout provider for the checkout gateway.
//!
//! Implements `checkout_core::CheckoutProvider` against Stripe's hosted
//! Checkout Sessions API. The secret key comes from `STRIPE_SECRET_KEY`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_stripe::StripeCheckout;
//! use checkout_core::{CheckoutProvider, CheckoutRequest, RedirectUrls};
//!
//! let provider = StripeCheckout::from_env()?;
//!
//! let urls = RedirectUrls::new("https://shop.example.com");
//! let request = CheckoutRequest::single("price_1ABC", &urls)?;
//! let session = provider.create_session(&request).await?;
//!
//! // Relay session.id to the browser
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckout;
pub use config::StripeConfig;
