//! # checkout-core
//!
//! Core types and traits for the checkout gateway.
//!
//! This crate provides:
//! - `CheckoutProvider` trait for payment provider implementations
//! - `CheckoutRequest` and `SessionRef` for the checkout flow
//! - `RedirectUrls` for building success/cancel targets
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutRequest, RedirectUrls};
//!
//! let urls = RedirectUrls::new("https://shop.example.com");
//! let request = CheckoutRequest::single("price_1ABC", &urls)?;
//!
//! // Delegate to a provider (Stripe in production, a double in tests)
//! let session = provider.create_session(&request).await?;
//!
//! // Relay session.id to the caller
//! ```

pub mod error;
pub mod provider;
pub mod session;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use provider::{BoxedCheckoutProvider, CheckoutProvider};
pub use session::{CheckoutRequest, RedirectUrls, SessionRef, SESSION_ID_TOKEN};
