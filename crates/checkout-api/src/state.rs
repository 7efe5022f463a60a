//! # Application State
//!
//! Server configuration and shared state for the axum application.
//! Environment values are read once at startup into `ServerConfig`; nothing
//! downstream consults the environment again.

use checkout_core::{BoxedCheckoutProvider, CheckoutError, CheckoutResult, RedirectUrls};
use checkout_stripe::StripeCheckout;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base domain URL used to build redirect targets
    pub domain: String,
    /// Filesystem path for static assets
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load from environment variables.
    ///
    /// Required: `DOMAIN`, `STATIC_DIR`. Optional: `PORT` (default 3000),
    /// `HOST` (default 0.0.0.0). A missing required value is a fatal
    /// configuration error; the server never reaches a listening state.
    pub fn from_env() -> CheckoutResult<Self> {
        dotenvy::dotenv().ok();

        let domain = std::env::var("DOMAIN")
            .map_err(|_| CheckoutError::Configuration("DOMAIN not set".to_string()))?;

        let static_dir = std::env::var("STATIC_DIR")
            .map_err(|_| CheckoutError::Configuration("STATIC_DIR not set".to_string()))?;

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            domain,
            static_dir: PathBuf::from(static_dir),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> CheckoutResult<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                CheckoutError::Configuration(format!(
                    "invalid bind address {}:{}",
                    self.host, self.port
                ))
            })
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Injected payment provider (Stripe in production, a double in tests)
    pub provider: BoxedCheckoutProvider,
    /// Redirect targets built from the configured domain
    pub urls: RedirectUrls,
    /// Server config
    pub config: ServerConfig,
}

impl AppState {
    /// Assemble state from the environment with the Stripe provider.
    pub fn new() -> CheckoutResult<Self> {
        let config = ServerConfig::from_env()?;
        let provider = Arc::new(StripeCheckout::from_env()?);
        Ok(Self::with_provider(config, provider))
    }

    /// Assemble state with an explicit provider (for tests).
    pub fn with_provider(config: ServerConfig, provider: BoxedCheckoutProvider) -> Self {
        let urls = RedirectUrls::new(config.domain.clone());
        Self {
            provider,
            urls,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            domain: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from("static"),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_bad_host_is_configuration_error() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 3000,
            domain: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from("static"),
        };

        assert!(matches!(
            config.socket_addr(),
            Err(CheckoutError::Configuration(_))
        ));
    }
}
