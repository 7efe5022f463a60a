//! # Request Handlers
//!
//! Axum request handlers for the checkout gateway.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use checkout_core::CheckoutRequest;
use serde::Serialize;
use tracing::{error, info, instrument};

/// Generic failure body. Every checkout error surfaces as this; the
/// underlying cause goes to the logs, never to the caller.
const CHECKOUT_FAILED: &str = "Payment session creation failed";

/// Create checkout response
#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    /// Provider's session id
    pub id: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session for the price id in the path.
///
/// Relays `{ "id": ... }` on success. Any failure (bad price id, provider
/// rejection, network error) collapses to the same 500 body.
#[instrument(skip(state), fields(price_id = %price_id))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Path(price_id): Path<String>,
) -> Result<Json<CreateSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = match CheckoutRequest::single(price_id, &state.urls) {
        Ok(request) => state.provider.create_session(&request).await,
        Err(err) => Err(err),
    };

    match session {
        Ok(session) => {
            info!("Created checkout session: {}", session.id);
            Ok(Json(CreateSessionResponse { id: session.id }))
        }
        Err(err) => {
            error!("Checkout session creation failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: CHECKOUT_FAILED.to_string(),
                }),
            ))
        }
    }
}
