//! # checkout-api
//!
//! HTTP layer for the checkout gateway.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Home page |
//! | GET | `/success` | Post-payment page |
//! | GET | `/cancel` | Cancelled-payment page |
//! | GET | `/workshop1`..`/workshop3` | Workshop pages |
//! | POST | `/create-checkout-session/{price_id}` | Create checkout session |
//! | GET | `/health` | Health check |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppState, ServerConfig};
