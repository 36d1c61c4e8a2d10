//! # checkout-api
//!
//! HTTP layer for the Malibu Roleplay checkout service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The preference-creation endpoint with CORS for the storefront
//!
//! ## Endpoints
//!
//! | Method  | Path                 | Description |
//! |---------|----------------------|-------------|
//! | POST    | `/create-preference` | Create checkout preference |
//! | OPTIONS | any                  | CORS preflight (204) |
//! | other   | any                  | 405 `{"error":"Use POST"}` |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
