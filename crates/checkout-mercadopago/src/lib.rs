//! # checkout-mercadopago
//!
//! Mercado Pago preference strategy for the Malibu Roleplay checkout
//! service.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_mercadopago::MercadoPagoPreferenceStrategy;
//! use checkout_core::PreferenceStrategy;
//!
//! // Requires MP_ACCESS_TOKEN in the environment
//! let strategy = MercadoPagoPreferenceStrategy::from_env()?;
//!
//! let result = strategy.create_preference(&request).await?;
//! // Redirect buyer to result.init_point
//! ```

pub mod config;
pub mod preference;

// Re-exports
pub use config::{MercadoPagoConfig, MISSING_TOKEN_ERROR};
pub use preference::MercadoPagoPreferenceStrategy;
