//! # checkout-core
//!
//! Core types and validation for the Malibu Roleplay checkout service.
//!
//! This crate provides:
//! - `SanitizedItem` and cart coercion rules
//! - `SiteBase` resolution from the request origin and deploy environment
//! - `ExternalReference` generation and `PreferenceRequest` assembly
//! - `PreferenceStrategy` trait for payment providers
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{sanitize_items, ExternalReference, PreferenceRequest, SiteBase};
//!
//! let items = sanitize_items(&raw_items)?;
//! let base = sources.resolve(origin)?;
//! let request = PreferenceRequest::new(items, &base, ExternalReference::now());
//!
//! let result = strategy.create_preference(&request).await?;
//! // Redirect buyer to result.init_point
//! ```

pub mod cart;
pub mod error;
pub mod preference;
pub mod reference;
pub mod site;
pub mod strategy;

// Re-exports for convenience
pub use cart::{sanitize_items, SanitizedItem, CURRENCY_BRL, MAX_TITLE_LEN};
pub use error::{CheckoutError, CheckoutResult};
pub use preference::{BackUrls, PreferenceMetadata, PreferenceRequest, PreferenceResult};
pub use reference::{ExternalReference, REFERENCE_PREFIX};
pub use site::{SiteBase, SiteBaseSources};
pub use strategy::{BoxedPreferenceStrategy, PreferenceStrategy};
