//! # Preference Strategy Trait
//!
//! Seam between the HTTP layer and the payment provider. The production
//! implementation lives in `checkout-mercadopago`; handler tests substitute
//! an in-process fake.

use crate::error::CheckoutResult;
use crate::preference::{PreferenceRequest, PreferenceResult};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider able to turn a validated cart into a hosted checkout.
#[async_trait]
pub trait PreferenceStrategy: Send + Sync {
    /// Create a checkout preference and return the redirect details.
    async fn create_preference(
        &self,
        request: &PreferenceRequest,
    ) -> CheckoutResult<PreferenceResult>;

    /// Provider name, for logging
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared, dynamically dispatched strategy
pub type BoxedPreferenceStrategy = Arc<dyn PreferenceStrategy>;
