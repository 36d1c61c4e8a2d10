//! # Mercado Pago Preferences
//!
//! Implementation of Mercado Pago's Checkout Preferences API
//! (`POST /checkout/preferences`). A preference describes the purchasable
//! cart and redirect behavior; the buyer completes payment on the returned
//! `init_point` URL.

use crate::config::MercadoPagoConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, PreferenceRequest, PreferenceResult, PreferenceStrategy,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Mercado Pago preference strategy
///
/// Uses Mercado Pago's hosted checkout. The service never touches card
/// data; it only creates the preference and forwards the redirect URL.
pub struct MercadoPagoPreferenceStrategy {
    config: MercadoPagoConfig,
    client: Client,
}

impl MercadoPagoPreferenceStrategy {
    /// Create a new Mercado Pago preference strategy
    pub fn new(config: MercadoPagoConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = MercadoPagoConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl PreferenceStrategy for MercadoPagoPreferenceStrategy {
    #[instrument(skip(self, request), fields(external_reference = %request.external_reference))]
    async fn create_preference(
        &self,
        request: &PreferenceRequest,
    ) -> CheckoutResult<PreferenceResult> {
        debug!(items = request.items.len(), "creating Mercado Pago preference");

        let url = format!("{}/checkout/preferences", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .json(request)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Mercado Pago API error: status={}, body={}", status, body);

            // Parse the provider's error envelope
            if let Ok(error_response) = serde_json::from_str::<MercadoPagoErrorResponse>(&body) {
                return Err(CheckoutError::Provider {
                    provider: "mercadopago".to_string(),
                    message: error_response.message,
                });
            }

            return Err(CheckoutError::Provider {
                provider: "mercadopago".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let created: MercadoPagoPreferenceResponse = serde_json::from_str(&body)
            .map_err(|e| {
                CheckoutError::Serialization(format!(
                    "Failed to parse Mercado Pago response: {}",
                    e
                ))
            })?;

        info!(
            "Created preference: id={}, init_point={}",
            created.id, created.init_point
        );

        Ok(PreferenceResult {
            id: created.id,
            init_point: created.init_point,
            external_reference: created
                .external_reference
                .unwrap_or_else(|| request.external_reference.clone()),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mercadopago"
    }
}

// =============================================================================
// Mercado Pago API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct MercadoPagoPreferenceResponse {
    id: String,
    init_point: String,
    #[serde(default)]
    external_reference: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    sandbox_init_point: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MercadoPagoErrorResponse {
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    error: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<i64>,
    #[serde(default)]
    #[allow(dead_code)]
    cause: Option<Value>,
}
