//! # Mercado Pago Configuration
//!
//! Configuration for the Mercado Pago integration. The access token is a
//! secret loaded from the environment once at startup.

use checkout_core::{CheckoutError, CheckoutResult};
use std::env;

/// Error surfaced whenever the access token is missing. A fatal,
/// non-retryable operator misconfiguration.
pub const MISSING_TOKEN_ERROR: &str = "MP_ACCESS_TOKEN não configurado no ambiente.";

/// Mercado Pago API configuration
#[derive(Debug, Clone)]
pub struct MercadoPagoConfig {
    /// Secret access token (`APP_USR-...` or `TEST-...`)
    pub access_token: String,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,
}

impl MercadoPagoConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `MP_ACCESS_TOKEN`
    pub fn from_env() -> CheckoutResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let access_token = env::var("MP_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CheckoutError::Configuration(MISSING_TOKEN_ERROR.to_string()))?;

        Ok(Self::new(access_token))
    }

    /// Create config with an explicit token (for testing)
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            api_base_url: "https://api.mercadopago.com".to_string(),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header() {
        let config = MercadoPagoConfig::new("TEST-abc123");
        assert_eq!(config.auth_header(), "Bearer TEST-abc123");
    }

    #[test]
    fn test_default_api_base() {
        let config = MercadoPagoConfig::new("TEST-abc123");
        assert_eq!(config.api_base_url, "https://api.mercadopago.com");

        let config = config.with_api_base_url("http://127.0.0.1:9999");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_from_env_missing_token() {
        env::remove_var("MP_ACCESS_TOKEN");

        let result = MercadoPagoConfig::from_env();
        match result {
            Err(CheckoutError::Configuration(msg)) => assert_eq!(msg, MISSING_TOKEN_ERROR),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}
