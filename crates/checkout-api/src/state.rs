//! # Application State
//!
//! Shared state for the Axum application: the payment strategy, the site
//! base URL candidates, and server configuration. Everything is loaded once
//! at startup and immutable afterwards.

use checkout_core::{BoxedPreferenceStrategy, CheckoutError, CheckoutResult, SiteBaseSources};
use checkout_mercadopago::{MercadoPagoPreferenceStrategy, MISSING_TOKEN_ERROR};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment strategy; `None` when the access token is not configured,
    /// so the misconfiguration surfaces as a 500 on each request instead
    /// of preventing startup.
    strategy: Option<BoxedPreferenceStrategy>,
    /// Site base URL candidates from the deploy environment
    pub sites: SiteBaseSources,
    /// Server config
    pub config: AppConfig,
}

impl AppState {
    /// Build state from the environment
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        let sites = SiteBaseSources::from_env();

        let strategy = match MercadoPagoPreferenceStrategy::from_env() {
            Ok(strategy) => Some(Arc::new(strategy) as BoxedPreferenceStrategy),
            Err(e) => {
                tracing::warn!("Mercado Pago unavailable: {e}");
                None
            }
        };

        Self {
            strategy,
            sites,
            config,
        }
    }

    /// Build state with an explicit strategy and site sources (tests)
    pub fn with_strategy(strategy: BoxedPreferenceStrategy, sites: SiteBaseSources) -> Self {
        Self {
            strategy: Some(strategy),
            sites,
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
        }
    }

    /// Build state without a configured provider (tests)
    pub fn without_strategy(sites: SiteBaseSources) -> Self {
        Self {
            strategy: None,
            sites,
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
        }
    }

    /// The configured strategy, or the token-misconfiguration error
    pub fn strategy(&self) -> CheckoutResult<&BoxedPreferenceStrategy> {
        self.strategy
            .as_ref()
            .ok_or_else(|| CheckoutError::Configuration(MISSING_TOKEN_ERROR.to_string()))
    }

    /// Whether a provider is configured
    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_strategy_is_a_configuration_error() {
        let state = AppState::without_strategy(SiteBaseSources::default());
        match state.strategy() {
            Err(CheckoutError::Configuration(msg)) => {
                assert_eq!(msg, MISSING_TOKEN_ERROR);
            }
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }
}
