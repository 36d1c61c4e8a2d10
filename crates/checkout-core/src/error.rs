//! # Checkout Error Types
//!
//! Typed error handling for the checkout pipeline.
//! Every failure is terminal for the request and maps to a JSON
//! `{"error": <message>}` body with the status from `status_code()`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Request used a method other than POST or OPTIONS
    #[error("Use POST")]
    MethodNotAllowed,

    /// Operator misconfiguration (missing access token). Non-retryable.
    #[error("{0}")]
    Configuration(String),

    /// The public site base URL could not be resolved
    #[error("Não consegui determinar a URL base do site.")]
    BaseUrl,

    /// `items` is missing, not an array, or empty
    #[error("Carrinho vazio ou inválido.")]
    InvalidCart,

    /// A cart item failed sanitization. The reason stays out of the
    /// response body and is only logged.
    #[error("Item inválido no carrinho.")]
    InvalidItem { reason: String },

    /// Mercado Pago rejected the preference; message forwarded to the caller
    #[error("{message}")]
    Provider { provider: String, message: String },

    /// Transport failure talking to the provider
    #[error("{0}")]
    Network(String),

    /// Request body or provider response could not be parsed
    #[error("{0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::MethodNotAllowed => 405,
            CheckoutError::InvalidCart => 400,
            CheckoutError::Configuration(_)
            | CheckoutError::BaseUrl
            | CheckoutError::InvalidItem { .. }
            | CheckoutError::Provider { .. }
            | CheckoutError::Network(_)
            | CheckoutError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
