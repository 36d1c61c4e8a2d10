//! # Request Handlers
//!
//! Axum handlers for the checkout service. A single linear pipeline:
//! method gate, credential check, site-base resolution, cart sanitization,
//! preference creation, response mapping. Every branch carries the CORS
//! headers, since the storefront calls this endpoint cross-origin.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use checkout_core::{
    sanitize_items, CheckoutError, CheckoutResult, ExternalReference, PreferenceRequest,
    PreferenceResult,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

// =============================================================================
// Response Types
// =============================================================================

/// Success body returned to the storefront
#[derive(Debug, Serialize)]
pub struct CreatePreferenceResponse {
    /// Provider-assigned preference identifier
    pub preference_id: String,
    /// Provider-hosted checkout URL (redirect the buyer here)
    pub init_point: String,
    /// Correlation token for matching later payment notifications
    pub external_reference: String,
}

impl From<PreferenceResult> for CreatePreferenceResponse {
    fn from(result: PreferenceResult) -> Self {
        Self {
            preference_id: result.id,
            init_point: result.init_point,
            external_reference: result.external_reference,
        }
    }
}

/// Error body: always `{"error": <message>}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    ]
}

fn error_response(err: &CheckoutError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorBody {
        error: err.to_string(),
    };
    (status, cors_headers(), Json(body)).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// CORS preflight: no body, permissive headers
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, cors_headers())
}

/// Reject every method other than POST and OPTIONS
pub async fn method_not_allowed() -> Response {
    error_response(&CheckoutError::MethodNotAllowed)
}

/// Create a checkout preference from a cart payload
#[instrument(skip(state, headers, body))]
pub async fn create_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match create_preference_inner(&state, &headers, &body).await {
        Ok(result) => (
            StatusCode::OK,
            cors_headers(),
            Json(CreatePreferenceResponse::from(result)),
        )
            .into_response(),
        Err(err) => {
            error!("Failed to create preference: {err:?}");
            error_response(&err)
        }
    }
}

async fn create_preference_inner(
    state: &AppState,
    headers: &HeaderMap,
    body: &Bytes,
) -> CheckoutResult<PreferenceResult> {
    let strategy = state.strategy()?;

    let origin = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok());
    let site_base = state.sites.resolve(origin)?;

    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| CheckoutError::Serialization(format!("Corpo inválido: {}", e)))?;

    let raw_items = payload
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(CheckoutError::InvalidCart)?;

    // All items validated before anything goes over the wire
    let items = sanitize_items(raw_items)?;

    let reference = ExternalReference::now();
    let request = PreferenceRequest::new(items, &site_base, reference);

    info!(
        external_reference = %request.external_reference,
        items = request.items.len(),
        site_base = site_base.as_str(),
        "Creating checkout preference"
    );

    strategy.create_preference(&request).await
}

/// Catch-all for unrouted paths: the hosting platform may point any path at
/// this service, so every path behaves like the canonical one.
pub async fn fallback(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        preflight().await.into_response()
    } else if method == Method::POST {
        create_preference(State(state), headers, body).await
    } else {
        method_not_allowed().await
    }
}
