//! # Preference Types
//!
//! Wire types for Mercado Pago's preference-creation API: the request built
//! from a sanitized cart and the result handed back to the storefront.

use crate::cart::SanitizedItem;
use crate::reference::ExternalReference;
use crate::site::SiteBase;
use serde::{Deserialize, Serialize};

/// The three redirect destinations the provider sends the buyer to after
/// checkout. Always absolute, each embedding the external reference.
#[derive(Debug, Clone, Serialize)]
pub struct BackUrls {
    pub success: String,
    pub pending: String,
    pub failure: String,
}

impl BackUrls {
    pub fn for_reference(site_base: &SiteBase, reference: &ExternalReference) -> Self {
        let build = |status: &str| {
            format!(
                "{}/?status={}&ref={}",
                site_base.as_str(),
                status,
                reference.encoded()
            )
        };
        Self {
            success: build("success"),
            pending: build("pending"),
            failure: build("failure"),
        }
    }
}

/// Fixed metadata identifying the operator and the fulfillment mode
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceMetadata {
    pub server: String,
    pub delivery: String,
}

impl Default for PreferenceMetadata {
    fn default() -> Self {
        Self {
            server: "Malibu Roleplay".to_string(),
            delivery: "manual".to_string(),
        }
    }
}

/// A fully validated preference-creation request.
/// `auto_return` is always "approved", which is only valid because the
/// success back-URL is always set.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceRequest {
    pub items: Vec<SanitizedItem>,
    pub back_urls: BackUrls,
    pub auto_return: String,
    pub external_reference: String,
    pub metadata: PreferenceMetadata,
}

impl PreferenceRequest {
    pub fn new(
        items: Vec<SanitizedItem>,
        site_base: &SiteBase,
        reference: ExternalReference,
    ) -> Self {
        let back_urls = BackUrls::for_reference(site_base, &reference);
        Self {
            items,
            back_urls,
            auto_return: "approved".to_string(),
            external_reference: reference.into_inner(),
            metadata: PreferenceMetadata::default(),
        }
    }
}

/// What the provider hands back for a created preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceResult {
    /// Provider-assigned preference identifier
    pub id: String,
    /// Provider-hosted checkout URL the buyer is redirected to
    pub init_point: String,
    /// Echoed correlation token
    pub external_reference: String,
}
