//! # Site Base Resolution
//!
//! The public site base URL anchors the three back-redirect URLs. It comes
//! from the request's `Origin` header when present, otherwise from the
//! deploy environment (primary URL, preview URL, manual override), in that
//! order.

use crate::error::{CheckoutError, CheckoutResult};

/// Environment-provided candidates for the public site base URL.
/// Loaded once at startup, immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct SiteBaseSources {
    /// Primary deploy URL (`URL`)
    pub deploy_url: Option<String>,
    /// Preview deploy URL (`DEPLOY_PRIME_URL`)
    pub deploy_preview_url: Option<String>,
    /// Manual fallback (`SITE_URL`)
    pub site_url: Option<String>,
}

impl SiteBaseSources {
    /// Load candidates from environment variables, treating empty values
    /// as absent.
    pub fn from_env() -> Self {
        Self {
            deploy_url: non_empty_var("URL"),
            deploy_preview_url: non_empty_var("DEPLOY_PRIME_URL"),
            site_url: non_empty_var("SITE_URL"),
        }
    }

    /// Resolve the site base, preferring the request origin.
    pub fn resolve(&self, origin: Option<&str>) -> CheckoutResult<SiteBase> {
        let candidate = origin
            .map(str::to_owned)
            .filter(|s| !s.is_empty())
            .or_else(|| self.deploy_url.clone())
            .or_else(|| self.deploy_preview_url.clone())
            .or_else(|| self.site_url.clone())
            .unwrap_or_default();

        SiteBase::parse(candidate)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// A validated public site base URL (absolute, http/https)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBase(String);

impl SiteBase {
    /// Validate a raw candidate. Rejects empty values and anything that is
    /// not an absolute http(s) URL.
    pub fn parse(raw: impl Into<String>) -> CheckoutResult<Self> {
        let raw = raw.into();
        if raw.is_empty() || !raw.starts_with("http") {
            return Err(CheckoutError::BaseUrl);
        }
        // Origins never carry a trailing slash; env values sometimes do.
        Ok(Self(raw.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
