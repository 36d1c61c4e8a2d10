//! # External Reference
//!
//! The correlation token echoed by Mercado Pago, used to match later payment
//! notifications to an order. Generated per request from the current
//! timestamp in milliseconds, so two requests in the same millisecond would
//! collide; the storefront tolerates this.

use chrono::Utc;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Fixed namespace prefix for all references issued by this service
pub const REFERENCE_PREFIX: &str = "MALIBU-RP";

/// Characters escaped the way `encodeURIComponent` does
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A unique-per-request order correlation token, `MALIBU-RP-<millis>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference(String);

impl ExternalReference {
    /// Generate a reference from the current wall clock
    pub fn now() -> Self {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    /// Build a reference from an explicit timestamp (deterministic tests)
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{}-{}", REFERENCE_PREFIX, millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Percent-encoded form for embedding in back-URL query strings
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, URI_COMPONENT).to_string()
    }
}

impl fmt::Display for ExternalReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pattern() {
        let reference = ExternalReference::now();
        let suffix = reference
            .as_str()
            .strip_prefix("MALIBU-RP-")
            .expect("missing prefix");
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_references_distinct_across_milliseconds() {
        let first = ExternalReference::now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = ExternalReference::now();
        assert_ne!(first, second);
    }

    #[test]
    fn test_encoding_is_identity_for_issued_references() {
        let reference = ExternalReference::from_millis(1_700_000_000_000);
        assert_eq!(reference.encoded(), "MALIBU-RP-1700000000000");
    }

    #[test]
    fn test_encoding_escapes_reserved_chars() {
        let reference = ExternalReference("MALIBU RP/1".to_string());
        assert_eq!(reference.encoded(), "MALIBU%20RP%2F1");
    }
}
