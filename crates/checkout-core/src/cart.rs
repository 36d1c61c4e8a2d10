//! # Cart Sanitization
//!
//! Storefront carts arrive as loose JSON, so each field is coerced the way
//! the storefront's JavaScript would before Mercado Pago sees it. All items
//! are validated up front; the preference request is never partially built.

use crate::error::{CheckoutError, CheckoutResult};
use serde::Serialize;
use serde_json::Value;

/// Titles longer than this are truncated before reaching the provider
pub const MAX_TITLE_LEN: usize = 120;

/// Every item is charged in Brazilian reais
pub const CURRENCY_BRL: &str = "BRL";

/// A cart item after coercion and validation, ready for the provider.
/// Immutable once built; lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizedItem {
    pub title: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub currency_id: &'static str,
}

impl SanitizedItem {
    /// Coerce and validate a single raw cart entry.
    ///
    /// Rejects items whose title is empty (or whitespace) after truncation,
    /// and items without a finite, positive `unit_price`.
    pub fn from_value(raw: &Value) -> CheckoutResult<Self> {
        let title: String = coerce_title(raw.get("title"))
            .chars()
            .take(MAX_TITLE_LEN)
            .collect();

        if title.trim().is_empty() {
            return Err(CheckoutError::InvalidItem {
                reason: "título vazio após coerção".into(),
            });
        }

        let unit_price = match coerce_number(raw.get("unit_price")) {
            Some(price) if price.is_finite() && price > 0.0 => price,
            other => {
                return Err(CheckoutError::InvalidItem {
                    reason: format!("unit_price inválido: {:?}", other),
                })
            }
        };

        Ok(Self {
            title,
            quantity: coerce_quantity(raw.get("quantity")),
            unit_price,
            currency_id: CURRENCY_BRL,
        })
    }
}

/// Sanitize the whole cart, failing on the first invalid item.
pub fn sanitize_items(items: &[Value]) -> CheckoutResult<Vec<SanitizedItem>> {
    items.iter().map(SanitizedItem::from_value).collect()
}

fn coerce_title(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Quantity defaults to 1 when missing or unparseable, and is clamped to ≥ 1.
fn coerce_quantity(value: Option<&Value>) -> u32 {
    match coerce_number(value) {
        Some(q) if q.is_finite() && q >= 1.0 => q as u32,
        _ => 1,
    }
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_item() {
        let item = SanitizedItem::from_value(&json!({
            "title": "Rank VIP",
            "quantity": 1,
            "unit_price": 19.9
        }))
        .unwrap();

        assert_eq!(item.title, "Rank VIP");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, 19.9);
        assert_eq!(item.currency_id, "BRL");
    }

    #[test]
    fn test_title_truncated_to_exactly_120_chars() {
        let long = "x".repeat(200);
        let item = SanitizedItem::from_value(&json!({
            "title": long,
            "unit_price": 5.0
        }))
        .unwrap();

        assert_eq!(item.title.chars().count(), 120);
    }

    #[test]
    fn test_empty_and_whitespace_titles_rejected() {
        for title in [json!(""), json!("   "), json!(null)] {
            let result = SanitizedItem::from_value(&json!({
                "title": title,
                "unit_price": 5.0
            }));
            assert!(matches!(
                result,
                Err(CheckoutError::InvalidItem { .. })
            ));
        }
    }

    #[test]
    fn test_numeric_title_coerced_to_string() {
        let item = SanitizedItem::from_value(&json!({
            "title": 42,
            "unit_price": 5.0
        }))
        .unwrap();
        assert_eq!(item.title, "42");
    }

    #[test]
    fn test_quantity_defaults_and_clamping() {
        let cases = [
            (json!({"title": "a", "unit_price": 1.0}), 1),
            (json!({"title": "a", "quantity": 0, "unit_price": 1.0}), 1),
            (json!({"title": "a", "quantity": -3, "unit_price": 1.0}), 1),
            (json!({"title": "a", "quantity": "4", "unit_price": 1.0}), 4),
            (json!({"title": "a", "quantity": "oops", "unit_price": 1.0}), 1),
            (json!({"title": "a", "quantity": 2.9, "unit_price": 1.0}), 2),
        ];

        for (raw, expected) in cases {
            let item = SanitizedItem::from_value(&raw).unwrap();
            assert_eq!(item.quantity, expected, "raw: {raw}");
        }
    }

    #[test]
    fn test_bad_prices_rejected() {
        for price in [json!(0), json!(-1.5), json!("free"), json!(null)] {
            let result = SanitizedItem::from_value(&json!({
                "title": "Rank VIP",
                "unit_price": price
            }));
            assert!(
                matches!(result, Err(CheckoutError::InvalidItem { .. })),
                "price: {price}"
            );
        }
    }

    #[test]
    fn test_numeric_string_price_accepted() {
        let item = SanitizedItem::from_value(&json!({
            "title": "Rank VIP",
            "unit_price": "19.9"
        }))
        .unwrap();
        assert_eq!(item.unit_price, 19.9);
    }

    #[test]
    fn test_sanitize_items_fails_before_any_network_call() {
        let items = vec![
            json!({"title": "ok", "unit_price": 1.0}),
            json!({"title": "", "unit_price": 1.0}),
        ];
        assert!(sanitize_items(&items).is_err());
    }

    #[test]
    fn test_item_wire_format() {
        let item = SanitizedItem::from_value(&json!({
            "title": "Rank VIP",
            "quantity": 2,
            "unit_price": 19.9
        }))
        .unwrap();

        let wire = serde_json::to_value(&item).unwrap();
        assert_eq!(
            wire,
            json!({
                "title": "Rank VIP",
                "quantity": 2,
                "unit_price": 19.9,
                "currency_id": "BRL"
            })
        );
    }
}
