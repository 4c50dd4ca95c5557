//! # Order Types
//!
//! The browser's cart and the order-creation payload sent to the provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shopping cart as posted by the checkout page.
///
/// The relay treats it as opaque: it is logged, never priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(pub Value);

impl Cart {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Compact rendering for log lines
    pub fn describe(&self) -> String {
        self.0.to_string()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// What the provider should do once the buyer approves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    /// Capture funds immediately on completion
    #[default]
    Capture,
}

/// Money amount in the provider's wire format (decimal string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency_code: String,
    pub value: String,
}

impl Amount {
    pub fn new(currency_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            value: value.into(),
        }
    }

    /// Fixed amount charged for every order regardless of the cart
    pub fn placeholder() -> Self {
        Self::new("USD", "100")
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: Amount,
}

/// Body of `POST /v2/checkout/orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub intent: OrderIntent,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl OrderRequest {
    /// Single purchase unit, CAPTURE intent
    pub fn capture(amount: Amount) -> Self {
        Self {
            intent: OrderIntent::Capture,
            purchase_units: vec![PurchaseUnit { amount }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capture_order_wire_format() {
        let order = OrderRequest::capture(Amount::placeholder());

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "intent": "CAPTURE",
                "purchase_units": [
                    { "amount": { "currency_code": "USD", "value": "100" } }
                ]
            })
        );
    }

    #[test]
    fn test_cart_is_opaque() {
        let cart: Cart = serde_json::from_value(json!([{ "id": "sku-1", "quantity": "2" }])).unwrap();

        assert_eq!(cart.describe(), r#"[{"id":"sku-1","quantity":"2"}]"#);
        assert!(cart.as_value().is_array());
    }

    #[test]
    fn test_default_intent_is_capture() {
        assert_eq!(OrderIntent::default(), OrderIntent::Capture);
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::new("EUR", "12.50").to_string(), "12.50 EUR");
    }
}
