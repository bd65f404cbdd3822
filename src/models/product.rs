use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product card, keyed by sku
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub sku: String,
    /// Cost of one unit
    pub purchase_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    pub fn new(sku: impl Into<String>, purchase_price: Decimal) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
            name: None,
            category: None,
        }
    }

    /// Cost basis for `quantity` units, `None` on overflow
    pub fn cost_of(&self, quantity: u64) -> Option<Decimal> {
        self.purchase_price.checked_mul(Decimal::from(quantity))
    }
}
