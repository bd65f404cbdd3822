use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a receipt
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u64,
    /// Discount in percent, 0..=100
    #[serde(default)]
    pub discount: Decimal,
    /// Price of one unit before discount
    pub sale_price: Decimal,
}

/// A completed transaction (receipt)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    pub seller_id: String,
    /// Amount charged for the whole receipt, taken as-is for revenue
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl LineItem {
    pub fn new(
        sku: impl Into<String>,
        quantity: u64,
        discount: Decimal,
        sale_price: Decimal,
    ) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            discount,
            sale_price,
        }
    }
}

impl PurchaseRecord {
    pub fn new(
        seller_id: impl Into<String>,
        total_amount: Decimal,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            receipt_id: None,
            seller_id: seller_id.into(),
            total_amount,
            items,
        }
    }
}
