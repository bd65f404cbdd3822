use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for money in the report
pub const MONEY_SCALE: u32 = 2;

/// Round a money amount to two decimal places, half away from zero
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Quantity sold for one sku
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductQuantity {
    pub sku: String,
    pub quantity: u64,
}

impl ProductQuantity {
    pub fn new(sku: impl Into<String>, quantity: u64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

/// One row of the final report
///
/// Money fields serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<ProductQuantity>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
