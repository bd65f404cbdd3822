use rust_decimal::Decimal;

use crate::models::report::round_money;
use crate::models::{LineItem, Product, SellerStats};

/// Strategy computing the discounted revenue of one line item
///
/// Returns `None` when the revenue cannot be represented; the line item is
/// then skipped. Any `Fn(&LineItem, &Product) -> Option<Decimal>` closure or
/// fn item qualifies.
pub trait RevenueCalculator: Send + Sync {
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal> + Send + Sync,
{
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

/// Strategy computing a seller's bonus from its rank by profit
///
/// `index` is the zero-based position after sorting by profit descending and
/// `total` is the number of sellers in the run.
pub trait BonusCalculator: Send + Sync {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> Decimal;
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStats) -> Decimal + Send + Sync,
{
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> Decimal {
        self(index, total, seller)
    }
}

/// `sale_price * quantity * (1 - discount / 100)`, `None` on overflow
pub fn calculate_simple_revenue(item: &LineItem, _product: &Product) -> Option<Decimal> {
    let discount_factor =
        Decimal::ONE.checked_sub(item.discount.checked_div(Decimal::ONE_HUNDRED)?)?;
    item.sale_price
        .checked_mul(Decimal::from(item.quantity))?
        .checked_mul(discount_factor)
}

/// Share of profit paid out at a given rank
///
/// The branches are checked top to bottom, so a lone seller (both first and
/// last) gets the leader rate.
pub fn bonus_rate(index: usize, total: usize) -> Decimal {
    if index == 0 {
        Decimal::new(15, 2)
    } else if index == 1 || index == 2 {
        Decimal::new(10, 2)
    } else if index + 1 == total {
        Decimal::ZERO
    } else {
        Decimal::new(5, 2)
    }
}

/// Profit times [`bonus_rate`], rounded to cents
pub fn calculate_bonus_by_profit(index: usize, total: usize, seller: &SellerStats) -> Decimal {
    round_money(seller.profit * bonus_rate(index, total))
}
