use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{ProductQuantity, Seller};

/// Running totals for one seller during a report run
#[derive(Debug, Clone)]
pub struct SellerStats {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    /// Sold quantities in the order skus were first seen
    products_sold: Vec<ProductQuantity>,
    /// sku -> position in `products_sold`
    sku_positions: HashMap<String, usize>,
}

impl SellerStats {
    /// Create an empty accumulator for a seller
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_positions: HashMap::new(),
        }
    }

    /// Count one receipt and add its charged total to revenue
    /// Returns false, leaving the totals untouched, if revenue would overflow
    pub fn record_sale(&mut self, total_amount: Decimal) -> bool {
        let revenue = match self.revenue.checked_add(total_amount) {
            Some(revenue) => revenue,
            None => return false,
        };
        self.sales_count += 1;
        self.revenue = revenue;
        true
    }

    /// Add the profit of one line item and its sold quantity
    /// Returns false, leaving the totals untouched, if profit or quantity would overflow
    pub fn record_item(
        &mut self,
        sku: &str,
        quantity: u64,
        revenue: Decimal,
        cost: Decimal,
    ) -> bool {
        let profit = match revenue
            .checked_sub(cost)
            .and_then(|item_profit| self.profit.checked_add(item_profit))
        {
            Some(profit) => profit,
            None => return false,
        };

        match self.sku_positions.get(sku) {
            Some(&pos) => {
                let sold = &mut self.products_sold[pos].quantity;
                match sold.checked_add(quantity) {
                    Some(total) => *sold = total,
                    None => return false,
                }
            }
            None => {
                self.sku_positions
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(ProductQuantity::new(sku, quantity));
            }
        }

        self.profit = profit;
        true
    }

    /// Quantity sold for a sku, zero if never sold
    pub fn quantity_sold(&self, sku: &str) -> u64 {
        self.sku_positions
            .get(sku)
            .map(|&pos| self.products_sold[pos].quantity)
            .unwrap_or(0)
    }

    /// Sold quantities in first-seen order
    pub fn products_sold(&self) -> &[ProductQuantity] {
        &self.products_sold
    }

    /// The `limit` best-selling skus, quantity descending
    ///
    /// Ties keep first-seen order (`sort_by` is stable).
    pub fn top_products(&self, limit: usize) -> Vec<ProductQuantity> {
        let mut ranked = self.products_sold.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}
