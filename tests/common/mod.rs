#![allow(dead_code)]

use rust_decimal::Decimal;
use sales_report::models::{LineItem, Product, PurchaseRecord, SalesData, Seller, SellerReport};

/// Helper to create a seller with a generated first/last name
pub fn make_seller(id: &str) -> Seller {
    Seller::new(id, format!("First{}", id), format!("Last{}", id))
}

/// Helper to create a product
pub fn make_product(sku: &str, purchase_price: Decimal) -> Product {
    Product::new(sku, purchase_price)
}

/// Helper to create a line item without discount
pub fn make_item(sku: &str, quantity: u64, sale_price: Decimal) -> LineItem {
    LineItem::new(sku, quantity, Decimal::ZERO, sale_price)
}

/// Helper to create a purchase record whose total is the sum of item prices
pub fn make_record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
    let total: Decimal = items
        .iter()
        .map(|i| i.sale_price * Decimal::from(i.quantity))
        .sum();
    PurchaseRecord::new(seller_id, total, items)
}

/// Build a dataset from the three collections
pub fn make_data(
    sellers: Vec<Seller>,
    products: Vec<Product>,
    records: Vec<PurchaseRecord>,
) -> SalesData {
    SalesData::new(sellers, products, records)
}

/// Find a seller's row in a report
pub fn find_report<'a>(reports: &'a [SellerReport], seller_id: &str) -> &'a SellerReport {
    reports
        .iter()
        .find(|r| r.seller_id == seller_id)
        .unwrap_or_else(|| panic!("no report row for seller {}", seller_id))
}

/// Process a JSON string through the pipeline and return the output
pub fn process_json_string(
    json_input: &str,
    format: sales_report::io::ReportFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    sales_report::generate_report(
        json_input.as_bytes(),
        &mut output,
        format,
        &sales_report::options::AnalysisOptions::default_policy(),
    )?;
    Ok(String::from_utf8(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_record_totals_items() {
        let record = make_record(
            "s1",
            vec![make_item("X", 2, dec!(10)), make_item("Y", 1, dec!(5.5))],
        );
        assert_eq!(record.seller_id, "s1");
        assert_eq!(record.total_amount, dec!(25.5));
        assert_eq!(record.items.len(), 2);
    }

    #[test]
    fn test_make_seller_name() {
        let seller = make_seller("7");
        assert_eq!(seller.display_name(), "First7 Last7");
    }
}
