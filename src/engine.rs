use std::collections::HashMap;

use tracing::{debug, info};

use crate::calculators::{BonusCalculator, RevenueCalculator};
use crate::error::Result;
use crate::models::report::round_money;
use crate::models::{Product, PurchaseRecord, SalesData, SellerReport, SellerStats};
use crate::options::AnalysisOptions;

/// Maximum number of entries in a seller's top product list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// References that could not be resolved during a run
///
/// These are skipped, never treated as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipSummary {
    /// Purchase records whose seller id matched no seller
    pub orphan_records: usize,
    /// Line items whose sku matched no product
    pub unknown_skus: usize,
    /// Purchase records whose total would overflow the seller's revenue
    pub overflowed_records: usize,
    /// Line items whose cost, revenue, profit or quantity would overflow
    pub overflowed_items: usize,
}

/// Build the ranked seller report
///
/// Validates the inputs and options, accumulates revenue and profit per
/// seller, ranks sellers by profit descending and assigns bonuses and top
/// products. Returns one report row per input seller.
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>> {
    analyze_sales_data_with_summary(data, options).map(|(reports, _)| reports)
}

/// Same as [`analyze_sales_data`], also returning what was skipped
pub fn analyze_sales_data_with_summary(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<(Vec<SellerReport>, SkipSummary)> {
    data.validate()?;
    let (calculate_revenue, calculate_bonus) = options.calculators()?;

    let mut analyzer = SalesAnalyzer::new(data);
    for record in &data.purchase_records {
        analyzer.process_record(record, calculate_revenue);
    }

    let summary = analyzer.skipped;
    let reports = analyzer.into_reports(calculate_bonus);

    info!(
        sellers = reports.len(),
        records = data.purchase_records.len(),
        orphan_records = summary.orphan_records,
        unknown_skus = summary.unknown_skus,
        overflowed_records = summary.overflowed_records,
        overflowed_items = summary.overflowed_items,
        "seller report built"
    );

    Ok((reports, summary))
}

/// Per-run state: accumulators and lookup indices
struct SalesAnalyzer<'a> {
    /// One accumulator per input seller, input order
    stats: Vec<SellerStats>,
    /// Seller id -> position in `stats`
    seller_index: HashMap<&'a str, usize>,
    /// Sku -> product card
    product_index: HashMap<&'a str, &'a Product>,
    skipped: SkipSummary,
}

impl<'a> SalesAnalyzer<'a> {
    fn new(data: &'a SalesData) -> Self {
        let stats: Vec<SellerStats> = data.sellers.iter().map(SellerStats::new).collect();

        let mut seller_index = HashMap::with_capacity(data.sellers.len());
        for (pos, seller) in data.sellers.iter().enumerate() {
            // Duplicate ids: receipts go to the last seller with that id
            seller_index.insert(seller.id.as_str(), pos);
        }

        let product_index = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        Self {
            stats,
            seller_index,
            product_index,
            skipped: SkipSummary::default(),
        }
    }

    fn process_record(
        &mut self,
        record: &PurchaseRecord,
        calculate_revenue: &dyn RevenueCalculator,
    ) {
        let pos = match self.seller_index.get(record.seller_id.as_str()) {
            Some(&pos) => pos,
            None => {
                debug!(
                    seller_id = %record.seller_id,
                    "skipping purchase record for unknown seller"
                );
                self.skipped.orphan_records += 1;
                return;
            }
        };

        let seller = &mut self.stats[pos];
        if !seller.record_sale(record.total_amount) {
            debug!(
                seller_id = %record.seller_id,
                "skipping purchase record whose total overflows revenue"
            );
            self.skipped.overflowed_records += 1;
            return;
        }

        for item in &record.items {
            let product = match self.product_index.get(item.sku.as_str()) {
                Some(product) => *product,
                None => {
                    debug!(
                        seller_id = %record.seller_id,
                        sku = %item.sku,
                        "skipping line item for unknown product"
                    );
                    self.skipped.unknown_skus += 1;
                    continue;
                }
            };

            let recorded = match (
                product.cost_of(item.quantity),
                calculate_revenue.calculate_revenue(item, product),
            ) {
                (Some(cost), Some(revenue)) => {
                    seller.record_item(&item.sku, item.quantity, revenue, cost)
                }
                _ => false,
            };

            if !recorded {
                debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    "skipping line item whose amounts overflow"
                );
                self.skipped.overflowed_items += 1;
            }
        }
    }

    /// Rank by profit, attach bonuses and top products, round money
    fn into_reports(self, calculate_bonus: &dyn BonusCalculator) -> Vec<SellerReport> {
        let mut ranked = self.stats;
        // Stable: equal profits keep seller-list order
        ranked.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = ranked.len();
        ranked
            .iter()
            .enumerate()
            .map(|(index, seller)| {
                let bonus = calculate_bonus.calculate_bonus(index, total, seller);
                SellerReport {
                    seller_id: seller.seller_id.clone(),
                    name: seller.name.clone(),
                    revenue: round_money(seller.revenue),
                    profit: round_money(seller.profit),
                    sales_count: seller.sales_count,
                    top_products: seller.top_products(TOP_PRODUCTS_LIMIT),
                    bonus: round_money(bonus),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, Seller};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn one_seller_data(records: Vec<PurchaseRecord>) -> SalesData {
        SalesData::new(
            vec![Seller::new("s1", "A", "B")],
            vec![Product::new("X", dec!(10))],
            records,
        )
    }

    #[test]
    fn test_summary_counts_skips() {
        let data = one_seller_data(vec![
            PurchaseRecord::new(
                "ghost",
                dec!(50),
                vec![LineItem::new("X", 1, dec!(0), dec!(20))],
            ),
            PurchaseRecord::new(
                "s1",
                dec!(40),
                vec![
                    LineItem::new("X", 1, dec!(0), dec!(20)),
                    LineItem::new("NOPE", 3, dec!(0), dec!(20)),
                ],
            ),
        ]);

        let (reports, summary) =
            analyze_sales_data_with_summary(&data, &AnalysisOptions::default_policy()).unwrap();

        assert_eq!(
            summary,
            SkipSummary {
                orphan_records: 1,
                unknown_skus: 1,
                ..SkipSummary::default()
            }
        );
        assert_eq!(reports[0].revenue, dec!(40));
        assert_eq!(reports[0].profit, dec!(10));
    }

    #[test]
    fn test_duplicate_seller_ids_keep_one_row_each() {
        let data = SalesData::new(
            vec![Seller::new("s1", "A", "B"), Seller::new("s1", "C", "D")],
            vec![Product::new("X", dec!(10))],
            vec![PurchaseRecord::new(
                "s1",
                dec!(20),
                vec![LineItem::new("X", 1, dec!(0), dec!(20))],
            )],
        );

        let reports = analyze_sales_data(&data, &AnalysisOptions::default_policy()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "C D");
        assert_eq!(reports[0].sales_count, 1);
        assert_eq!(reports[0].profit, dec!(10));
        assert_eq!(reports[1].name, "A B");
        assert_eq!(reports[1].sales_count, 0);
    }

    #[test]
    fn test_overflowing_line_item_is_skipped() {
        let data = one_seller_data(vec![PurchaseRecord::new(
            "s1",
            dec!(100),
            vec![
                LineItem::new(
                    "X",
                    10_000_000_000_000_000_000,
                    dec!(0),
                    dec!(10000000000),
                ),
                LineItem::new("X", 2, dec!(0), dec!(20)),
            ],
        )]);

        let (reports, summary) =
            analyze_sales_data_with_summary(&data, &AnalysisOptions::default_policy()).unwrap();

        assert_eq!(summary.overflowed_items, 1);
        assert_eq!(reports[0].sales_count, 1);
        assert_eq!(reports[0].revenue, dec!(100));
        assert_eq!(reports[0].profit, dec!(20));
        assert_eq!(reports[0].top_products[0].quantity, 2);
    }

    #[test]
    fn test_overflowing_record_total_is_skipped() {
        let data = one_seller_data(vec![
            PurchaseRecord::new(
                "s1",
                Decimal::MAX,
                vec![LineItem::new("X", 1, dec!(0), dec!(20))],
            ),
            PurchaseRecord::new(
                "s1",
                dec!(1),
                vec![LineItem::new("X", 4, dec!(0), dec!(20))],
            ),
        ]);

        let (reports, summary) =
            analyze_sales_data_with_summary(&data, &AnalysisOptions::default_policy()).unwrap();

        assert_eq!(summary.overflowed_records, 1);
        assert_eq!(reports[0].sales_count, 1);
        assert_eq!(reports[0].revenue, Decimal::MAX);
        // Only the first record's item counts
        assert_eq!(reports[0].profit, dec!(10));
        assert_eq!(reports[0].top_products[0].quantity, 1);
    }

    #[test]
    fn test_record_with_no_items_still_counts() {
        let data = one_seller_data(vec![PurchaseRecord::new("s1", dec!(12.5), vec![])]);

        let reports = analyze_sales_data(&data, &AnalysisOptions::default_policy()).unwrap();

        assert_eq!(reports[0].sales_count, 1);
        assert_eq!(reports[0].revenue, dec!(12.5));
        assert_eq!(reports[0].profit, dec!(0));
        assert!(reports[0].top_products.is_empty());
    }
}
