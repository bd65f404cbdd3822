use std::io::{Read, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::models::{SalesData, SellerReport};

/// Output format of a written report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!(
                "unknown report format '{}' (expected json or csv)",
                other
            )),
        }
    }
}

/// Read a JSON dataset with `sellers`, `products` and `purchase_records`
pub fn read_sales_data<R: Read>(reader: R) -> Result<SalesData> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write the report in the requested format
pub fn write_report<W: Write>(
    reports: &[SellerReport],
    writer: W,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Json => write_report_json(reports, writer),
        ReportFormat::Csv => write_report_csv(reports, writer),
    }
}

/// Write the report as a pretty-printed JSON array
pub fn write_report_json<W: Write>(reports: &[SellerReport], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

// Flat row for CSV output; top products are packed as "sku:qty;sku:qty"
#[derive(Serialize)]
struct ReportRow<'a> {
    seller_id: &'a str,
    name: &'a str,
    revenue: Decimal,
    profit: Decimal,
    sales_count: u64,
    bonus: Decimal,
    top_products: String,
}

impl<'a> From<&'a SellerReport> for ReportRow<'a> {
    fn from(report: &'a SellerReport) -> Self {
        let top_products = report
            .top_products
            .iter()
            .map(|p| format!("{}:{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(";");

        Self {
            seller_id: &report.seller_id,
            name: &report.name,
            revenue: report.revenue,
            profit: report.profit,
            sales_count: report.sales_count,
            bonus: report.bonus,
            top_products,
        }
    }
}

/// Write the report as CSV, one row per seller in rank order
pub fn write_report_csv<W: Write>(reports: &[SellerReport], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for report in reports {
        csv_writer.serialize(ReportRow::from(report))?;
    }

    csv_writer.flush()?;
    Ok(())
}
