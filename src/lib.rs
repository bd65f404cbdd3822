pub mod batch;
pub mod calculators;
pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod options;

use std::io::{Read, Write};

pub use engine::{analyze_sales_data, analyze_sales_data_with_summary};
use error::Result;
use io::ReportFormat;
use options::AnalysisOptions;

/// Read a JSON dataset, build the seller report and write it out
pub fn generate_report<R: Read, W: Write>(
    reader: R,
    writer: W,
    format: ReportFormat,
    options: &AnalysisOptions,
) -> Result<()> {
    let data = io::read_sales_data(reader)?;
    let reports = analyze_sales_data(&data, options)?;
    io::write_report(&reports, writer, format)
}
