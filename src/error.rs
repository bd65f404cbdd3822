use std::fmt;

use thiserror::Error;

/// Input collection checked before a report run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Sellers,
    Products,
    PurchaseRecords,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Sellers => "sellers",
            Collection::Products => "products",
            Collection::PurchaseRecords => "purchase_records",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building a seller report
///
/// `Validation` and `Configuration` are raised by the analysis pipeline before
/// any accumulator is built. The remaining variants come from reading datasets
/// and writing reports.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("validation error: collection '{collection}' is missing or empty")]
    Validation { collection: Collection },

    #[error("configuration error: required option '{option}' is not set")]
    Configuration { option: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("batch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
