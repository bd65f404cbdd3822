use std::sync::Arc;

use tracing::debug;

use crate::engine::analyze_sales_data;
use crate::error::Result;
use crate::models::{SalesData, SellerReport};
use crate::options::AnalysisOptions;

/// Result of one dataset in a batch
#[derive(Debug)]
pub struct BatchReport {
    pub label: String,
    pub result: Result<Vec<SellerReport>>,
}

/// Runs independent report jobs in parallel
///
/// Each dataset is analysed on tokio's blocking pool with its own indices
/// and accumulators; only the calculators are shared, through an `Arc`.
/// A failure in one dataset does not affect the others.
///
/// # Example
///
/// ```no_run
/// use sales_report::batch::BatchAnalyzer;
/// use sales_report::models::SalesData;
/// use sales_report::options::AnalysisOptions;
///
/// #[tokio::main]
/// async fn main() {
///     let analyzer = BatchAnalyzer::new(AnalysisOptions::default_policy());
///     let reports = analyzer
///         .analyze_all(vec![("north".to_string(), SalesData::default())])
///         .await;
///     for report in reports {
///         println!("{}: {:?}", report.label, report.result.is_ok());
///     }
/// }
/// ```
pub struct BatchAnalyzer {
    options: Arc<AnalysisOptions>,
}

impl BatchAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// Analyse one dataset off the async executor
    pub async fn analyze(&self, data: SalesData) -> Result<Vec<SellerReport>> {
        let options = Arc::clone(&self.options);
        tokio::task::spawn_blocking(move || analyze_sales_data(&data, &options)).await?
    }

    /// Analyse every labelled dataset concurrently
    ///
    /// Results come back in input order.
    pub async fn analyze_all(&self, datasets: Vec<(String, SalesData)>) -> Vec<BatchReport> {
        let futures: Vec<_> = datasets
            .into_iter()
            .map(|(label, data)| async move {
                debug!(label = %label, "starting report job");
                let result = self.analyze(data).await;
                BatchReport { label, result }
            })
            .collect();

        futures::future::join_all(futures).await
    }

    /// Clone handle for sharing across tasks
    pub fn clone_handle(&self) -> Self {
        Self {
            options: Arc::clone(&self.options),
        }
    }
}
