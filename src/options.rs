use std::fmt;

use crate::calculators::{
    calculate_bonus_by_profit, calculate_simple_revenue, BonusCalculator, RevenueCalculator,
};
use crate::error::{ReportError, Result};

/// Name of the revenue calculator option, as reported in configuration errors
pub const REVENUE_OPTION: &str = "calculateRevenue";
/// Name of the bonus calculator option, as reported in configuration errors
pub const BONUS_OPTION: &str = "calculateBonus";

/// Calculators injected into a report run
///
/// Both slots are required; [`AnalysisOptions::new`] leaves them empty and
/// the run fails with a configuration error until they are set.
///
/// # Example
///
/// ```
/// use sales_report::calculators::calculate_simple_revenue;
/// use sales_report::options::AnalysisOptions;
///
/// let options = AnalysisOptions::new()
///     .with_revenue_calculator(calculate_simple_revenue)
///     .with_bonus_calculator(sales_report::calculators::calculate_bonus_by_profit);
/// assert!(options.check().is_ok());
/// ```
#[derive(Default)]
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    calculate_bonus: Option<Box<dyn BonusCalculator>>,
}

impl AnalysisOptions {
    /// Options with no calculators set
    pub fn new() -> Self {
        Self::default()
    }

    /// Simple discounted revenue and the profit-rank bonus table
    pub fn default_policy() -> Self {
        Self::new()
            .with_revenue_calculator(calculate_simple_revenue)
            .with_bonus_calculator(calculate_bonus_by_profit)
    }

    pub fn with_revenue_calculator<C>(mut self, calculator: C) -> Self
    where
        C: RevenueCalculator + 'static,
    {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    pub fn with_bonus_calculator<C>(mut self, calculator: C) -> Self
    where
        C: BonusCalculator + 'static,
    {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }

    /// Fail with a configuration error naming the first missing calculator
    pub fn check(&self) -> Result<()> {
        self.calculators().map(|_| ())
    }

    /// Both calculators, or a configuration error naming the missing one
    pub(crate) fn calculators(&self) -> Result<(&dyn RevenueCalculator, &dyn BonusCalculator)> {
        let revenue = self
            .calculate_revenue
            .as_deref()
            .ok_or(ReportError::Configuration {
                option: REVENUE_OPTION,
            })?;
        let bonus = self
            .calculate_bonus
            .as_deref()
            .ok_or(ReportError::Configuration {
                option: BONUS_OPTION,
            })?;
        Ok((revenue, bonus))
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
