//! Reports module for the royalty report
//!
//! Aggregations over a classified statement: totals by line type, the
//! (category, name, type) summary and the payer rollup. All of them are
//! built from immutable inputs and return new ordered sequences.

pub mod category_summary;
pub mod payer_summary;
pub mod type_totals;

pub use category_summary::{CategorySummaryReport, CategorySummaryRow};
pub use payer_summary::{CategoryTotal, PayerGroup, PayerSummaryReport, SummaryLine};
pub use type_totals::{TypeTotal, TypeTotalsReport};

use serde::Serialize;
use tracing::debug;

use crate::config::Settings;
use crate::models::{Money, PayerDirectory, ReportPeriod, Transaction};
use crate::services::classify_all;

/// Everything derived from one statement upload
#[derive(Debug, Clone, Serialize)]
pub struct RoyaltyReport {
    /// Totals by line type (display only)
    pub type_totals: TypeTotalsReport,
    /// Detail rows by (category, name, type)
    pub categories: CategorySummaryReport,
    /// Payer → category rollup
    pub payers: PayerSummaryReport,
}

impl RoyaltyReport {
    /// Classify and aggregate a statement
    pub fn generate(
        transactions: &[Transaction],
        directory: &PayerDirectory,
        period: Option<ReportPeriod>,
        settings: &Settings,
    ) -> Self {
        let type_totals = TypeTotalsReport::generate(transactions);
        let classified = classify_all(transactions);
        let categories = CategorySummaryReport::generate(&classified, directory, period);
        let payers = PayerSummaryReport::generate(&categories.rows, &settings.empty_payer_label);

        debug!(
            transactions = transactions.len(),
            payers = payers.groups.len(),
            total = %type_totals.total,
            "generated royalty report"
        );

        Self {
            type_totals,
            categories,
            payers,
        }
    }

    /// The report period, if any
    pub fn period(&self) -> Option<&ReportPeriod> {
        self.categories.period.as_ref()
    }

    /// Total processed amount
    pub fn total(&self) -> Money {
        self.type_totals.total
    }
}
