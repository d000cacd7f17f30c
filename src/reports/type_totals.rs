//! Totals by statement line type
//!
//! Display-only breakdown of the processed amount by the "Type" column.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Money, Transaction};

/// Total for one statement line type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeTotal {
    /// Line type ("Tipo")
    pub kind: String,
    /// Sum of amounts for this type
    pub total: Money,
}

/// Totals by type, ordered by type name
#[derive(Debug, Clone, Serialize)]
pub struct TypeTotalsReport {
    /// One row per distinct type, ascending
    pub rows: Vec<TypeTotal>,
    /// Total processed across all lines
    pub total: Money,
    /// Number of statement lines
    pub transaction_count: usize,
}

impl TypeTotalsReport {
    /// Group transactions by type and sum their amounts
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_kind: BTreeMap<&str, Money> = BTreeMap::new();
        for txn in transactions {
            *by_kind.entry(txn.kind.as_str()).or_default() += txn.amount;
        }

        let rows = by_kind
            .into_iter()
            .map(|(kind, total)| TypeTotal {
                kind: kind.to_string(),
                total,
            })
            .collect();

        Self {
            rows,
            total: transactions.iter().map(|t| t.amount).sum(),
            transaction_count: transactions.len(),
        }
    }
}
