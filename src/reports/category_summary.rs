//! Category summary
//!
//! Sums classified lines by (category, payee name, type) and attaches the
//! payer of each name. This is the per-row listing of the detail sheet.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{Category, ClassifiedTransaction, Money, PayerDirectory, ReportPeriod};

pub const PERIOD_HEADER: &str = "Período";
pub const CATEGORY_HEADER: &str = "Categoria";
pub const NAME_HEADER: &str = "Nome";
pub const TYPE_HEADER: &str = "Tipo";
pub const VALUE_HEADER: &str = "Valor";
pub const PAYER_HEADER: &str = "Fonte";

/// One (category, name, type) group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummaryRow {
    /// Categoria
    pub category: Category,
    /// Nome (payee)
    pub name: String,
    /// Tipo (line type)
    pub kind: String,
    /// Valor (summed amount)
    pub value: Money,
    /// Fonte (payer, "" when unknown)
    pub payer: String,
}

/// Category summary rows, ordered by name
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummaryReport {
    /// Period prefixed to every row, if any
    pub period: Option<ReportPeriod>,
    /// Rows sorted by name; ties keep (category, type) order
    pub rows: Vec<CategorySummaryRow>,
}

impl CategorySummaryReport {
    /// Group classified lines and resolve their payers
    pub fn generate(
        classified: &[ClassifiedTransaction],
        directory: &PayerDirectory,
        period: Option<ReportPeriod>,
    ) -> Self {
        let mut groups: BTreeMap<(Category, &str, &str), Money> = BTreeMap::new();
        for line in classified {
            *groups
                .entry((line.category, line.name(), line.kind()))
                .or_default() += line.amount();
        }

        let mut rows: Vec<CategorySummaryRow> = groups
            .into_iter()
            .map(|((category, name, kind), value)| CategorySummaryRow {
                category,
                name: name.to_string(),
                kind: kind.to_string(),
                value,
                payer: directory.payer_for(name).to_string(),
            })
            .collect();

        // sort_by is stable
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            lines = classified.len(),
            groups = rows.len(),
            "built category summary"
        );

        Self { period, rows }
    }

    /// Column headers of the detail listing
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = Vec::with_capacity(6);
        if self.period.is_some() {
            headers.push(PERIOD_HEADER);
        }
        headers.extend([
            CATEGORY_HEADER,
            NAME_HEADER,
            TYPE_HEADER,
            VALUE_HEADER,
            PAYER_HEADER,
        ]);
        headers
    }

    /// Sum of all rows
    pub fn total(&self) -> Money {
        self.rows.iter().map(|r| r.value).sum()
    }
}
