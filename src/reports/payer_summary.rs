//! Payer summary
//!
//! Two-level rollup of the category summary: payer ("Fonte") first, then
//! category, with a subtotal per payer and a grand total.

use serde::Serialize;
use std::collections::BTreeMap;

use super::category_summary::CategorySummaryRow;
use crate::models::{Category, Money};

/// Summed value of one category within a payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub value: Money,
}

/// All categories paid by one payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayerGroup {
    /// Payer label; rows without a payer use the empty-payer label
    pub payer: String,
    /// Categories in ascending label order
    pub categories: Vec<CategoryTotal>,
    /// Sum of the category values
    pub subtotal: Money,
}

/// A flattened summary line, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLine<'a> {
    /// Payer subtotal
    Payer { label: &'a str, value: Money },
    /// Category within the preceding payer
    Category { category: Category, value: Money },
    /// Closing grand total
    GrandTotal { value: Money },
}

/// Payer groups in ascending order plus the grand total
#[derive(Debug, Clone, Serialize)]
pub struct PayerSummaryReport {
    pub groups: Vec<PayerGroup>,
    pub grand_total: Money,
}

impl PayerSummaryReport {
    /// Roll category summary rows up by payer and category
    pub fn generate(rows: &[CategorySummaryRow], empty_payer_label: &str) -> Self {
        let mut by_payer: BTreeMap<&str, BTreeMap<Category, Money>> = BTreeMap::new();
        for row in rows {
            let payer = if row.payer.is_empty() {
                empty_payer_label
            } else {
                row.payer.as_str()
            };
            *by_payer
                .entry(payer)
                .or_default()
                .entry(row.category)
                .or_default() += row.value;
        }

        let groups: Vec<PayerGroup> = by_payer
            .into_iter()
            .map(|(payer, categories)| {
                let categories: Vec<CategoryTotal> = categories
                    .into_iter()
                    .map(|(category, value)| CategoryTotal { category, value })
                    .collect();
                PayerGroup {
                    payer: payer.to_string(),
                    subtotal: categories.iter().map(|c| c.value).sum(),
                    categories,
                }
            })
            .collect();

        let grand_total = groups.iter().map(|g| g.subtotal).sum();

        Self {
            groups,
            grand_total,
        }
    }

    /// Flatten into subtotal, category and grand total lines
    pub fn lines(&self) -> Vec<SummaryLine<'_>> {
        let mut lines = Vec::new();
        for group in &self.groups {
            lines.push(SummaryLine::Payer {
                label: &group.payer,
                value: group.subtotal,
            });
            lines.extend(group.categories.iter().map(|c| SummaryLine::Category {
                category: c.category,
                value: c.value,
            }));
        }
        lines.push(SummaryLine::GrandTotal {
            value: self.grand_total,
        });
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: Category, name: &str, value: i64, payer: &str) -> CategorySummaryRow {
        CategorySummaryRow {
            category,
            name: name.into(),
            kind: "Streaming".into(),
            value: Money::from_cents(value),
            payer: payer.into(),
        }
    }

    #[test]
    fn test_groups_by_payer_then_category() {
        let rows = vec![
            row(Category::PublisherProvision, "Ana", 100, "UBC"),
            row(Category::DigitalMechanicals, "Bruno", 200, "ECAD"),
            row(Category::DigitalMechanicals, "Carla", 300, "ECAD"),
            row(Category::Licensing, "Dora", 40, "ECAD"),
            row(Category::AdvanceRecovery, "Eva", -10, ""),
        ];

        let report = PayerSummaryReport::generate(&rows, "(vazio)");

        let payers: Vec<_> = report.groups.iter().map(|g| g.payer.as_str()).collect();
        assert_eq!(payers, vec!["(vazio)", "ECAD", "UBC"]);

        let ecad = &report.groups[1];
        assert_eq!(
            ecad.categories,
            vec![
                CategoryTotal {
                    category: Category::DigitalMechanicals,
                    value: Money::from_cents(500),
                },
                CategoryTotal {
                    category: Category::Licensing,
                    value: Money::from_cents(40),
                },
            ]
        );
        assert_eq!(ecad.subtotal, Money::from_cents(540));
        assert_eq!(report.grand_total, Money::from_cents(630));
    }

    #[test]
    fn test_subtotals_sum_to_grand_total() {
        let rows = vec![
            row(Category::Licensing, "Ana", 123, "A"),
            row(Category::Synchronization, "Ana", 456, "A"),
            row(Category::Licensing, "Bia", 789, "B"),
        ];
        let report = PayerSummaryReport::generate(&rows, "(vazio)");
        let subtotals: Money = report.groups.iter().map(|g| g.subtotal).sum();
        assert_eq!(subtotals, report.grand_total);
        for group in &report.groups {
            let sum: Money = group.categories.iter().map(|c| c.value).sum();
            assert_eq!(sum, group.subtotal);
        }
    }

    #[test]
    fn test_lines_order() {
        let rows = vec![
            row(Category::Licensing, "Ana", 100, "B"),
            row(Category::DigitalMechanicals, "Bia", 200, "A"),
        ];
        let report = PayerSummaryReport::generate(&rows, "(vazio)");
        let lines = report.lines();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            SummaryLine::Payer {
                label: "A",
                value: Money::from_cents(200)
            }
        );
        assert!(matches!(lines[1], SummaryLine::Category { .. }));
        assert!(matches!(lines[2], SummaryLine::Payer { label: "B", .. }));
        assert_eq!(
            lines[4],
            SummaryLine::GrandTotal {
                value: Money::from_cents(300)
            }
        );
    }

    #[test]
    fn test_empty_rows_still_have_grand_total() {
        let report = PayerSummaryReport::generate(&[], "(vazio)");
        assert!(report.groups.is_empty());
        assert_eq!(
            report.lines(),
            vec![SummaryLine::GrandTotal {
                value: Money::zero()
            }]
        );
    }
}
