//! Report formatting for terminal output
//!
//! Renders the on-screen summary: the processed total, the totals by type,
//! the category summary and the payer rollup. Amounts are shown as
//! `R$ 1,234.56`.

use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::export::SUMMARY_HEADERS;
use crate::models::Money;
use crate::reports::{
    CategorySummaryReport, PayerSummaryReport, RoyaltyReport, SummaryLine, TypeTotalsReport,
};

const CATEGORY_INDENT: &str = "   ";

/// Format an amount with the configured currency prefix
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

#[derive(Tabled)]
struct TypeTotalRow {
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// The processed total metric
pub fn format_total_processed(report: &TypeTotalsReport, settings: &Settings) -> String {
    format!(
        "Total Processado: {} ({} lançamentos)",
        format_money(report.total, settings),
        report.transaction_count
    )
}

/// Totals by line type
pub fn format_type_totals(report: &TypeTotalsReport, settings: &Settings) -> String {
    let rows = report.rows.iter().map(|row| TypeTotalRow {
        kind: row.kind.clone(),
        total: format_money(row.total, settings),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Category summary rows, with the period column when one is set
pub fn format_category_summary(report: &CategorySummaryReport, settings: &Settings) -> String {
    let period = report.period.map(|p| p.to_string());

    let mut builder = Builder::default();
    builder.push_record(report.headers().into_iter().map(String::from));

    for row in &report.rows {
        let mut record: Vec<String> = Vec::with_capacity(6);
        if let Some(period) = &period {
            record.push(period.clone());
        }
        record.extend([
            row.category.label().to_string(),
            row.name.clone(),
            row.kind.clone(),
            format_money(row.value, settings),
            row.payer.clone(),
        ]);
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

/// Payer → category rollup with subtotals and the grand total
pub fn format_payer_summary(report: &PayerSummaryReport, settings: &Settings) -> String {
    let mut builder = Builder::default();
    builder.push_record(SUMMARY_HEADERS.iter().map(|h| h.to_string()));

    for line in report.lines() {
        let (label, value) = match line {
            SummaryLine::Payer { label, value } => (label.to_string(), value),
            SummaryLine::Category { category, value } => {
                (format!("{}{}", CATEGORY_INDENT, category.label()), value)
            }
            SummaryLine::GrandTotal { value } => (settings.grand_total_label.clone(), value),
        };
        builder.push_record([label, format_money(value, settings)]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

/// The full on-screen summary
pub fn format_report(report: &RoyaltyReport, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format_total_processed(&report.type_totals, settings));
    output.push_str("\n\n");

    output.push_str("Total por Tipo\n");
    output.push_str(&format_type_totals(&report.type_totals, settings));
    output.push_str("\n\n");

    output.push_str("Resumo por Categoria Financeira\n");
    output.push_str(&format_category_summary(&report.categories, settings));
    output.push_str("\n\n");

    output.push_str("Resumo por Fonte e Categoria\n");
    output.push_str(&format_payer_summary(&report.payers, settings));
    output.push('\n');

    output
}
