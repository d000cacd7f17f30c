//! XLSX export
//!
//! Renders a `RoyaltyReport` into a two-sheet workbook held in memory:
//! the detail listing and the payer summary. The writer performs no file
//! I/O; callers decide where the buffer goes.

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::info;

use super::styles::{CellStyle, SummaryColumn};
use crate::config::Settings;
use crate::error::RoyaltyResult;
use crate::models::Money;
use crate::reports::{RoyaltyReport, SummaryLine};

/// MIME type of the exported workbook
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column headers of the summary sheet
pub const SUMMARY_HEADERS: [&str; 2] = ["Row Labels", "Sum of Value"];

const SUMMARY_LABEL_WIDTH: f64 = 40.0;
const SUMMARY_VALUE_WIDTH: f64 = 18.0;
const WIDTH_PADDING: usize = 4;
const MAX_COLUMN_WIDTH: usize = 50;
const CATEGORY_INDENT: &str = "   ";

/// A finished workbook ready to hand back to the caller
#[derive(Debug, Clone)]
pub struct ExportedReport {
    /// Suggested download name
    pub file_name: String,
    /// MIME type of `bytes`
    pub mime_type: &'static str,
    /// Workbook contents
    pub bytes: Vec<u8>,
}

/// Render the report and name the result
pub fn export_report_xlsx(
    report: &RoyaltyReport,
    settings: &Settings,
) -> RoyaltyResult<ExportedReport> {
    let bytes = write_workbook(report, settings)?;
    let file_name = settings.output_file_name(report.period());

    info!(file = %file_name, bytes = bytes.len(), "rendered report workbook");

    Ok(ExportedReport {
        file_name,
        mime_type: XLSX_MIME_TYPE,
        bytes,
    })
}

/// Render the report into an in-memory workbook
pub fn write_workbook(report: &RoyaltyReport, settings: &Settings) -> RoyaltyResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(detail_sheet(report, settings)?);
    workbook.push_worksheet(summary_sheet(report, settings)?);
    Ok(workbook.save_to_buffer()?)
}

/// A detail sheet cell before styling
enum DetailCell<'a> {
    Text(&'a str),
    Amount(Money),
}

impl DetailCell<'_> {
    /// Width the cell needs, in characters
    fn display_len(&self) -> usize {
        match self {
            DetailCell::Text(s) => s.chars().count(),
            DetailCell::Amount(m) => m.format_grouped().chars().count(),
        }
    }
}

/// Column width for the longest value: length + padding, capped
fn fitted_width(longest: usize) -> f64 {
    (longest + WIDTH_PADDING).min(MAX_COLUMN_WIDTH) as f64
}

fn detail_sheet(report: &RoyaltyReport, settings: &Settings) -> RoyaltyResult<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(&settings.detail_sheet_name)?;

    let summary = &report.categories;
    let headers = summary.headers();
    let period = summary.period.map(|p| p.to_string());

    let rows: Vec<Vec<DetailCell>> = summary
        .rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(headers.len());
            if let Some(period) = &period {
                cells.push(DetailCell::Text(period));
            }
            cells.extend([
                DetailCell::Text(row.category.label()),
                DetailCell::Text(&row.name),
                DetailCell::Text(&row.kind),
                DetailCell::Amount(row.value),
                DetailCell::Text(&row.payer),
            ]);
            cells
        })
        .collect();

    let header_format = CellStyle::detail_header().to_format();
    let text_format = CellStyle::detail_text().to_format();
    let value_format = CellStyle::detail_value().to_format();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, cells) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            widths[col] = widths[col].max(cell.display_len());
            match cell {
                DetailCell::Text(s) => {
                    sheet.write_string_with_format(row, col as u16, *s, &text_format)?;
                }
                DetailCell::Amount(m) => {
                    sheet.write_number_with_format(row, col as u16, m.to_f64(), &value_format)?;
                }
            }
        }
    }

    let last_col = headers.len().saturating_sub(1) as u16;
    sheet.autofilter(0, 0, rows.len() as u32, last_col)?;

    for (col, longest) in widths.into_iter().enumerate() {
        sheet.set_column_width(col as u16, fitted_width(longest))?;
    }

    Ok(sheet)
}

fn summary_sheet(report: &RoyaltyReport, settings: &Settings) -> RoyaltyResult<Worksheet> {
    let mut sheet = Worksheet::new();
    sheet.set_name(&settings.summary_sheet_name)?;
    sheet.set_column_width(0, SUMMARY_LABEL_WIDTH)?;
    sheet.set_column_width(1, SUMMARY_VALUE_WIDTH)?;

    let header_format = CellStyle::summary_header().to_format();
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, line) in report.payers.lines().into_iter().enumerate() {
        let row = idx as u32 + 1;
        let (label, value, style): (String, Money, fn(SummaryColumn) -> CellStyle) = match line {
            SummaryLine::Payer { label, value } => {
                (label.to_string(), value, CellStyle::payer_subtotal)
            }
            SummaryLine::Category { category, value } => (
                format!("{}{}", CATEGORY_INDENT, category.label()),
                value,
                CellStyle::payer_category,
            ),
            SummaryLine::GrandTotal { value } => (
                settings.grand_total_label.clone(),
                value,
                CellStyle::grand_total,
            ),
        };

        sheet.write_string_with_format(
            row,
            0,
            &label,
            &style(SummaryColumn::Label).to_format(),
        )?;
        sheet.write_number_with_format(
            row,
            1,
            value.to_f64(),
            &style(SummaryColumn::Value).to_format(),
        )?;
    }

    Ok(sheet)
}
