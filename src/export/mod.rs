//! Export module for the royalty report
//!
//! Renders the aggregated report into the spreadsheet handed to finance:
//! - `styles`: declarative cell style descriptors
//! - `xlsx`: the two-sheet workbook writer

pub mod styles;
pub mod xlsx;

pub use styles::{CellStyle, MONEY_FORMAT};
pub use xlsx::{export_report_xlsx, write_workbook, ExportedReport, SUMMARY_HEADERS, XLSX_MIME_TYPE};
