//! Display formatting for terminal output
//!
//! Provides the on-screen rendering of a royalty report.

pub mod report;

pub use report::{
    format_category_summary, format_money, format_payer_summary, format_report,
    format_total_processed, format_type_totals,
};
