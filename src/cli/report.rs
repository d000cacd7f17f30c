//! CLI command for the royalty report
//!
//! Loads the statement and the optional payer directory, prints the
//! on-screen summary and writes the workbook to the output directory.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::format_report;
use crate::error::{RoyaltyError, RoyaltyResult};
use crate::export::export_report_xlsx;
use crate::models::{PayerDirectory, ReportPeriod};
use crate::reports::RoyaltyReport;
use crate::services::{load_payer_directory, load_transactions, Upload};

/// Arguments of `royalties report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Statement spreadsheet with RightsHolder, Type, Name and Amount columns
    pub operations: PathBuf,

    /// Payer directory spreadsheet with Name and Payer columns
    #[arg(long)]
    pub payers: Option<PathBuf>,

    /// Reporting period (e.g., "2025-01" for January 2025)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Directory the workbook is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Handle the report command, returning the path of the written workbook
pub fn handle_report_command(
    args: ReportArgs,
    settings: &Settings,
    quiet: bool,
) -> RoyaltyResult<PathBuf> {
    let period = args.period.as_deref().map(parse_period).transpose()?;

    let operations = Upload::from_path(&args.operations)?;
    let transactions = load_transactions(&operations)?;

    let directory = match &args.payers {
        Some(path) => load_payer_directory(&Upload::from_path(path)?)?,
        None => PayerDirectory::new(),
    };

    let report = RoyaltyReport::generate(&transactions, &directory, period, settings);

    if !quiet {
        println!("{}", format_report(&report, settings));
    }

    let exported = export_report_xlsx(&report, settings)?;
    let path = write_output(&args.output_dir, &exported.file_name, &exported.bytes)?;

    println!("Report written to: {}", path.display());
    Ok(path)
}

fn parse_period(value: &str) -> RoyaltyResult<ReportPeriod> {
    ReportPeriod::parse(value).map_err(|e| {
        RoyaltyError::Validation(format!(
            "Invalid period format: {}. Use YYYY-MM (e.g., 2025-01)",
            e
        ))
    })
}

fn write_output(dir: &Path, file_name: &str, bytes: &[u8]) -> RoyaltyResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        RoyaltyError::Export(format!(
            "Failed to create directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|e| {
        RoyaltyError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), "wrote report");
    Ok(path)
}
