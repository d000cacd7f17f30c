//! Royalty report - statement classifier and report builder
//!
//! This library turns a royalty statement into the spreadsheet the finance
//! team reconciles against. Each statement line is classified into a
//! financial category, aggregated per category, name and type, joined with
//! the payer directory and rendered as a styled two-sheet workbook.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Report settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions, periods)
//! - `services`: Statement import and classification
//! - `reports`: Aggregations over classified transactions
//! - `export`: Workbook rendering
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers for the `royalties` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use royalty_report::config::Settings;
//! use royalty_report::export::export_report_xlsx;
//! use royalty_report::models::PayerDirectory;
//! use royalty_report::reports::RoyaltyReport;
//! use royalty_report::services::{load_transactions, Upload};
//!
//! let upload = Upload::from_path("operacoes.xlsx".as_ref())?;
//! let transactions = load_transactions(&upload)?;
//! let settings = Settings::default();
//! let report = RoyaltyReport::generate(&transactions, &PayerDirectory::new(), None, &settings);
//! let exported = export_report_xlsx(&report, &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{RoyaltyError, RoyaltyResult};
