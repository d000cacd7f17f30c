//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod classify;
pub mod report;

pub use classify::handle_classify_command;
pub use report::{handle_report_command, ReportArgs};
