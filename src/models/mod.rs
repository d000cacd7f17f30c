//! Core data models for the royalty report
//!
//! This module contains the data structures of the royalty domain:
//! statement lines, categories, payers, money and report periods.

pub mod category;
pub mod money;
pub mod payer;
pub mod period;
pub mod transaction;

pub use category::Category;
pub use money::Money;
pub use payer::PayerDirectory;
pub use period::ReportPeriod;
pub use transaction::{ClassifiedTransaction, Transaction};
