//! Service layer for the royalty report
//!
//! Loading of uploaded spreadsheets and classification of statement lines.

pub mod classifier;
pub mod import;

pub use classifier::{classify, classify_all, classify_transaction};
pub use import::{load_payer_directory, load_transactions, SourceFormat, Upload};
