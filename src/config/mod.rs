//! Configuration module for the royalty report
//!
//! Report labels, sheet names and the output file name.

pub mod settings;

pub use settings::Settings;
