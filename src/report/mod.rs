//! Reporting utilities: formatted terminal output for result tables.

pub mod format;

pub use format::*;
