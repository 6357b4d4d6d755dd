//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input containers (`ParameterSet`)
//! - result types (`SupportInterval`, `ResultRow`, `SiTable`, `RatioCurve`)
//! - the structured diagnostics channel (`Diagnostic`)
//! - computation options (`SiOptions`)

pub mod types;

pub use types::*;
