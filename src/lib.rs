//! `bayes-si` library crate.
//!
//! The binary (`si`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., embedding the interval math in another tool)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod density;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod si;
