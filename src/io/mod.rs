//! Input/output helpers.
//!
//! - CSV draw-matrix ingest + validation (`ingest`)
//! - result CSV / ratio-curve JSON exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
