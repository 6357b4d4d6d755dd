//! Support-interval computation.
//!
//! Responsibilities:
//!
//! - build a robust, shared evaluation grid for a prior/posterior sample pair
//! - evaluate the pointwise posterior/prior density ratio on it
//! - extract the region(s) where the ratio clears a BF threshold
//! - drive the computation across parameters and thresholds (parallel)

pub mod batch;
pub mod driver;
pub mod grid;
pub mod ratio;
pub mod region;

pub use batch::*;
pub use driver::*;
pub use grid::*;
pub use ratio::*;
pub use region::*;
