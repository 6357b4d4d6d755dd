//! Synthetic draw generation (demo + tests).

pub mod sample;

pub use sample::*;
