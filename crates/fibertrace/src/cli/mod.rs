//! CLI command implementations.

mod display;

pub mod audit;
pub mod stats;
pub mod trace;
