//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core logic for each shotname operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod run;

pub use run::{run_operation, RunEvent};
