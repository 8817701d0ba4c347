//! Common utilities for integration tests

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{record, write_dataset, JACOBI_RECORDS};
