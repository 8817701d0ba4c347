//! Benchmark data: records, tables and loading
//!
//! # Organization
//!
//! - **record**: one benchmark run (`BenchmarkRecord`)
//! - **table**: the runs of one input file (`BenchmarkTable`)
//! - **store**: every table loaded during a run, by dataset key (`DatasetStore`)
//! - **loader**: JSON file → table → store

pub mod record;
pub mod table;
pub mod store;
pub mod loader;

pub use record::{BenchmarkRecord, Measurement};
pub use table::BenchmarkTable;
pub use store::DatasetStore;
pub use loader::{dataset_key, load_file, load_reader};
