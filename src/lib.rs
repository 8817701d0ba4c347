//! nodescale: scalability charts for distributed benchmark campaigns
//!
//! Reads benchmark result files (JSON arrays of runs with their node count,
//! task size, row count, iterations and timings) and renders, for every row
//! count, a two-panel chart of per-iteration time and speedup versus node
//! count, one line per task size.
//!
//! # Architecture
//!
//! A single linear pipeline:
//!
//! 1. **Load**: each file becomes a [`BenchmarkTable`](data::BenchmarkTable)
//!    keyed by its file name without extension
//! 2. **Compute**: for each metric, group by Rows then Tasksize and derive
//!    per-iteration values and scalability against the single-node run
//! 3. **Render**: one PNG per (metric, dataset, Rows), named
//!    `<metric>_<dataset>_<rows>.png`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nodescale::prelude::*;
//!
//! # fn main() -> nodescale::Result<()> {
//! let mut reporter = Reporter::new(ReportConfig::default());
//! let summary = reporter.run(["results/jacobi.json"])?;
//!
//! for chart in &summary.generated {
//!     println!("{}", chart.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`data`]: Records, tables and the JSON loader
//! - [`metrics`]: Per-iteration and scalability computations
//! - [`output`]: Chart configuration, naming and rendering
//! - [`report`]: The pipeline driver used by the CLI

pub mod error;
pub mod data;
pub mod metrics;
pub mod output;
pub mod report;

pub use error::{Error, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use nodescale::prelude::*;
    //! ```
    pub use crate::data::{BenchmarkRecord,
                          BenchmarkTable,
                          DatasetStore,
                          load_file};
    pub use crate::metrics::{Metric,
                             ScalingGroup,
                             ScalingSeries,
                             ScalingPoint,
                             scaling_groups};
    pub use crate::output::{PlotConfig,
                            plot_scaling,
                            chart_file_name};
    pub use crate::report::{ReportConfig,
                            Reporter,
                            RunSummary};
    pub use crate::error::{Error, Result};
}
