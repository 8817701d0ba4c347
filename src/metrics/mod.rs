//! Scalability metrics derived from benchmark tables
//!
//! # Organization
//!
//! - [`Metric`]: which timing column to analyse
//! - **scaling**: per-iteration values, error bars and speedup against the
//!   single-node run, grouped by `Rows` then `Tasksize`
//!
//! # Usage
//!
//! ```rust,ignore
//! use nodescale::metrics::{scaling_groups, Metric};
//!
//! for group in scaling_groups(&table, Metric::AlgorithmTime)? {
//!     for series in &group.series {
//!         println!("Rows={} Tasksize={}: {:?}", group.rows, series.tasksize, series.points);
//!     }
//! }
//! ```

pub mod scaling;

pub use scaling::{
    per_iteration,
    per_iteration_error,
    scalability,
    scalability_error,
    scaling_groups,
    scaling_series,
    ScalingGroup,
    ScalingPoint,
    ScalingSeries,
};

use std::fmt;

/// Timing column of a benchmark record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Time spent in the algorithm proper
    AlgorithmTime,
    /// Wall time including data initialization
    TotalTime,
}

impl Metric {
    /// Every metric, in the order charts are produced
    pub const ALL: [Metric; 2] = [Metric::AlgorithmTime, Metric::TotalTime];

    /// Column name as it appears in the input
    pub fn column(self) -> &'static str {
        match self {
            Metric::AlgorithmTime => "Algorithm time",
            Metric::TotalTime => "Total time",
        }
    }

    /// Column name of the matching standard deviation
    pub fn stdev_column(self) -> String {
        format!("{} stdev", self.column())
    }

    /// Column name with spaces replaced by underscores, for file names
    pub fn file_stem(self) -> String {
        self.column().replace(' ', "_")
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
