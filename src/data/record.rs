//! A single benchmark run as reported by the benchmark harness

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::metrics::Metric;

/// One benchmark run: a (Rows, Tasksize, worldsize) configuration and its timings
///
/// Field names follow the JSON keys emitted by the benchmark harness.
/// Keys this type does not model (`cpu_count`, `performance`, ...) are kept
/// in [`extra`](Self::extra) and otherwise ignored.
///
/// # Example
///
/// ```rust
/// use nodescale::data::BenchmarkRecord;
///
/// let record: BenchmarkRecord = serde_json::from_str(r#"{
///     "Rows": 1024, "Tasksize": 32, "worldsize": 2, "Iterations": 10,
///     "Algorithm time": 2000.0, "Algorithm time stdev": 40.0,
///     "Total time": 2500.0, "Total time stdev": 50.0,
///     "executions": 4
/// }"#).unwrap();
///
/// assert_eq!(record.worldsize, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Problem size (matrix rows)
    #[serde(rename = "Rows")]
    pub rows: u64,

    /// Unit-of-work granularity
    #[serde(rename = "Tasksize")]
    pub tasksize: u64,

    /// Number of nodes the run used
    pub worldsize: u64,

    /// Algorithm iterations per execution
    #[serde(rename = "Iterations")]
    pub iterations: u64,

    /// Mean time spent in the algorithm
    #[serde(rename = "Algorithm time")]
    pub algorithm_time: f64,

    #[serde(rename = "Algorithm time stdev")]
    pub algorithm_time_stdev: f64,

    /// Mean wall time including initialization
    #[serde(rename = "Total time")]
    pub total_time: f64,

    #[serde(rename = "Total time stdev")]
    pub total_time_stdev: f64,

    /// Number of repetitions the means were taken over
    pub executions: u64,

    /// Unmodelled columns, kept as reported
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Mean and standard deviation of one metric column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub stdev: f64,
}

impl BenchmarkRecord {
    /// Read the mean and stdev columns for `metric`
    pub fn measurement(&self, metric: Metric) -> Measurement {
        match metric {
            Metric::AlgorithmTime => Measurement {
                value: self.algorithm_time,
                stdev: self.algorithm_time_stdev,
            },
            Metric::TotalTime => Measurement {
                value: self.total_time,
                stdev: self.total_time_stdev,
            },
        }
    }

    /// Whether this is a single-node run
    pub fn is_baseline(&self) -> bool {
        self.worldsize == 1
    }
}
