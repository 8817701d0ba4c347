//! Per-iteration timings and speedup against the single-node run
//!
//! For a record with mean `t`, standard deviation `σ`, `n` iterations and
//! `e` executions:
//!
//! - per-iteration value: $y = t / n$
//! - error bar: $\varepsilon = \sigma / (n \sqrt{e})$
//!
//! With $y_1$ the per-iteration value of the `worldsize == 1` run of the same
//! (Rows, Tasksize) group:
//!
//! - scalability: $s = y_1 / y$
//! - scalability error: $\varepsilon_s = s \cdot \varepsilon / y$

use crate::data::{BenchmarkRecord, BenchmarkTable};
use crate::error::{Error, Result};
use super::Metric;

// =================================================================================================
// Scalar formulas
// =================================================================================================

/// Mean time of one iteration
pub fn per_iteration(value: f64, iterations: u64) -> f64 {
    value / iterations as f64
}

/// Standard error of the per-iteration mean
///
/// A record claiming zero executions is treated as a single execution.
pub fn per_iteration_error(stdev: f64, iterations: u64, executions: u64) -> f64 {
    stdev / (iterations as f64 * (executions.max(1) as f64).sqrt())
}

/// Speedup of a run over the single-node baseline
pub fn scalability(baseline: f64, value: f64) -> f64 {
    baseline / value
}

/// Error of [`scalability`], propagated from the relative error of `value`
pub fn scalability_error(speedup: f64, value: f64, error: f64) -> f64 {
    speedup * error / value
}

// =================================================================================================
// Series and groups
// =================================================================================================

/// One plotted node count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingPoint {
    /// worldsize
    pub nodes: u64,
    /// Per-iteration metric value
    pub value: f64,
    pub error: f64,
    /// Baseline per-iteration value divided by `value`
    pub speedup: f64,
    pub speedup_error: f64,
}

/// All node counts of one Tasksize, ordered by increasing node count
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingSeries {
    pub tasksize: u64,
    pub points: Vec<ScalingPoint>,
}

/// Every Tasksize series for one Rows value; rendered as one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingGroup {
    pub rows: u64,
    pub metric: Metric,
    pub series: Vec<ScalingSeries>,
}

impl ScalingGroup {
    /// Smallest and largest node count across all series
    pub fn node_bounds(&self) -> Option<(u64, u64)> {
        let mut nodes = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.nodes));
        let first = nodes.next()?;
        Some(nodes.fold((first, first), |(lo, hi), n| (lo.min(n), hi.max(n))))
    }
}

/// Build the series of one (Rows, Tasksize) group
///
/// `records` must all belong to the group; their order does not matter.
///
/// # Errors
///
/// - [`Error::ZeroIterations`] if a record has `Iterations == 0`
/// - [`Error::MissingBaseline`] / [`Error::DuplicateBaseline`] unless exactly
///   one record has `worldsize == 1`
pub fn scaling_series(
    rows: u64,
    tasksize: u64,
    records: &[&BenchmarkRecord],
    metric: Metric,
) -> Result<ScalingSeries> {
    if let Some(record) = records.iter().find(|r| r.iterations == 0) {
        return Err(Error::ZeroIterations {
            rows,
            tasksize,
            worldsize: record.worldsize,
        });
    }

    let baselines: Vec<&&BenchmarkRecord> = records.iter().filter(|r| r.is_baseline()).collect();
    let baseline = match baselines.as_slice() {
        [single] => single,
        [] => return Err(Error::MissingBaseline { rows, tasksize }),
        many => {
            return Err(Error::DuplicateBaseline {
                rows,
                tasksize,
                count: many.len(),
            })
        }
    };
    let one = per_iteration(baseline.measurement(metric).value, baseline.iterations);

    let mut ordered = records.to_vec();
    ordered.sort_by_key(|r| r.worldsize);

    let points = ordered
        .iter()
        .map(|record| {
            let measurement = record.measurement(metric);
            let value = per_iteration(measurement.value, record.iterations);
            let error = per_iteration_error(measurement.stdev, record.iterations, record.executions);
            let speedup = scalability(one, value);
            ScalingPoint {
                nodes: record.worldsize,
                value,
                error,
                speedup,
                speedup_error: scalability_error(speedup, value, error),
            }
        })
        .collect();

    Ok(ScalingSeries { tasksize, points })
}

/// Group a table by Rows then Tasksize and compute every series for `metric`
///
/// Groups and series follow the first-appearance order of their keys in the table.
pub fn scaling_groups(table: &BenchmarkTable, metric: Metric) -> Result<Vec<ScalingGroup>> {
    table
        .distinct_rows()
        .into_iter()
        .map(|rows| -> Result<ScalingGroup> {
            let series = table
                .distinct_tasksizes(rows)
                .into_iter()
                .map(|tasksize| scaling_series(rows, tasksize, &table.group(rows, tasksize), metric))
                .collect::<Result<Vec<_>>>()?;
            log::debug!("{}: Rows={} has {} task sizes", metric, rows, series.len());
            Ok(ScalingGroup { rows, metric, series })
        })
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const TOLERANCE: f64 = 1e-12;

    fn record(rows: u64, tasksize: u64, worldsize: u64, iterations: u64, time: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            rows,
            tasksize,
            worldsize,
            iterations,
            algorithm_time: time,
            algorithm_time_stdev: time * 0.01,
            total_time: time * 1.2,
            total_time_stdev: time * 0.02,
            executions: 4,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_per_iteration_error_formula() {
        // 8 / (2 * sqrt(4)) = 2
        assert!((per_iteration_error(8.0, 2, 4) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_per_iteration_error_zero_executions_as_one() {
        assert!((per_iteration_error(8.0, 2, 0) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_scalability_error_propagation() {
        // s = 2, relative error of y = 0.1 → s_err = 0.2
        assert!((scalability_error(2.0, 5.0, 0.5) - 0.2).abs() < TOLERANCE);
    }

    #[test]
    fn test_series_sorted_by_nodes() {
        let r4 = record(1024, 32, 4, 10, 300.0);
        let r1 = record(1024, 32, 1, 10, 1000.0);
        let r2 = record(1024, 32, 2, 10, 550.0);

        let series = scaling_series(1024, 32, &[&r4, &r1, &r2], Metric::AlgorithmTime).unwrap();

        let nodes: Vec<u64> = series.points.iter().map(|p| p.nodes).collect();
        assert_eq!(nodes, vec![1, 2, 4]);
    }

    #[test]
    fn test_series_values_and_speedup() {
        let r1 = record(1024, 32, 1, 10, 1000.0);
        let r2 = record(1024, 32, 2, 20, 1000.0);

        let series = scaling_series(1024, 32, &[&r1, &r2], Metric::AlgorithmTime).unwrap();

        assert!((series.points[0].value - 100.0).abs() < TOLERANCE);
        assert!((series.points[0].speedup - 1.0).abs() < TOLERANCE);
        assert!((series.points[1].value - 50.0).abs() < TOLERANCE);
        assert!((series.points[1].speedup - 2.0).abs() < TOLERANCE);
        // stdev 10 / (20 * 2) = 0.25; speedup error = 2 * 0.25 / 50
        assert!((series.points[1].error - 0.25).abs() < TOLERANCE);
        assert!((series.points[1].speedup_error - 0.01).abs() < TOLERANCE);
    }

    #[test]
    fn test_series_uses_selected_metric() {
        let r1 = record(1024, 32, 1, 10, 1000.0);
        let series = scaling_series(1024, 32, &[&r1], Metric::TotalTime).unwrap();
        assert!((series.points[0].value - 120.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_missing_baseline() {
        let r2 = record(1024, 32, 2, 10, 500.0);
        let err = scaling_series(1024, 32, &[&r2], Metric::AlgorithmTime).unwrap_err();
        assert!(matches!(err, Error::MissingBaseline { rows: 1024, tasksize: 32 }));
    }

    #[test]
    fn test_duplicate_baseline() {
        let a = record(1024, 32, 1, 10, 1000.0);
        let b = record(1024, 32, 1, 10, 1010.0);
        let err = scaling_series(1024, 32, &[&a, &b], Metric::AlgorithmTime).unwrap_err();
        assert!(matches!(err, Error::DuplicateBaseline { count: 2, .. }));
    }

    #[test]
    fn test_zero_iterations() {
        let r1 = record(1024, 32, 1, 0, 1000.0);
        let err = scaling_series(1024, 32, &[&r1], Metric::AlgorithmTime).unwrap_err();
        assert!(matches!(err, Error::ZeroIterations { worldsize: 1, .. }));
    }

    #[test]
    fn test_groups_by_rows_then_tasksize() {
        let table = BenchmarkTable::new(vec![
            record(2048, 64, 1, 10, 800.0),
            record(1024, 32, 1, 10, 1000.0),
            record(1024, 16, 1, 10, 900.0),
            record(1024, 32, 2, 10, 600.0),
            record(2048, 64, 2, 10, 500.0),
        ]);

        let groups = scaling_groups(&table, Metric::AlgorithmTime).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].rows, 2048);
        assert_eq!(groups[1].rows, 1024);
        let tasksizes: Vec<u64> = groups[1].series.iter().map(|s| s.tasksize).collect();
        assert_eq!(tasksizes, vec![32, 16]);
        assert_eq!(groups[1].node_bounds(), Some((1, 2)));
    }

    #[test]
    fn test_node_bounds_empty_group() {
        let group = ScalingGroup { rows: 1, metric: Metric::TotalTime, series: Vec::new() };
        assert_eq!(group.node_bounds(), None);
    }
}
