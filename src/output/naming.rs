//! Chart file names
//!
//! Names are `<metric>_<dataset>_<rows>.png` with spaces in the metric
//! replaced by underscores, e.g. `Algorithm_time_jacobi_1024.png`.
//! Regenerating a chart overwrites the previous file.

use std::path::{Path, PathBuf};

use crate::metrics::Metric;

/// File name of the chart for one (metric, dataset, Rows) combination
pub fn chart_file_name(metric: Metric, dataset_key: &str, rows: u64) -> String {
    format!("{}_{}_{}.png", metric.file_stem(), dataset_key, rows)
}

/// [`chart_file_name`] joined onto `output_dir`
pub fn chart_path(output_dir: &Path, metric: Metric, dataset_key: &str, rows: u64) -> PathBuf {
    output_dir.join(chart_file_name(metric, dataset_key, rows))
}
