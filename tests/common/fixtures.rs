//! Benchmark fixtures shaped like the harness output

use nodescale::data::BenchmarkRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Two row counts, two task sizes for 1024 rows, node counts 1/2/4
pub const JACOBI_RECORDS: &str = r#"[
    {"Rows": 1024, "Tasksize": 32, "worldsize": 1, "Iterations": 10,
     "Algorithm time": 1000.0, "Algorithm time stdev": 10.0,
     "Total time": 1200.0, "Total time stdev": 12.0, "executions": 4,
     "cpu_count": 48, "namespace_enabled": 1, "performance": 2.1},
    {"Rows": 1024, "Tasksize": 32, "worldsize": 2, "Iterations": 10,
     "Algorithm time": 560.0, "Algorithm time stdev": 8.0,
     "Total time": 760.0, "Total time stdev": 9.0, "executions": 4,
     "cpu_count": 96, "namespace_enabled": 1, "performance": 3.7},
    {"Rows": 1024, "Tasksize": 32, "worldsize": 4, "Iterations": 10,
     "Algorithm time": 310.0, "Algorithm time stdev": 6.0,
     "Total time": 520.0, "Total time stdev": 7.0, "executions": 4,
     "cpu_count": 192, "namespace_enabled": 1, "performance": 6.8},
    {"Rows": 1024, "Tasksize": 64, "worldsize": 4, "Iterations": 10,
     "Algorithm time": 350.0, "Algorithm time stdev": 5.0,
     "Total time": 540.0, "Total time stdev": 6.0, "executions": 4,
     "cpu_count": 192, "namespace_enabled": 1, "performance": 6.0},
    {"Rows": 1024, "Tasksize": 64, "worldsize": 1, "Iterations": 10,
     "Algorithm time": 980.0, "Algorithm time stdev": 9.0,
     "Total time": 1180.0, "Total time stdev": 11.0, "executions": 4,
     "cpu_count": 48, "namespace_enabled": 1, "performance": 2.2},
    {"Rows": 4096, "Tasksize": 128, "worldsize": 1, "Iterations": 5,
     "Algorithm time": 8000.0, "Algorithm time stdev": 80.0,
     "Total time": 9000.0, "Total time stdev": 90.0, "executions": 2,
     "cpu_count": 48, "namespace_enabled": 1, "performance": 2.0},
    {"Rows": 4096, "Tasksize": 128, "worldsize": 2, "Iterations": 5,
     "Algorithm time": 4200.0, "Algorithm time stdev": 60.0,
     "Total time": 5100.0, "Total time stdev": 70.0, "executions": 2,
     "cpu_count": 96, "namespace_enabled": 1, "performance": 3.8}
]"#;

/// Write `contents` to `<dir>/<name>` and return the path
pub fn write_dataset(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Record with the given configuration; Total time is Algorithm time + 20%
pub fn record(
    rows: u64,
    tasksize: u64,
    worldsize: u64,
    iterations: u64,
    algorithm_time: f64,
) -> BenchmarkRecord {
    BenchmarkRecord {
        rows,
        tasksize,
        worldsize,
        iterations,
        algorithm_time,
        algorithm_time_stdev: algorithm_time * 0.01,
        total_time: algorithm_time * 1.2,
        total_time_stdev: algorithm_time * 0.012,
        executions: 3,
        extra: BTreeMap::new(),
    }
}
