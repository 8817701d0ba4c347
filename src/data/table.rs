//! In-memory table of benchmark runs
//!
//! Records keep the order they had in the input file. Grouping helpers return
//! distinct values in first-appearance order so charts list row counts and
//! task sizes the way the benchmark campaign produced them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::BenchmarkRecord;

/// Ordered collection of [`BenchmarkRecord`]s loaded from one file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkTable {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct `Rows` values, first appearance first
    pub fn distinct_rows(&self) -> Vec<u64> {
        distinct(self.records.iter().map(|r| r.rows))
    }

    /// Distinct `Tasksize` values among records with the given `Rows`
    pub fn distinct_tasksizes(&self, rows: u64) -> Vec<u64> {
        distinct(self.with_rows(rows).map(|r| r.tasksize))
    }

    /// Records with the given `Rows` value
    pub fn with_rows(&self, rows: u64) -> impl Iterator<Item = &BenchmarkRecord> + '_ {
        self.records.iter().filter(move |r| r.rows == rows)
    }

    /// Records of one (Rows, Tasksize) group, in file order
    pub fn group(&self, rows: u64, tasksize: u64) -> Vec<&BenchmarkRecord> {
        self.with_rows(rows)
            .filter(|r| r.tasksize == tasksize)
            .collect()
    }
}

impl From<Vec<BenchmarkRecord>> for BenchmarkTable {
    fn from(records: Vec<BenchmarkRecord>) -> Self {
        Self::new(records)
    }
}

fn distinct(values: impl Iterator<Item = u64>) -> Vec<u64> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

const HEADERS: [&str; 9] = [
    "Rows",
    "Tasksize",
    "worldsize",
    "Iterations",
    "Algorithm time",
    "Algorithm time stdev",
    "Total time",
    "Total time stdev",
    "executions",
];

impl fmt::Display for BenchmarkTable {
    /// Aligned text dump, one line per record, for diagnostics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 9]> = self
            .records
            .iter()
            .map(|r| {
                [
                    r.rows.to_string(),
                    r.tasksize.to_string(),
                    r.worldsize.to_string(),
                    r.iterations.to_string(),
                    format!("{:.3}", r.algorithm_time),
                    format!("{:.3}", r.algorithm_time_stdev),
                    format!("{:.3}", r.total_time),
                    format!("{:.3}", r.total_time_stdev),
                    r.executions.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| format!("{:>w$}", h, w = *w))
            .collect();
        writeln!(f, "{}", header.join("  "))?;

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| format!("{:>w$}", c, w = *w))
                .collect();
            writeln!(f, "{}", line.join("  "))?;
        }

        write!(f, "[{} rows]", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(rows: u64, tasksize: u64, worldsize: u64) -> BenchmarkRecord {
        BenchmarkRecord {
            rows,
            tasksize,
            worldsize,
            iterations: 10,
            algorithm_time: 100.0,
            algorithm_time_stdev: 1.0,
            total_time: 120.0,
            total_time_stdev: 1.5,
            executions: 4,
            extra: BTreeMap::new(),
        }
    }

    fn sample() -> BenchmarkTable {
        BenchmarkTable::new(vec![
            record(4096, 64, 1),
            record(1024, 32, 1),
            record(4096, 16, 1),
            record(1024, 32, 2),
            record(4096, 64, 2),
        ])
    }

    #[test]
    fn test_distinct_rows_first_appearance_order() {
        assert_eq!(sample().distinct_rows(), vec![4096, 1024]);
    }

    #[test]
    fn test_distinct_tasksizes_per_rows() {
        let table = sample();
        assert_eq!(table.distinct_tasksizes(4096), vec![64, 16]);
        assert_eq!(table.distinct_tasksizes(1024), vec![32]);
        assert!(table.distinct_tasksizes(8).is_empty());
    }

    #[test]
    fn test_group_filters_both_keys() {
        let table = sample();
        let group = table.group(4096, 64);
        assert_eq!(group.len(), 2);
        assert!(group.iter().all(|r| r.rows == 4096 && r.tasksize == 64));
    }

    #[test]
    fn test_display_has_header_and_footer() {
        let text = sample().to_string();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Algorithm time stdev"));
        assert_eq!(text.lines().count(), 1 + 5 + 1);
        assert!(text.ends_with("[5 rows]"));
    }

    #[test]
    fn test_deserialize_transparent_array() {
        let table: BenchmarkTable = serde_json::from_str("[]").unwrap();
        assert!(table.is_empty());
    }
}
