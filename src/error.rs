//! Error types for loading, computing and rendering scalability reports.
//!
//! All library operations return [`Result<T>`]. Only [`Error::Inaccessible`]
//! is recovered from by the report driver; every other variant ends the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning benchmark files into charts.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("File not accessible: '{path}': {source}")]
    Inaccessible {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON array of benchmark records.
    #[error("Malformed benchmark data in '{key}': {source}")]
    Json {
        /// Dataset key the content was loaded under
        key: String,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// No dataset has been loaded under this key.
    #[error("Unknown dataset '{0}'")]
    UnknownDataset(String),

    /// No single-node run exists for a (Rows, Tasksize) group.
    #[error("No single-node baseline (worldsize == 1) for Rows={rows}, Tasksize={tasksize}")]
    MissingBaseline {
        /// Row count of the group
        rows: u64,
        /// Task size of the group
        tasksize: u64,
    },

    /// More than one single-node run exists for a (Rows, Tasksize) group.
    #[error("{count} single-node baselines for Rows={rows}, Tasksize={tasksize}; expected exactly one")]
    DuplicateBaseline {
        /// Row count of the group
        rows: u64,
        /// Task size of the group
        tasksize: u64,
        /// Number of worldsize == 1 records found
        count: usize,
    },

    /// A record reports zero iterations, so no per-iteration value exists.
    #[error("Zero iterations for Rows={rows}, Tasksize={tasksize}, worldsize={worldsize}")]
    ZeroIterations {
        /// Row count of the record
        rows: u64,
        /// Task size of the record
        tasksize: u64,
        /// Node count of the record
        worldsize: u64,
    },

    /// The plotting backend failed to draw or write a chart.
    #[error("Failed to render '{path}': {message}")]
    Render {
        /// Chart path being written
        path: PathBuf,
        /// Backend error message
        message: String,
    },
}

impl Error {
    /// Wrap an I/O failure on an input path.
    pub fn inaccessible(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Inaccessible {
            path: path.into(),
            source,
        }
    }

    /// Whether the driver should report this error and move on to the next input.
    pub fn is_inaccessible(&self) -> bool {
        matches!(self, Self::Inaccessible { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
