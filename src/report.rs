//! Report driver: benchmark files in, scalability charts out
//!
//! For every input file, in argument order:
//!
//! 1. load it into the dataset store (`Loading: <key>`)
//! 2. for each metric (`Algorithm time`, then `Total time`), compute the
//!    scaling groups and render one chart per Rows value (`Generated: <file>`)
//!
//! An input that cannot be opened prints `File not accessible` and the run
//! moves on to the next file. Any other error stops the run.
//!
//! # Example
//!
//! ```rust,no_run
//! use nodescale::report::{ReportConfig, Reporter};
//!
//! let mut reporter = Reporter::new(ReportConfig::default());
//! let summary = reporter.run(["jacobi.json", "matvec.json"])?;
//! println!("{} charts", summary.generated.len());
//! # Ok::<(), nodescale::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::data::{load_file, DatasetStore};
use crate::error::{Error, Result};
use crate::metrics::{scaling_groups, Metric};
use crate::output::{chart_file_name, plot_scaling, PlotConfig};

/// Where and how charts are written
#[derive(Clone)]
pub struct ReportConfig {
    /// Directory charts are written to (default: working directory)
    pub output_dir: PathBuf,

    /// Base chart styling; the title is replaced by the dataset key
    pub plot: PlotConfig,

    /// Metrics to chart, in order (default: both)
    pub metrics: Vec<Metric>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            plot: PlotConfig::default(),
            metrics: Metric::ALL.to_vec(),
        }
    }
}

impl ReportConfig {
    /// Default config writing into `output_dir`
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }
}

/// Outcome of [`Reporter::run`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Charts written, in generation order
    pub generated: Vec<PathBuf>,

    /// Inputs that could not be opened
    pub inaccessible: Vec<PathBuf>,
}

/// Loads benchmark files and renders their charts
pub struct Reporter {
    store: DatasetStore,
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            store: DatasetStore::new(),
            config,
        }
    }

    /// Datasets loaded so far
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Process every path in order, skipping inaccessible ones
    ///
    /// # Errors
    ///
    /// Any error other than [`Error::Inaccessible`] aborts the run.
    pub fn run<I, P>(&mut self, paths: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut summary = RunSummary::default();

        for path in paths {
            let path = path.as_ref();
            match self.process_file(path) {
                Ok(generated) => summary.generated.extend(generated),
                Err(err) if err.is_inaccessible() => {
                    log::debug!("{}", err);
                    println!("File not accessible");
                    summary.inaccessible.push(path.to_path_buf());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(summary)
    }

    /// Load one file and render all of its charts
    pub fn process_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let key = load_file(&mut self.store, path)?;
        self.render_dataset(&key)
    }

    /// Render every configured metric of a loaded dataset
    pub fn render_dataset(&self, key: &str) -> Result<Vec<PathBuf>> {
        let mut generated = Vec::new();
        for &metric in &self.config.metrics {
            generated.extend(self.render_metric(key, metric)?);
        }
        Ok(generated)
    }

    /// Render one chart per Rows value of a loaded dataset for `metric`
    ///
    /// Prints `Generated: <file>` after each chart is written.
    pub fn render_metric(&self, key: &str, metric: Metric) -> Result<Vec<PathBuf>> {
        let table = self
            .store
            .get(key)
            .ok_or_else(|| Error::UnknownDataset(key.to_string()))?;

        let mut plot_config = self.config.plot.clone();
        plot_config.title = key.to_string();

        let mut generated = Vec::new();
        for group in scaling_groups(table, metric)? {
            let file_name = chart_file_name(metric, key, group.rows);
            let path = self.config.output_dir.join(&file_name);

            plot_scaling(&group, &path, Some(&plot_config)).map_err(|e| Error::Render {
                path: path.clone(),
                message: e.to_string(),
            })?;

            println!("Generated: {}", file_name);
            generated.push(path);
        }

        Ok(generated)
    }
}
