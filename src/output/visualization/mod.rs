//! Visualization of scalability results
//!
//! This module renders [`ScalingGroup`](crate::metrics::ScalingGroup)s with
//! the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **scaling**: Two-panel time / scalability charts
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nodescale::output::visualization::{plot_scaling, PlotConfig};
//!
//! let groups = scaling_groups(&table, Metric::TotalTime)?;
//! let config = PlotConfig::scaling("jacobi");
//! plot_scaling(&groups[0], Path::new("Total_time_jacobi_1024.png"), Some(&config))?;
//! ```

pub mod config;
pub mod scaling;

pub use config::{PlotConfig, NO_TITLE};
pub use scaling::plot_scaling;
