//! Output of scalability reports
//!
//! - **visualization**: PNG/SVG charts using plotters
//! - **naming**: deterministic chart file names
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── naming.rs           ← <metric>_<dataset>_<rows>.png
//! └── visualization/      ← Charts
//!     ├── mod.rs
//!     ├── config.rs
//!     └── scaling.rs
//! ```

pub mod visualization;
pub mod naming;

// Re-export commonly used items for convenience
pub use visualization::{plot_scaling, PlotConfig};
pub use naming::{chart_file_name, chart_path};
