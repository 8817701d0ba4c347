//! Chart styling shared by the scalability plots

use plotters::prelude::*;

/// Configuration for customizing scalability charts
///
/// # Fields
///
/// - `width`, `height`: Image size in pixels, legend column included
/// - `title`: Figure title, drawn above both panels (the dataset key)
/// - `xlabel`: X-axis label shared by both panels
/// - `series_colors`: Optional colors, one per Tasksize series
/// - `background`: Background color
/// - `grid_color`: Base color of the mesh lines
/// - `line_width`, `marker_size`, `error_bar_width`: Series styling in pixels
/// - `legend_width`: Width of the legend column right of the panels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use nodescale::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::scaling("jacobi");
/// config.width = 1600;
/// config.series_colors = Some(vec![RED, BLUE, GREEN]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Figure title (default: "Scalability")
    pub title: String,

    /// X-axis label (default: "Nodes")
    pub xlabel: String,

    /// Optional colors, one per series
    ///
    /// If None, or shorter than the number of series, the default palette is used.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Grid line color (default: BLUE, drawn faint)
    pub grid_color: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels (default: 4)
    pub marker_size: i32,

    /// Error bar cap width in pixels (default: 8)
    pub error_bar_width: u32,

    /// Legend column width in pixels (default: 140)
    pub legend_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Scalability".to_string(),
            xlabel: "Nodes".to_string(),
            series_colors: None,
            background: WHITE,
            grid_color: BLUE,
            line_width: 2,
            marker_size: 4,
            error_bar_width: 8,
            legend_width: 140,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both strings and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for a scalability chart with an optional title
    ///
    /// The report driver passes the dataset key.
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::scaling("jacobi");
    /// let config = PlotConfig::scaling(NO_TITLE);   // "Scalability"
    /// ```
    pub fn scaling(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Create config with custom series colors
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Default::default()
        }
    }

    /// Width left for the two panels once the legend column is taken
    pub fn panel_width(&self) -> u32 {
        self.width.saturating_sub(self.legend_width)
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(color) = self
            .series_colors
            .as_ref()
            .and_then(|colors| colors.get(series_index))
        {
            return *color;
        }

        const DEFAULT_COLORS: [RGBColor; 10] = [
            RGBColor(31, 119, 180),  // Blue
            RGBColor(255, 127, 14),  // Orange
            RGBColor(44, 160, 44),   // Green
            RGBColor(214, 39, 40),   // Red
            RGBColor(148, 103, 189), // Purple
            RGBColor(140, 86, 75),   // Brown
            RGBColor(227, 119, 194), // Pink
            RGBColor(127, 127, 127), // Grey
            RGBColor(188, 189, 34),  // Olive
            RGBColor(23, 190, 207),  // Cyan
        ];

        DEFAULT_COLORS[series_index % DEFAULT_COLORS.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
