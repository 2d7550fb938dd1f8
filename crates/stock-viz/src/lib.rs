//! Terminal charts and logging setup.

mod chart;
mod logging;

pub use chart::{bounds, series_points, ChartViewer, Panel};
pub use logging::setup_logging;
