//! Fixed dark theme for the embedded widget surface

/// Background behind the map and around the plot area.
pub const SURFACE_BG: &str = "#191A1A";

/// Translucent legend box.
pub const LEGEND_BG: &str = "rgba(0,0,0,0.5)";
pub const LEGEND_TEXT: &str = "white";

/// Legend anchor, fraction of the plot area from the bottom-left.
pub const LEGEND_X: f64 = 0.01;
pub const LEGEND_Y: f64 = 0.98;

/// Hover tooltip styling.
pub const HOVER_BG: &str = "white";
pub const HOVER_BORDER: &str = "black";
