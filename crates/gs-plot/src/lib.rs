//! PlotSync: the reactive core of the map scatter widget
//!
//! Derives renderable series from host-supplied tabular data, computes a
//! viewport that frames all points, issues declarative redraws to an
//! opaque chart surface, and bridges selection gestures back into host
//! output variables.

pub mod scene;
pub mod series;
pub mod surface;
pub mod sync;
pub mod theme;
pub mod viewport;

// Re-export commonly used types
pub use scene::{Layout, MapboxView, SceneDescription, Trace};
pub use series::{derive_series, Series};
pub use surface::{ChartSurface, SelectedPoint, SelectionEvent, SelectionHandler};
pub use sync::PlotSync;
pub use viewport::Viewport;
