//! Trait boundary to the opaque chart rendering surface
//!
//! The core treats the renderer as a sink for two calls (draw, resize)
//! and a source of one notification type (selection gestures). Nothing
//! about tiles, projections or rasterization leaks through this seam.

use std::sync::Arc;

use gs_core::AccessToken;

use crate::scene::SceneDescription;

/// One point reported by a selection gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Selection notifications emitted by the chart surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// A lasso/box gesture completed with the given points, in gesture
    /// order. An empty list is an explicit "nothing selected".
    Selected(Vec<SelectedPoint>),

    /// The selection was explicitly cleared.
    Cleared,
}

/// Receives selection gestures from the surface.
///
/// The handler is re-attached after every redraw because a draw replaces
/// the entire surface content, handlers included.
pub trait SelectionHandler: Send + Sync {
    fn on_selection_event(&self, event: &SelectionEvent);
}

/// The opaque chart rendering surface.
pub trait ChartSurface: Send {
    /// Set the tile-provider access token. Must be active before the
    /// first draw; the orchestrator sets it before every draw.
    fn set_access_token(&mut self, token: &AccessToken);

    /// Replace the entire surface content with the given scene.
    fn draw(&mut self, scene: &SceneDescription);

    /// Layout-only resize to the given pixel dimensions; never touches
    /// the drawn data.
    fn resize(&mut self, width: u32, height: u32);

    /// Install the handler receiving selection gestures, replacing any
    /// previous one. `None` detaches.
    fn set_selection_handler(&mut self, handler: Option<Arc<dyn SelectionHandler>>);
}
