//! Render orchestrator and event bridges
//!
//! `PlotSync` is the single reactive component: it reacts to host data
//! changes behind a structural-equality redraw gate, replaces the chart
//! surface content with a freshly assembled scene, forwards viewport
//! resizes as layout-only calls, and writes selection gestures into the
//! host's output variables.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use gs_core::{
    ColumnBinding, DataSubscriber, HostBridge, ResizeSubscriber, RowSet, StyleConfig,
    SubscriptionGuard, VariableStore, FILTER_LATITUDE, FILTER_LONGITUDE,
};

use crate::scene::SceneDescription;
use crate::series::derive_series;
use crate::surface::{ChartSurface, SelectionEvent, SelectionHandler};
use crate::viewport::Viewport;

/// The widget core: one chart surface, one column binding, one style
/// configuration, and the host's output variable store.
pub struct PlotSync {
    surface: Mutex<Box<dyn ChartSurface>>,
    binding: ColumnBinding,
    style: StyleConfig,
    variables: Arc<VariableStore>,

    /// Last data snapshot observed; the sole redraw gate.
    prev_data: RwLock<Option<RowSet>>,

    /// Self-handle used to re-attach the selection handler after each
    /// draw replaces the surface content.
    weak_self: Weak<PlotSync>,
}

impl PlotSync {
    pub fn new(
        surface: Box<dyn ChartSurface>,
        binding: ColumnBinding,
        style: StyleConfig,
        variables: Arc<VariableStore>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            surface: Mutex::new(surface),
            binding,
            style,
            variables,
            prev_data: RwLock::new(None),
            weak_self: weak_self.clone(),
        })
    }

    /// Subscribe to the host's data and resize notifications.
    ///
    /// The returned guards scope the subscriptions to the component's
    /// active lifetime; dropping them (or the `PlotSync` itself) detaches
    /// it from the bridge.
    pub fn attach(self: &Arc<Self>, bridge: &HostBridge) -> [SubscriptionGuard; 2] {
        [
            bridge.subscribe_data(Arc::clone(self) as Arc<dyn DataSubscriber>),
            bridge.subscribe_resize(Arc::clone(self) as Arc<dyn ResizeSubscriber>),
        ]
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Recompute everything and replace the surface content.
    fn redraw(&self, data: &RowSet) {
        let series = match derive_series(data, &self.binding) {
            Ok(series) => series,
            Err(err) => {
                // Recoverable: leave the previous chart in place.
                warn!(%err, "skipping redraw");
                return;
            }
        };

        // The viewport fits the full ungrouped sequences; the series are
        // a partition of the rows, so their concatenation is exactly that.
        let lat: Vec<f64> = series.iter().flat_map(|s| s.lat.iter().copied()).collect();
        let lon: Vec<f64> = series.iter().flat_map(|s| s.lon.iter().copied()).collect();
        let viewport = Viewport::fit(&lat, &lon);

        let scene = SceneDescription::assemble(&series, viewport, &self.style);
        let handler = self
            .weak_self
            .upgrade()
            .map(|me| me as Arc<dyn SelectionHandler>);

        let mut surface = self.surface.lock();
        surface.set_access_token(&self.style.access_token);
        surface.draw(&scene);
        // The draw replaced the surface content, handlers included.
        surface.set_selection_handler(handler);

        info!(
            traces = scene.traces.len(),
            rows = lat.len(),
            zoom = viewport.zoom,
            "chart redrawn"
        );
    }
}

impl DataSubscriber for PlotSync {
    fn on_data_change(&self, data: &RowSet) {
        {
            let prev = self.prev_data.read();
            if prev.as_ref() == Some(data) {
                debug!("data snapshot unchanged, redraw suppressed");
                return;
            }
        }
        // The gate updates even when the redraw below is then skipped for
        // a missing column.
        *self.prev_data.write() = Some(data.clone());
        self.redraw(data);
    }
}

impl ResizeSubscriber for PlotSync {
    fn on_viewport_resize(&self, width: u32, height: u32) {
        debug!(width, height, "resizing chart surface");
        self.surface.lock().resize(width, height);
    }
}

impl SelectionHandler for PlotSync {
    fn on_selection_event(&self, event: &SelectionEvent) {
        match event {
            SelectionEvent::Selected(points) if !points.is_empty() => {
                let lat = join_coords(points.iter().map(|p| p.lat));
                let lon = join_coords(points.iter().map(|p| p.lon));
                debug!(count = points.len(), "selection written to output variables");
                self.variables.set(FILTER_LATITUDE, Some(lat));
                self.variables.set(FILTER_LONGITUDE, Some(lon));
            }
            SelectionEvent::Selected(_) | SelectionEvent::Cleared => {
                debug!("selection cleared, output variables reset");
                self.variables.set(FILTER_LATITUDE, None);
                self.variables.set(FILTER_LONGITUDE, None);
            }
        }
    }
}

fn join_coords(values: impl Iterator<Item = f64>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
