//! Headless demo: replay a widget session from a CSV file
//!
//! Loads a CSV into a RowSet, wires PlotSync to a console-logging chart
//! surface, and replays a scripted session: data change (twice, to show
//! the redraw gate), a viewport resize, a lasso over the first two points
//! and an explicit deselect.

use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::info;

use gs_core::{
    AccessToken, ColumnBinding, HostBridge, MapStyle, RowSet, StyleConfig, VariableStore,
    FILTER_LATITUDE, FILTER_LONGITUDE,
};
use gs_plot::{
    ChartSurface, PlotSync, SceneDescription, SelectedPoint, SelectionEvent, SelectionHandler,
};

/// State a real surface would keep internally, shared so the demo can
/// replay gestures against the installed handler.
#[derive(Default)]
struct SurfaceState {
    last_scene: Option<SceneDescription>,
    handler: Option<Arc<dyn SelectionHandler>>,
}

/// Chart surface that logs every call instead of rendering.
#[derive(Default)]
struct ConsoleSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl ConsoleSurface {
    fn state(&self) -> Arc<Mutex<SurfaceState>> {
        self.state.clone()
    }
}

impl ChartSurface for ConsoleSurface {
    fn set_access_token(&mut self, token: &AccessToken) {
        info!(configured = !token.is_empty(), "access token set");
    }

    fn draw(&mut self, scene: &SceneDescription) {
        info!(
            traces = scene.traces.len(),
            style = scene.layout.mapbox.style,
            zoom = scene.layout.mapbox.zoom,
            "surface redrawn"
        );
        self.state.lock().last_scene = Some(scene.clone());
    }

    fn resize(&mut self, width: u32, height: u32) {
        info!(width, height, "surface resized");
    }

    fn set_selection_handler(&mut self, handler: Option<Arc<dyn SelectionHandler>>) {
        self.state.lock().handler = handler;
    }
}

/// Read a CSV file into a RowSet, one column per header.
fn load_rowset(path: &Path) -> Result<RowSet> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, cell) in record.iter().enumerate() {
            if idx < columns.len() {
                columns[idx].push(parse_cell(cell));
            }
        }
    }

    let mut data = RowSet::new();
    for (header, cells) in headers.into_iter().zip(columns) {
        data.insert_column(header, cells);
    }
    Ok(data)
}

/// Empty cells become null, numeric cells become numbers, everything else
/// stays a string.
fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match cell.parse::<f64>() {
        Ok(number) => serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Err(_) => Value::String(cell.to_string()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (path, lat, lon, legend) = match args.as_slice() {
        [path, lat, lon] => (path.clone(), lat.clone(), lon.clone(), None),
        [path, lat, lon, legend] => (path.clone(), lat.clone(), lon.clone(), Some(legend.clone())),
        _ => bail!("usage: gs-app <data.csv> <lat-column> <lon-column> [legend-column]"),
    };

    let mut binding = ColumnBinding::new(lat, lon);
    if let Some(legend) = legend {
        binding = binding.with_legend(legend);
    }

    let style = StyleConfig {
        map_style: MapStyle::parse(&env::var("MAP_STYLE").unwrap_or_else(|_| "light".into())),
        show_legend: true,
        access_token: AccessToken::new(env::var("MAPBOX_ACCESS_TOKEN").unwrap_or_default()),
    };

    let data = load_rowset(Path::new(&path))?;
    info!(
        rows = data.row_count(),
        columns = data.column_count(),
        "data loaded"
    );

    let surface = ConsoleSurface::default();
    let state = surface.state();
    let variables = Arc::new(VariableStore::new());
    let bridge = HostBridge::new();

    let sync = PlotSync::new(Box::new(surface), binding, style, variables.clone());
    let _guards = sync.attach(&bridge);

    // Initial render, plus a duplicate notification to show the gate.
    bridge.notify_data_change(&data);
    bridge.notify_data_change(&data);
    bridge.notify_resize(1280, 720);

    // Replay a lasso over the first two points of the first trace.
    let gesture: Vec<SelectedPoint> = {
        let state = state.lock();
        let scene = state.last_scene.as_ref().context("no scene was drawn")?;
        let trace = scene.traces.first().context("scene has no traces")?;
        trace
            .lat
            .iter()
            .zip(&trace.lon)
            .take(2)
            .map(|(&lat, &lon)| SelectedPoint { lat, lon })
            .collect()
    };

    let handler = state
        .lock()
        .handler
        .clone()
        .context("no selection handler was attached")?;

    handler.on_selection_event(&SelectionEvent::Selected(gesture));
    info!(
        filter_latitude = ?variables.get(FILTER_LATITUDE),
        filter_longitude = ?variables.get(FILTER_LONGITUDE),
        "after selection"
    );

    handler.on_selection_event(&SelectionEvent::Cleared);
    info!(
        filter_latitude = ?variables.get(FILTER_LATITUDE),
        filter_longitude = ?variables.get(FILTER_LONGITUDE),
        "after deselect"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_kinds() {
        assert_eq!(parse_cell(""), Value::Null);
        assert_eq!(parse_cell("12.5"), serde_json::json!(12.5));
        assert_eq!(parse_cell("Oslo"), serde_json::json!("Oslo"));
    }
}
