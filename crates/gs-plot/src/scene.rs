//! Declarative scene description handed to the chart surface
//!
//! The whole bundle serializes to the JSON shape a map-capable scatter
//! renderer expects, so concrete surfaces can forward it verbatim.

use serde::Serialize;

use gs_core::StyleConfig;

use crate::series::Series;
use crate::theme;
use crate::viewport::Viewport;

/// The declarative bundle of traces + layout for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl SceneDescription {
    /// Assemble the scene for one redraw: one geographic scatter trace
    /// per series, the fitted viewport, and the fixed dark theme.
    pub fn assemble(series: &[Series], viewport: Viewport, style: &StyleConfig) -> Self {
        Self {
            traces: series.iter().map(Trace::from_series).collect(),
            layout: Layout::new(viewport, style),
        }
    }
}

/// One drawable geographic scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl Trace {
    fn from_series(series: &Series) -> Self {
        Self {
            trace_type: "scattermapbox",
            name: series.display_name(),
            lat: series.lat.clone(),
            lon: series.lon.clone(),
        }
    }
}

/// Layout object carrying the viewport and the fixed theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub dragmode: &'static str,
    pub mapbox: MapboxView,
    pub margin: Margin,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub autosize: bool,
    pub legend: LegendBox,
    pub hoverlabel: HoverLabel,
}

impl Layout {
    fn new(viewport: Viewport, style: &StyleConfig) -> Self {
        Self {
            dragmode: "zoom",
            mapbox: MapboxView {
                center: Center {
                    lat: viewport.center_lat,
                    lon: viewport.center_lon,
                },
                domain: Domain {
                    x: [0.0, 1.0],
                    y: [0.0, 1.0],
                },
                style: style.map_style.as_str(),
                zoom: viewport.zoom,
            },
            margin: Margin::zero(),
            paper_bgcolor: theme::SURFACE_BG,
            plot_bgcolor: theme::SURFACE_BG,
            autosize: true,
            legend: LegendBox {
                x: theme::LEGEND_X,
                y: theme::LEGEND_Y,
                bgcolor: theme::LEGEND_BG,
                font: Font {
                    color: theme::LEGEND_TEXT,
                },
                visible: style.show_legend,
            },
            hoverlabel: HoverLabel {
                bgcolor: theme::HOVER_BG,
                bordercolor: theme::HOVER_BORDER,
            },
        }
    }
}

/// Map pane: camera, pane extent and tile style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapboxView {
    pub center: Center,
    pub domain: Domain,
    pub style: &'static str,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// Pane extent as fractions of the surface; the map fills it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Margins pinned to zero: the map is the whole widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub pad: u32,
}

impl Margin {
    fn zero() -> Self {
        Self { r: 0, t: 0, b: 0, l: 0, pad: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendBox {
    pub x: f64,
    pub y: f64,
    pub bgcolor: &'static str,
    pub font: Font,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::MapStyle;
    use serde_json::json;

    fn viewport() -> Viewport {
        Viewport {
            center_lat: 20.0,
            center_lon: 110.0,
            zoom: 3.17,
        }
    }

    fn one_series() -> Vec<Series> {
        vec![Series {
            label: json!("A"),
            rows: vec![0, 2],
            lat: vec![10.0, 30.0],
            lon: vec![100.0, 120.0],
        }]
    }

    #[test]
    fn test_one_trace_per_series() {
        let scene = SceneDescription::assemble(&one_series(), viewport(), &StyleConfig::default());

        assert_eq!(scene.traces.len(), 1);
        assert_eq!(scene.traces[0].trace_type, "scattermapbox");
        assert_eq!(scene.traces[0].name, "A");
        assert_eq!(scene.traces[0].lat, vec![10.0, 30.0]);
    }

    #[test]
    fn test_invalid_style_renders_as_light() {
        let style = StyleConfig {
            map_style: MapStyle::parse("foo"),
            ..StyleConfig::default()
        };
        let scene = SceneDescription::assemble(&one_series(), viewport(), &style);

        assert_eq!(scene.layout.mapbox.style, "light");
    }

    #[test]
    fn test_layout_carries_viewport_and_theme() {
        let scene = SceneDescription::assemble(&one_series(), viewport(), &StyleConfig::default());
        let layout = &scene.layout;

        assert_eq!(layout.mapbox.center.lat, 20.0);
        assert_eq!(layout.mapbox.center.lon, 110.0);
        assert_eq!(layout.mapbox.zoom, 3.17);
        assert_eq!(layout.paper_bgcolor, "#191A1A");
        assert_eq!(layout.margin, Margin::zero());
        assert!(layout.legend.visible);
        assert!(layout.autosize);
    }

    #[test]
    fn test_legend_visibility_follows_config() {
        let style = StyleConfig {
            show_legend: false,
            ..StyleConfig::default()
        };
        let scene = SceneDescription::assemble(&one_series(), viewport(), &style);

        assert!(!scene.layout.legend.visible);
    }

    #[test]
    fn test_scene_serializes_to_renderer_json() {
        let scene = SceneDescription::assemble(&one_series(), viewport(), &StyleConfig::default());
        let value = serde_json::to_value(&scene).unwrap();

        assert_eq!(value["traces"][0]["type"], "scattermapbox");
        assert_eq!(value["layout"]["dragmode"], "zoom");
        assert_eq!(value["layout"]["mapbox"]["domain"]["x"], json!([0.0, 1.0]));
        assert_eq!(value["layout"]["legend"]["bgcolor"], "rgba(0,0,0,0.5)");
        assert_eq!(value["layout"]["hoverlabel"]["bgcolor"], "white");
    }
}
