//! Viewport fit: center and zoom framing all data points

use tracing::debug;

/// Zoom ceiling handed to the renderer; a zero-span axis would otherwise
/// produce an infinite zoom.
pub const MAX_ZOOM: f64 = 20.0;

/// Zoom floor (fully zoomed out).
pub const MIN_ZOOM: f64 = 0.0;

/// Computed center and zoom level framing all data points.
///
/// The center is a flat arithmetic mean, not geodesic; acceptable at the
/// scale of typical inputs, degenerate near the antimeridian and poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
}

impl Viewport {
    /// Fit the full ungrouped coordinate sequences.
    ///
    /// zoom = min(log2(360 / latSpan), log2(180 / lonSpan)), the more
    /// conservative of the two axis fits, clamped into
    /// [`MIN_ZOOM`, `MAX_ZOOM`]. Callers guarantee non-empty input.
    pub fn fit(lat: &[f64], lon: &[f64]) -> Self {
        let lat_zoom = (360.0 / span(lat)).log2();
        let lon_zoom = (180.0 / span(lon)).log2();

        Self {
            center_lat: mean(lat),
            center_lon: mean(lon),
            zoom: clamp_zoom(lat_zoom.min(lon_zoom)),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn span(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    max - min
}

/// Keep the renderer's zoom finite: +inf (zero-span axis) clamps to
/// [`MAX_ZOOM`], NaN (non-numeric coordinates) falls back to fully
/// zoomed out.
fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        debug!("zoom is undefined for this input, falling back to minimum");
        return MIN_ZOOM;
    }
    let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    if clamped != zoom {
        debug!(zoom, clamped, "zoom clamped to renderer range");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fit_matches_formula() {
        let lat = [10.0, 20.0, 30.0];
        let lon = [100.0, 110.0, 120.0];
        let viewport = Viewport::fit(&lat, &lon);

        assert!((viewport.center_lat - 20.0).abs() < EPS);
        assert!((viewport.center_lon - 110.0).abs() < EPS);
        // min(log2(360/20), log2(180/20)) = log2(9)
        assert!((viewport.zoom - 9.0_f64.log2()).abs() < EPS);
    }

    #[test]
    fn test_longitude_axis_can_dominate() {
        // Narrow longitude span, wide latitude span: latitude axis wins.
        let lat = [-60.0, 60.0];
        let lon = [10.0, 11.0];
        let viewport = Viewport::fit(&lat, &lon);

        assert!((viewport.zoom - 3.0_f64.log2()).abs() < EPS);
    }

    #[test]
    fn test_zero_span_clamps_to_max_zoom() {
        let lat = [45.0, 45.0];
        let lon = [7.0, 7.0];
        let viewport = Viewport::fit(&lat, &lon);

        assert_eq!(viewport.zoom, MAX_ZOOM);
        assert!((viewport.center_lat - 45.0).abs() < EPS);
    }

    #[test]
    fn test_nan_coordinates_never_leak_into_zoom() {
        let lat = [f64::NAN, 10.0];
        let lon = [1.0, 2.0];
        let viewport = Viewport::fit(&lat, &lon);

        assert!(viewport.zoom.is_finite());
    }

    #[test]
    fn test_single_point_is_finite() {
        let viewport = Viewport::fit(&[51.5], &[-0.1]);

        assert_eq!(viewport.zoom, MAX_ZOOM);
        assert!((viewport.center_lon + 0.1).abs() < EPS);
    }
}
