//! Series derivation: grouping rows by legend value

use serde_json::Value;

use gs_core::{ColumnBinding, ColumnRole, PlotError, RowSet};

/// One same-legend-value subset of rows, rendered as one trace.
///
/// Series are ephemeral: recomputed in full on every data or config
/// change, never mutated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend value labeling this series; `Null` for the implicit
    /// unnamed series when no legend column is bound.
    pub label: Value,

    /// Original row indices belonging to this series, in row order.
    pub rows: Vec<usize>,

    /// Latitudes projected at `rows`, preserving index order.
    pub lat: Vec<f64>,

    /// Longitudes projected at `rows`, preserving index order.
    pub lon: Vec<f64>,
}

impl Series {
    /// Human-readable trace name; the null legend renders unnamed.
    pub fn display_name(&self) -> String {
        match &self.label {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project one cell to a coordinate.
///
/// Non-numeric cells project as NaN so positional alignment with the row
/// indices is preserved.
pub(crate) fn cell_coord(cell: &Value) -> f64 {
    cell.as_f64().unwrap_or(f64::NAN)
}

/// Group rows by legend value and project their coordinates.
///
/// Groups appear in first-seen order of distinct legend values scanning
/// rows from the top; key equality is deep value equality, so a null cell
/// groups with other nulls. When no legend column is bound (or its
/// sequence is missing) every row falls into one unnamed series.
///
/// Missing or empty latitude/longitude sequences abort the derivation;
/// the caller recovers by skipping the redraw.
pub fn derive_series(data: &RowSet, binding: &ColumnBinding) -> Result<Vec<Series>, PlotError> {
    let lat = bound_column(data, &binding.latitude, ColumnRole::Latitude)?;
    let lon = bound_column(data, &binding.longitude, ColumnRole::Longitude)?;

    let legend = binding
        .legend
        .as_deref()
        .and_then(|id| data.column(id));

    static NULL_CELL: Value = Value::Null;

    let mut series: Vec<Series> = Vec::new();
    for row in 0..lat.len() {
        let label = legend.and_then(|cells| cells.get(row)).unwrap_or(&NULL_CELL);

        let idx = match series.iter().position(|s| s.label == *label) {
            Some(idx) => idx,
            None => {
                series.push(Series {
                    label: label.clone(),
                    rows: Vec::new(),
                    lat: Vec::new(),
                    lon: Vec::new(),
                });
                series.len() - 1
            }
        };

        let group = &mut series[idx];
        group.rows.push(row);
        group.lat.push(cell_coord(&lat[row]));
        group.lon.push(lon.get(row).map(cell_coord).unwrap_or(f64::NAN));
    }

    Ok(series)
}

fn bound_column<'a>(
    data: &'a RowSet,
    id: &str,
    role: ColumnRole,
) -> Result<&'a [Value], PlotError> {
    match data.column(id) {
        Some(cells) if !cells.is_empty() => Ok(cells),
        _ => Err(PlotError::MissingRequiredColumn { role }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_data() -> RowSet {
        RowSet::new()
            .with_column("lat", vec![json!(10.0), json!(20.0), json!(30.0)])
            .with_column("lon", vec![json!(100.0), json!(110.0), json!(120.0)])
            .with_column("legend", vec![json!("A"), json!("B"), json!("A")])
    }

    fn binding() -> ColumnBinding {
        ColumnBinding::new("lat", "lon").with_legend("legend")
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let series = derive_series(&sample_data(), &binding()).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, json!("A"));
        assert_eq!(series[0].rows, vec![0, 2]);
        assert_eq!(series[0].lat, vec![10.0, 30.0]);
        assert_eq!(series[0].lon, vec![100.0, 120.0]);
        assert_eq!(series[1].label, json!("B"));
        assert_eq!(series[1].rows, vec![1]);
        assert_eq!(series[1].lat, vec![20.0]);
        assert_eq!(series[1].lon, vec![110.0]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let series = derive_series(&sample_data(), &binding()).unwrap();

        let mut all_rows: Vec<usize> = series.iter().flat_map(|s| s.rows.clone()).collect();
        all_rows.sort_unstable();
        assert_eq!(all_rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_unbound_legend_yields_one_unnamed_series() {
        let series = derive_series(&sample_data(), &ColumnBinding::new("lat", "lon")).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, Value::Null);
        assert_eq!(series[0].display_name(), "");
        assert_eq!(series[0].rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_null_legend_cells_group_together() {
        let data = sample_data().with_column(
            "legend",
            vec![json!(null), json!("A"), json!(null)],
        );
        let series = derive_series(&data, &binding()).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, Value::Null);
        assert_eq!(series[0].rows, vec![0, 2]);
        assert_eq!(series[1].rows, vec![1]);
    }

    #[test]
    fn test_missing_latitude_is_an_error() {
        let data = RowSet::new().with_column("lon", vec![json!(1.0)]);
        let err = derive_series(&data, &binding()).unwrap_err();

        assert!(matches!(
            err,
            PlotError::MissingRequiredColumn { role: ColumnRole::Latitude }
        ));
    }

    #[test]
    fn test_empty_longitude_is_an_error() {
        let data = RowSet::new()
            .with_column("lat", vec![json!(1.0)])
            .with_column("lon", Vec::new());
        let err = derive_series(&data, &binding()).unwrap_err();

        assert!(matches!(
            err,
            PlotError::MissingRequiredColumn { role: ColumnRole::Longitude }
        ));
    }

    #[test]
    fn test_non_numeric_coordinates_project_as_nan() {
        let data = RowSet::new()
            .with_column("lat", vec![json!("north"), json!(2.0)])
            .with_column("lon", vec![json!(5.0), json!(6.0)]);
        let series = derive_series(&data, &ColumnBinding::new("lat", "lon")).unwrap();

        assert!(series[0].lat[0].is_nan());
        assert_eq!(series[0].lat[1], 2.0);
    }

    #[test]
    fn test_numeric_legend_display_name() {
        let data = sample_data().with_column("legend", vec![json!(7), json!(7), json!(8)]);
        let series = derive_series(&data, &binding()).unwrap();

        assert_eq!(series[0].display_name(), "7");
        assert_eq!(series[1].display_name(), "8");
    }
}
