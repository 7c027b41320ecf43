//! Tabular data and column bindings supplied by the host

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical roles a bound column can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Latitude,
    Longitude,
    Legend,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRole::Latitude => write!(f, "latitude"),
            ColumnRole::Longitude => write!(f, "longitude"),
            ColumnRole::Legend => write!(f, "legend"),
        }
    }
}

/// Mapping from logical roles to column identifiers in the bound source.
///
/// Legend is optional; when unbound, every row belongs to one implicit
/// unnamed series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnBinding {
    pub latitude: String,
    pub longitude: String,
    pub legend: Option<String>,
}

impl ColumnBinding {
    /// Bind latitude and longitude columns, leaving legend unbound.
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            legend: None,
        }
    }

    /// Bind a legend column as well.
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }
}

/// One snapshot of tabular data handed over by the host.
///
/// Each bound column maps to an ordered sequence of cells, one per row.
/// The host guarantees that all bound sequences have the same length; the
/// snapshot is read-only to the core. Equality is deep structural
/// equality over the cell values, which is what the redraw gate compares.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RowSet {
    columns: IndexMap<String, Vec<Value>>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a column, builder style.
    pub fn with_column(mut self, id: impl Into<String>, cells: Vec<Value>) -> Self {
        self.insert_column(id, cells);
        self
    }

    /// Insert (or replace) a column.
    pub fn insert_column(&mut self, id: impl Into<String>, cells: Vec<Value>) {
        self.columns.insert(id.into(), cells);
    }

    /// Look up a bound column by identifier.
    pub fn column(&self, id: &str) -> Option<&[Value]> {
        self.columns.get(id).map(|cells| cells.as_slice())
    }

    /// Number of bound columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first bound column.
    pub fn row_count(&self) -> usize {
        self.columns
            .first()
            .map(|(_, cells)| cells.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}
