//! Host-visible output variables written by the selection bridge

use ahash::AHashMap;
use parking_lot::RwLock;

/// Variable slot carrying the selected latitudes.
pub const FILTER_LATITUDE: &str = "filterLatitude";

/// Variable slot carrying the selected longitudes.
pub const FILTER_LONGITUDE: &str = "filterLongitude";

/// Writable variable slots owned by the host.
///
/// Each slot is either `None` (no selection) or a comma-joined list of
/// numeric strings. The core only writes these values; it never reads
/// them back into its own computation.
#[derive(Debug, Default)]
pub struct VariableStore {
    slots: RwLock<AHashMap<String, Option<String>>>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a slot. `None` is the explicit "no selection" signal.
    pub fn set(&self, name: &str, value: Option<String>) {
        self.slots.write().insert(name.to_string(), value);
    }

    /// Read a slot; unset and explicitly-null slots both read as `None`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.slots.read().get(name).cloned().flatten()
    }

    /// Whether the slot has ever been written.
    pub fn is_written(&self, name: &str) -> bool {
        self.slots.read().contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = VariableStore::new();
        store.set(FILTER_LATITUDE, Some("1,3".to_string()));

        assert_eq!(store.get(FILTER_LATITUDE), Some("1,3".to_string()));
        assert_eq!(store.get(FILTER_LONGITUDE), None);
    }

    #[test]
    fn test_null_write_overrides_prior_value() {
        let store = VariableStore::new();
        store.set(FILTER_LATITUDE, Some("1,3".to_string()));
        store.set(FILTER_LATITUDE, None);

        assert_eq!(store.get(FILTER_LATITUDE), None);
        assert!(store.is_written(FILTER_LATITUDE));
    }
}
