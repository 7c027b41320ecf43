//! Host-boundary abstractions for the map scatter widget
//!
//! This crate models the contract between the widget core and its host
//! platform: the tabular data handed over on every change, the column
//! bindings and style configuration resolved by the host's editor panel,
//! the writable output variables, and the notification bridge the host
//! drives.

pub mod config;
pub mod host;
pub mod rowset;
pub mod variables;

use thiserror::Error;

// Re-export commonly used types
pub use config::{AccessToken, MapStyle, StyleConfig};
pub use host::{DataSubscriber, HostBridge, ResizeSubscriber, SubscriptionGuard};
pub use rowset::{ColumnBinding, ColumnRole, RowSet};
pub use variables::{VariableStore, FILTER_LATITUDE, FILTER_LONGITUDE};

/// Errors that can occur while preparing a redraw.
///
/// Every variant is recoverable: the orchestrator logs it and leaves the
/// previous chart in place. Nothing here ever propagates to the host.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("required column for {role} is unbound or empty")]
    MissingRequiredColumn { role: ColumnRole },
}
