//! Style configuration resolved by the host's editor panel

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Map tile styles recognized by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapStyle {
    Light,
    Dark,
    Streets,
    Outdoors,
    Satellite,
    SatelliteStreets,
}

impl MapStyle {
    /// Parse host-supplied free text.
    ///
    /// Unrecognized values silently substitute the light default; this is
    /// a logged fallback, not an error.
    pub fn parse(text: &str) -> Self {
        match text {
            "light" => MapStyle::Light,
            "dark" => MapStyle::Dark,
            "streets" => MapStyle::Streets,
            "outdoors" => MapStyle::Outdoors,
            "satellite" => MapStyle::Satellite,
            "satellite-streets" => MapStyle::SatelliteStreets,
            other => {
                warn!(style = other, "unrecognized map style, using light");
                MapStyle::Light
            }
        }
    }

    /// The style name as the tile provider expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Light => "light",
            MapStyle::Dark => "dark",
            MapStyle::Streets => "streets",
            MapStyle::Outdoors => "outdoors",
            MapStyle::Satellite => "satellite",
            MapStyle::SatelliteStreets => "satellite-streets",
        }
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        MapStyle::Light
    }
}

/// Secret token for the map tile provider.
///
/// The value never appears in Debug output or logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(***)")
    }
}

/// Style configuration for the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Tile style for the base map.
    pub map_style: MapStyle,

    /// Whether the legend box is visible.
    pub show_legend: bool,

    /// Tile-provider access token; set on the surface before every draw.
    pub access_token: AccessToken,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            map_style: MapStyle::default(),
            show_legend: true,
            access_token: AccessToken::default(),
        }
    }
}
