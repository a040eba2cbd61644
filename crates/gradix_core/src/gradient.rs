//! Gradient descriptions: geometry family, angle, repeat flag, stops

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::EngineError;
use crate::stop::ColorStop;
use crate::store::stops_from_palette;

/// Geometric gradient family, matching the CSS function families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// CSS keyword for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

/// A complete gradient description.
///
/// JSON shape:
///
/// ```json
/// { "type": "linear",
///   "repeating": false,
///   "angle": 90,
///   "stops": [ { "id": "a", "color": "#06b6d4", "position": 0 } ] }
/// ```
///
/// A spec is replaced wholesale when a preset is loaded or the gradient is
/// reset; its stop list is otherwise only touched through the operations in
/// [`crate::store`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Geometric family
    #[serde(rename = "type")]
    pub kind: GradientKind,
    /// Tile the stop sequence (`repeating-*-gradient`) instead of padding
    #[serde(default)]
    pub repeating: bool,
    /// Degrees, 0–360. Rotation for `linear`, start angle for `conic`,
    /// accepted but unused for `radial`.
    #[serde(default = "default_angle")]
    pub angle: u16,
    /// At least 2 stops at all times
    pub stops: Vec<ColorStop>,
}

fn default_angle() -> u16 {
    90
}

impl GradientSpec {
    /// Build a spec from an ordered palette, with evenly spaced positions
    /// and default geometry.
    pub fn from_palette<S: AsRef<str>>(colors: &[S]) -> Self {
        Self {
            stops: stops_from_palette(colors),
            ..Self::default()
        }
    }

    /// Check that every stop color decodes and the stop floor holds.
    ///
    /// The store API maintains both properties; this is the check hosts run
    /// on specs that arrive over the serialization boundary.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.stops.len() < 2 {
            return Err(EngineError::InsufficientStops { found: self.stops.len() });
        }
        for stop in &self.stops {
            Rgba::from_hex(&stop.color)?;
        }
        Ok(())
    }
}

impl Default for GradientSpec {
    /// Three evenly spaced stops, linear at 90 degrees.
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            repeating: false,
            angle: 90,
            stops: stops_from_palette(&["#06b6d4", "#7c3aed", "#ef4444"]),
        }
    }
}
