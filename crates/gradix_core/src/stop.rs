//! Color stops and stop identity

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::EngineError;

static NEXT_STOP_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque stop identifier.
///
/// Assigned at creation and stable for the stop's lifetime; ids drawn from
/// [`StopId::fresh`] are never reused within a process. Serializes as a
/// plain JSON string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Allocate a fresh, never-before-used id.
    pub fn fresh() -> Self {
        StopId(format!("stop-{}", NEXT_STOP_ID.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(s: &str) -> Self {
        StopId(s.to_string())
    }
}

impl From<String> for StopId {
    fn from(s: String) -> Self {
        StopId(s)
    }
}

/// A (color, position) pair anchoring the gradient at a point along its
/// 0–100% axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Unique identifier, stable for the stop's lifetime
    pub id: StopId,
    /// Hex color string, `#rgb` or `#rrggbb`
    pub color: String,
    /// Percentage along the gradient axis, 0–100. Duplicates are legal.
    pub position: f32,
}

impl ColorStop {
    /// Create a stop with a fresh id.
    pub fn new(color: impl Into<String>, position: f32) -> Self {
        Self {
            id: StopId::fresh(),
            color: color.into(),
            position,
        }
    }

    /// Decode this stop's color.
    pub fn rgba(&self) -> Result<Rgba, EngineError> {
        Rgba::from_hex(&self.color)
    }
}
