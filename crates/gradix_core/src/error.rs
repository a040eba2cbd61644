//! Engine error types

use thiserror::Error;

/// Errors raised by the gradient engine.
///
/// Out-of-range positions and sample percentages are *not* errors; they are
/// clamped (see [`crate::store`] and [`crate::sampler`]). Structurally
/// invalid gradient descriptions (unknown type strings, non-numeric angles)
/// are expected to be rejected at the serialization boundary before reaching
/// the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A stop's color does not match the 3- or 6-digit hex pattern
    #[error("invalid color format: `{0}` (expected #rgb or #rrggbb)")]
    InvalidColorFormat(String),

    /// Fewer than 2 stops presented to the compiler
    #[error("gradient requires at least 2 stops, found {found}")]
    InsufficientStops { found: usize },
}
