//! Percent → color sampling over a stop collection

use crate::color::Rgba;
use crate::error::EngineError;
use crate::stop::ColorStop;
use crate::store::sort_canonical;

/// Interpolated color at `pct` percent along the gradient axis.
///
/// Stops are taken in canonical order. Samples at or outside the boundary
/// stop positions return that stop's decoded color exactly, with no
/// interpolation drift; out-of-range `pct` saturates to the nearest
/// boundary rather than erroring.
///
/// When several stops share a position, the earliest stop in canonical
/// order wins: the segment scan is left-to-right first-match, and a
/// zero-width segment forces `t = 0` (which also avoids dividing by zero).
/// An empty collection yields white; the 2-stop invariant makes that case
/// unreachable through the store API.
pub fn color_at_percent(stops: &[ColorStop], pct: f32) -> Result<Rgba, EngineError> {
    let sorted = sort_canonical(stops);
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(Rgba::WHITE),
    };

    if pct <= first.position {
        return first.rgba();
    }
    if pct >= last.position {
        return last.rgba();
    }

    // First-match scan rather than binary search: a binary search could
    // resolve duplicate-position ties differently and change output.
    for pair in sorted.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.position <= pct && pct <= b.position {
            let span = b.position - a.position;
            let t = if span == 0.0 { 0.0 } else { (pct - a.position) / span };
            return Ok(Rgba::lerp(&a.rgba()?, &b.rgba()?, t));
        }
    }

    // In-range pct always lands in some adjacent pair above.
    last.rgba()
}
