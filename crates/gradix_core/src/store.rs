//! Pure, immutable-update operations over stop collections
//!
//! Every operation takes the current collection by reference and returns a
//! new one; nothing is mutated in place. The collection's insertion order is
//! the only persisted order — canonical (position-sorted) order is
//! recomputed on demand by [`sort_canonical`] and never stored.
//!
//! The whole command set is also reachable through the [`apply`] reducer,
//! which keeps the engine trivially unit-testable from a host event loop:
//! `(stops, command) -> stops'`.

use tracing::debug;

use crate::stop::{ColorStop, StopId};

/// Collections never shrink below this many stops.
pub const MIN_STOPS: usize = 2;

/// Color given to freshly added stops.
pub const DEFAULT_STOP_COLOR: &str = "#ffffff";

/// Position given to freshly added stops.
pub const DEFAULT_STOP_POSITION: f32 = 50.0;

/// Partial update for a single stop; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct StopPatch {
    pub color: Option<String>,
    pub position: Option<f32>,
}

/// Command set over a stop collection.
#[derive(Clone, Debug)]
pub enum StopCommand {
    /// Append a stop with a fresh id and default color/position
    Add,
    /// Remove a stop, unless that would drop below [`MIN_STOPS`]
    Remove { id: StopId },
    /// Patch a stop's color and/or position
    Update { id: StopId, patch: StopPatch },
    /// Shift a stop's position by a delta, clamped to [0, 100]
    Nudge { id: StopId, delta: f32 },
}

/// Reducer over the command set.
pub fn apply(stops: &[ColorStop], command: &StopCommand) -> Vec<ColorStop> {
    match command {
        StopCommand::Add => add_stop(stops),
        StopCommand::Remove { id } => remove_stop(stops, id),
        StopCommand::Update { id, patch } => update_stop(stops, id, patch),
        StopCommand::Nudge { id, delta } => nudge_stop(stops, id, *delta),
    }
}

/// Append one new stop with a fresh id, `#ffffff`, position 50.
pub fn add_stop(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut next = stops.to_vec();
    next.push(ColorStop::new(DEFAULT_STOP_COLOR, DEFAULT_STOP_POSITION));
    next
}

/// Remove the stop with the given id.
///
/// Removal that would drop the collection below 2 stops returns the input
/// unchanged — a silent floor, not an error.
pub fn remove_stop(stops: &[ColorStop], id: &StopId) -> Vec<ColorStop> {
    if stops.len() <= MIN_STOPS {
        debug!(%id, "remove ignored, collection is at the {MIN_STOPS}-stop floor");
        return stops.to_vec();
    }
    stops.iter().filter(|s| &s.id != id).cloned().collect()
}

/// Replace the matching stop's color and/or position.
///
/// Positions are clamped into [0, 100], never rejected.
pub fn update_stop(stops: &[ColorStop], id: &StopId, patch: &StopPatch) -> Vec<ColorStop> {
    stops
        .iter()
        .map(|s| {
            if &s.id != id {
                return s.clone();
            }
            let mut next = s.clone();
            if let Some(color) = &patch.color {
                next.color = color.clone();
            }
            if let Some(position) = patch.position {
                next.position = position.clamp(0.0, 100.0);
            }
            next
        })
        .collect()
}

/// Shift the matching stop's position by `delta`, clamped to [0, 100].
pub fn nudge_stop(stops: &[ColorStop], id: &StopId, delta: f32) -> Vec<ColorStop> {
    match stops.iter().find(|s| &s.id == id) {
        Some(current) => update_stop(
            stops,
            id,
            &StopPatch {
                color: None,
                position: Some(current.position + delta),
            },
        ),
        None => stops.to_vec(),
    }
}

/// Stable-sorted copy, ascending by position.
///
/// Ties keep the relative order of the input collection; the caller's order
/// is never mutated.
pub fn sort_canonical(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

/// Build stops from an ordered palette, distributing positions evenly:
/// `position_i = round(i / (n - 1) * 100)`.
///
/// A single color yields a single stop at 0; upholding the 2-stop invariant
/// in that degenerate case is the host's concern.
pub fn stops_from_palette<S: AsRef<str>>(colors: &[S]) -> Vec<ColorStop> {
    let n = colors.len();
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let position = if n > 1 {
                (i as f32 / (n - 1) as f32 * 100.0).round()
            } else {
                0.0
            };
            ColorStop::new(color.as_ref(), position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new("#06b6d4", 0.0),
            ColorStop::new("#7c3aed", 50.0),
            ColorStop::new("#ef4444", 100.0),
        ]
    }

    #[test]
    fn test_add_stop_appends_defaults() {
        let stops = three_stops();
        let next = add_stop(&stops);
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].color, DEFAULT_STOP_COLOR);
        assert_eq!(next[3].position, DEFAULT_STOP_POSITION);
        // original untouched
        assert_eq!(stops.len(), 3);
    }

    #[test]
    fn test_add_stop_assigns_fresh_id() {
        let stops = three_stops();
        let next = add_stop(&stops);
        assert!(stops.iter().all(|s| s.id != next[3].id));
    }

    #[test]
    fn test_remove_stop() {
        let stops = three_stops();
        let id = stops[1].id.clone();
        let next = remove_stop(&stops, &id);
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|s| s.id != id));
    }

    #[test]
    fn test_remove_stop_enforces_floor() {
        let stops = vec![ColorStop::new("#000000", 0.0), ColorStop::new("#ffffff", 100.0)];
        let id = stops[0].id.clone();
        let next = remove_stop(&stops, &id);
        assert_eq!(next, stops);
    }

    #[test]
    fn test_update_stop_clamps_position() {
        let stops = three_stops();
        let id = stops[0].id.clone();

        let patch = StopPatch { color: None, position: Some(150.0) };
        assert_eq!(update_stop(&stops, &id, &patch)[0].position, 100.0);

        let patch = StopPatch { color: None, position: Some(-5.0) };
        assert_eq!(update_stop(&stops, &id, &patch)[0].position, 0.0);
    }

    #[test]
    fn test_update_stop_patches_color_only() {
        let stops = three_stops();
        let id = stops[1].id.clone();
        let patch = StopPatch { color: Some("#123456".to_string()), position: None };
        let next = update_stop(&stops, &id, &patch);
        assert_eq!(next[1].color, "#123456");
        assert_eq!(next[1].position, 50.0);
    }

    #[test]
    fn test_nudge_stop_clamps() {
        let stops = three_stops();
        let id = stops[2].id.clone();
        let next = nudge_stop(&stops, &id, 25.0);
        assert_eq!(next[2].position, 100.0);

        let next = nudge_stop(&next, &id, -10.0);
        assert_eq!(next[2].position, 90.0);
    }

    #[test]
    fn test_nudge_unknown_id_is_noop() {
        let stops = three_stops();
        let next = nudge_stop(&stops, &StopId::from("missing"), 5.0);
        assert_eq!(next, stops);
    }

    #[test]
    fn test_sort_canonical_is_stable() {
        let stops = vec![
            ColorStop::new("#111111", 50.0),
            ColorStop::new("#222222", 0.0),
            ColorStop::new("#333333", 50.0),
        ];
        let sorted = sort_canonical(&stops);
        assert_eq!(sorted[0].color, "#222222");
        // tie at 50 keeps insertion order
        assert_eq!(sorted[1].color, "#111111");
        assert_eq!(sorted[2].color, "#333333");
        // caller's order untouched
        assert_eq!(stops[0].color, "#111111");
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let stops = three_stops();
        let id = stops[0].id.clone();
        assert_eq!(apply(&stops, &StopCommand::Remove { id: id.clone() }), remove_stop(&stops, &id));
        assert_eq!(
            apply(&stops, &StopCommand::Nudge { id: id.clone(), delta: 10.0 }),
            nudge_stop(&stops, &id, 10.0)
        );
    }

    #[test]
    fn test_palette_distributes_evenly() {
        let stops = stops_from_palette(&["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[1].position, 50.0);
        assert_eq!(stops[2].position, 100.0);
    }

    #[test]
    fn test_palette_rounds_positions() {
        let stops = stops_from_palette(&[
            "#111111", "#222222", "#333333", "#444444", "#555555", "#666666", "#777777",
        ]);
        let positions: Vec<f32> = stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 17.0, 33.0, 50.0, 67.0, 83.0, 100.0]);
    }

    #[test]
    fn test_palette_single_color() {
        let stops = stops_from_palette(&["#ffffff"]);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].position, 0.0);
    }
}
