//! CSS gradient function compiler

use gradix_core::{sort_canonical, EngineError, GradientKind, GradientSpec};

/// Compile a spec into its canonical CSS gradient function string.
///
/// Stops are emitted in canonical order as `"#rrggbb N%"` entries. The
/// `repeating` flag changes only the function-name prefix; `angle` rotates
/// `linear-` and sets the start angle of `conic-` gradients, and is accepted
/// but unused for `radial-` (which always paints an ellipse at center).
pub fn build_css_gradient(spec: &GradientSpec) -> Result<String, EngineError> {
    if spec.stops.len() < 2 {
        return Err(EngineError::InsufficientStops { found: spec.stops.len() });
    }

    let prefix = if spec.repeating { "repeating-" } else { "" };
    let function = format!("{prefix}{}-gradient", spec.kind.as_str());

    let stop_list = sort_canonical(&spec.stops)
        .iter()
        .map(|s| format!("{} {}%", s.color, s.position))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(match spec.kind {
        GradientKind::Linear => format!("{function}({}deg, {stop_list})", spec.angle),
        GradientKind::Radial => format!("{function}(ellipse at center, {stop_list})"),
        GradientKind::Conic => format!("{function}(from {}deg at 50% 50%, {stop_list})", spec.angle),
    })
}

/// A `background-image:` declaration for the compiled gradient.
///
/// When `opacity` is below 1 an `opacity:` line follows. Opacity belongs to
/// the consuming preview surface, not the gradient itself; it is
/// concatenated textually here and never enters any color math.
pub fn css_snippet(spec: &GradientSpec, opacity: f32) -> Result<String, EngineError> {
    let gradient = build_css_gradient(spec)?;
    let mut out = format!("background-image: {gradient};");
    if opacity < 1.0 {
        out.push_str(&format!("\nopacity: {opacity};"));
    }
    Ok(out)
}
