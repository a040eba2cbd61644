//! Tailwind class synthesis
//!
//! Two representations of the same stop snapshot:
//!
//! - an arbitrary-value wrapper around the full CSS gradient string, which
//!   is lossless up to whitespace normalization
//! - a `from/via/to` shorthand that keeps at most 3 color anchors and drops
//!   positions entirely. The loss is deliberate; consumers of the shorthand
//!   depend on the 3-anchor format.

use gradix_core::{sort_canonical, ColorStop};

/// Wrap a CSS gradient function string as a `bg-[...]` arbitrary-value
/// class. Whitespace runs collapse to single spaces; nothing else changes.
pub fn tailwind_arbitrary(css: &str) -> String {
    let collapsed = css.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("bg-[{collapsed}]")
}

/// Lossy `from/via/to` shorthand over the canonical stop order.
///
/// Positions are discarded. One color degrades to a flat fill, two map to
/// `from`/`to`, and three or more keep the first, middle (`len / 2`), and
/// last colors, silently dropping the rest. Colors are lowercased.
pub fn tailwind_from_via_to(stops: &[ColorStop]) -> String {
    let sorted = sort_canonical(stops);
    let colors: Vec<String> = sorted.iter().map(|s| s.color.to_lowercase()).collect();

    match colors.as_slice() {
        [] => String::new(),
        [only] => format!("bg-[{only}]"),
        [from, to] => format!("bg-gradient-to-r from-[{from}] to-[{to}]"),
        _ => {
            let via = &colors[colors.len() / 2];
            format!(
                "bg-gradient-to-r from-[{}] via-[{via}] to-[{}]",
                colors[0],
                colors[colors.len() - 1]
            )
        }
    }
}
