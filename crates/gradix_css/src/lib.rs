//! # gradix_css
//!
//! Code generators over [`gradix_core`] gradient descriptions:
//!
//! - [`build_css_gradient`] — the canonical CSS gradient function string
//!   (`linear-gradient`, `radial-gradient`, `conic-gradient`, and their
//!   `repeating-` variants)
//! - [`css_snippet`] — a `background-image:` declaration ready to paste
//! - [`tailwind_arbitrary`] — a lossless `bg-[...]` arbitrary-value class
//! - [`tailwind_from_via_to`] — the lossy 2–3 anchor `from/via/to` shorthand
//!
//! All generators are pure string transforms over an immutable spec; two
//! identical specs always produce byte-identical output.

pub mod compiler;
pub mod tailwind;

pub use compiler::{build_css_gradient, css_snippet};
pub use tailwind::{tailwind_arbitrary, tailwind_from_via_to};
