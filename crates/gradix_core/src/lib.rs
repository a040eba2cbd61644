//! # gradix_core
//!
//! Multi-stop gradient engine: an immutable stop model over a 0–100 axis,
//! flat RGBA interpolation in sRGB space, and the gradient description
//! consumed by the code generators in `gradix_css`.
//!
//! ## Design
//!
//! Every operation here is a synchronous pure function over immutable
//! values. Mutating a stop collection produces a new snapshot rather than
//! aliasing the old one, so the engine is safe to read from any number of
//! concurrent readers as long as writers replace the whole value atomically
//! (single-writer, copy-on-write discipline). Nothing blocks, suspends, or
//! retries.
//!
//! ## Example
//!
//! ```
//! use gradix_core::{color_at_percent, GradientSpec};
//!
//! let spec = GradientSpec::default();
//! let mid = color_at_percent(&spec.stops, 25.0).unwrap();
//! assert!(mid.r >= 0.0 && mid.r <= 255.0);
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod sampler;
pub mod stop;
pub mod store;

pub use color::Rgba;
pub use error::EngineError;
pub use gradient::{GradientKind, GradientSpec};
pub use sampler::color_at_percent;
pub use stop::{ColorStop, StopId};
pub use store::{sort_canonical, stops_from_palette, StopCommand, StopPatch};
