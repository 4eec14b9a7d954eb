//! # style
//!
//! Pixel-value parsing and the sizing configuration the auto-height
//! engine is given at setup.
//!
//! Reading computed style off a live document is a host concern; this
//! crate only turns already-extracted declarations into the explicit
//! values ([`HeightBounds`], [`MirrorMetrics`]) the algorithms consume.
//! All arithmetic is integer CSS px.

mod bounds;
mod metrics;
mod px;

pub use bounds::HeightBounds;
pub use metrics::MirrorMetrics;
pub use px::px_to_int;
