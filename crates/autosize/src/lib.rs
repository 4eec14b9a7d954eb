//! # autosize
//!
//! Content-driven height sizing for multi-line text inputs.
//!
//! Native auto-grow is not assumed anywhere; instead the engine
//! measures what the current content would need through a shared
//! off-screen [`MirrorSurface`] matching the input's font and padding,
//! then clamps that into the input's configured [`style::HeightBounds`].
//!
//! Measurement is synchronous by construction — the mirror exists
//! precisely so no asynchronous layout query is ever needed. Hosts
//! defer the initial pass through a [`DisplayGate`], because sizes read
//! before the page is visible and laid out are garbage.

mod engine;
mod gate;
mod measure;
mod mirror;

pub use engine::{AutoHeight, setup_all};
pub use gate::{DisplayGate, Immediate};
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use mirror::MirrorSurface;

use dom::Id;
use field_state::FieldId;

#[inline]
fn field_id(id: Id) -> FieldId {
    FieldId::from_raw(id.0 as u64)
}
