//! # edit_state
//!
//! Row-level dirty tracking for form controls.
//!
//! [`DirtyRowTracker`] records a baseline value for every control under
//! a scope, then, on each input event, rediscovers the enclosing row
//! and reports whether any control under it has diverged from its
//! baseline. Hosts use that boolean to flag the row as holding an
//! unsaved edit.
//!
//! The tracker owns all bookkeeping in explicit registries keyed by
//! node id; nothing is scribbled onto the tree.

mod baseline;
mod boundary;
mod tracker;

pub use baseline::{Baseline, TrackedField};
pub use boundary::{RowBoundary, TagBoundary, find_row};
pub use tracker::{DirtyRowTracker, EditModeHooks, NoHooks};

use dom::Id;
use field_state::FieldId;

/// Convert a tree id into the store key for the same control.
#[inline]
pub fn field_id(id: Id) -> FieldId {
    FieldId::from_raw(id.0 as u64)
}
