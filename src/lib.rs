//! # formsense
//!
//! Two independent, reusable behaviors for form-based UIs:
//!
//! - [`edit_state::DirtyRowTracker`] — captures a baseline value for
//!   every control under a scope and, on each input event, reports
//!   whether the enclosing row holds any unsaved edit.
//! - [`autosize::AutoHeight`] — sizes a multi-line text input to fit
//!   its content within configured bounds, measured through a shared
//!   off-screen mirror rather than native auto-grow.
//!
//! Both are purely reactive: all work happens synchronously inside the
//! host's input-event handlers. The supporting crates carry the shared
//! vocabulary — [`dom`] for the element tree, [`field_state`] for live
//! control values, [`style`] for pixel parsing and sizing
//! configuration.
//!
//! ## Example
//!
//! ```
//! use dom::Tree;
//! use edit_state::{DirtyRowTracker, NoHooks, TagBoundary, field_id};
//! use field_state::FieldValues;
//!
//! let mut tree = Tree::new();
//! let table = tree.add_element(None, "table", Vec::new());
//! let row = tree.add_element(Some(table), "tr", Vec::new());
//! let input = tree.add_element(
//!     Some(row),
//!     "input",
//!     vec![("value".to_string(), Some("foo".to_string()))],
//! );
//!
//! let mut values = FieldValues::new();
//! let mut tracker = DirtyRowTracker::new();
//! tracker.setup(&tree, table, &mut values);
//!
//! values.set(field_id(input), "foobar".to_string());
//! let boundary = TagBoundary::new("tr");
//! assert!(tracker.on_input(&tree, &values, input, &boundary, &mut NoHooks));
//! ```

pub use autosize;
pub use dom;
pub use edit_state;
pub use field_state;
pub use style;
