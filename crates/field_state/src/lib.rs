//! # field_state
//!
//! UI-agnostic live value state for form controls.
//!
//! This crate provides:
//! - [`FieldId`]: an opaque identifier for a form control
//! - [`FieldValues`]: the store of current text values and checked flags
//! - [`normalize_newlines`]: CRLF/CR-to-LF normalization for multi-line values
//!
//! It deliberately knows nothing about element trees, styling, or event
//! dispatch. The behaviors read "the current value" from here; hosts
//! write user edits into it. That keeps every dirty comparison and
//! every measurement a pure read over plain state.

mod id;
mod store;
mod text;

pub use id::FieldId;
pub use store::FieldValues;
pub use text::normalize_newlines;
