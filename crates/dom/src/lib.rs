//! # dom
//!
//! Minimal element tree for form-behavior components.
//!
//! This is not an HTML document model: it carries exactly what the
//! behaviors need to answer their questions — element tags, attributes,
//! inline style declarations, text content, and ancestry. Hosts with a
//! real DOM mirror the relevant subtree into a [`Tree`] (or build one
//! directly in tests).

mod controls;
mod tree;

pub use controls::{ControlKind, control_kind, is_form_control, is_textarea};
pub use tree::{Id, RawId, Tree};
