//! Central store for current form-control values.
//!
//! The store tracks two things per field: a text value and a checked
//! flag. Which of the two is meaningful for a given field is decided by
//! whoever reads it; the store itself is agnostic.

use crate::id::FieldId;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
struct FieldState {
    value: String,
    checked: bool,
}

/// Current values for a set of form controls.
///
/// # Example
///
/// ```
/// use field_state::{FieldId, FieldValues};
///
/// let mut values = FieldValues::new();
/// let id = FieldId::from_raw(1);
///
/// values.ensure_initial(id, "hello".to_string());
/// values.set(id, "hello world".to_string());
///
/// assert_eq!(values.get(id), Some("hello world"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldValues {
    fields: HashMap<FieldId, FieldState>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// The current text value, if the field exists.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.value.as_str())
    }

    /// Set/overwrite the text value for this field, preserving the
    /// checked flag if the entry already exists.
    pub fn set(&mut self, id: FieldId, value: String) {
        self.fields.entry(id).or_default().value = value;
    }

    /// Ensure an entry exists; if missing, inserts the provided initial
    /// text value. Existing entries are left untouched.
    pub fn ensure_initial(&mut self, id: FieldId, initial: String) {
        self.fields.entry(id).or_insert(FieldState {
            value: initial,
            checked: false,
        });
    }

    /// Ensure an entry exists with the initial checked state. Existing
    /// entries are left untouched.
    pub fn ensure_initial_checked(&mut self, id: FieldId, initial_checked: bool) {
        self.fields.entry(id).or_insert(FieldState {
            value: String::new(),
            checked: initial_checked,
        });
    }

    /// Returns `true` if this checked-state field is checked.
    pub fn is_checked(&self, id: FieldId) -> bool {
        self.fields.get(&id).is_some_and(|s| s.checked)
    }

    /// Set the checked state. Returns `true` if the state actually changed.
    pub fn set_checked(&mut self, id: FieldId, checked: bool) -> bool {
        let st = self.fields.entry(id).or_default();
        let changed = st.checked != checked;
        st.checked = checked;
        changed
    }

    /// Toggle the checked state; returns the new state.
    pub fn toggle_checked(&mut self, id: FieldId) -> bool {
        let st = self.fields.entry(id).or_default();
        st.checked = !st.checked;
        st.checked
    }

    /// Drop all field state (e.g. on navigation).
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> FieldId {
        FieldId::from_raw(raw)
    }

    #[test]
    fn ensure_initial_does_not_overwrite() {
        let mut values = FieldValues::new();
        values.ensure_initial(id(1), "first".to_string());
        values.ensure_initial(id(1), "second".to_string());
        assert_eq!(values.get(id(1)), Some("first"));
    }

    #[test]
    fn set_preserves_checked_flag() {
        let mut values = FieldValues::new();
        values.ensure_initial_checked(id(1), true);
        values.set(id(1), "note".to_string());
        assert!(values.is_checked(id(1)));
        assert_eq!(values.get(id(1)), Some("note"));
    }

    #[test]
    fn set_checked_reports_change() {
        let mut values = FieldValues::new();
        values.ensure_initial_checked(id(1), false);
        assert!(values.set_checked(id(1), true));
        assert!(!values.set_checked(id(1), true));
        assert!(values.is_checked(id(1)));
    }

    #[test]
    fn toggle_flips_state() {
        let mut values = FieldValues::new();
        assert!(values.toggle_checked(id(1)));
        assert!(!values.toggle_checked(id(1)));
    }

    #[test]
    fn missing_fields_read_as_defaults() {
        let values = FieldValues::new();
        assert_eq!(values.get(id(9)), None);
        assert!(!values.is_checked(id(9)));
        assert!(!values.has(id(9)));
    }

    #[test]
    fn clear_drops_everything() {
        let mut values = FieldValues::new();
        values.ensure_initial(id(1), "x".to_string());
        values.clear();
        assert!(values.is_empty());
    }
}
