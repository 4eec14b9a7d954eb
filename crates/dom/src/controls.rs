use crate::tree::{Id, Tree};

/// How a form control's value is read for change comparison.
///
/// Selected once, at capture time. `Checkbox` covers the checked-state
/// controls (checkbox and radio inputs); everything else that carries a
/// value — text inputs, unknown input types, selects, textareas — is
/// `TextLike`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    TextLike,
    Checkbox,
}

/// Classify a node as a form control, or `None` for anything else.
pub fn control_kind(tree: &Tree, id: Id) -> Option<ControlKind> {
    let tag = tree.tag(id)?;

    if tag.eq_ignore_ascii_case("select") || tag.eq_ignore_ascii_case("textarea") {
        return Some(ControlKind::TextLike);
    }
    if !tag.eq_ignore_ascii_case("input") {
        return None;
    }

    let ty = tree
        .attr(id, "type")
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match ty {
        // missing type defaults to text
        None => Some(ControlKind::TextLike),
        Some(t) if t.eq_ignore_ascii_case("checkbox") => Some(ControlKind::Checkbox),
        Some(t) if t.eq_ignore_ascii_case("radio") => Some(ControlKind::Checkbox),
        Some(_) => Some(ControlKind::TextLike),
    }
}

pub fn is_form_control(tree: &Tree, id: Id) -> bool {
    control_kind(tree, id).is_some()
}

pub fn is_textarea(tree: &Tree, id: Id) -> bool {
    tree.tag(id)
        .is_some_and(|t| t.eq_ignore_ascii_case("textarea"))
}
