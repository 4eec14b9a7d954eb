use crate::field_id;
use dom::{ControlKind, Id, Tree, control_kind};
use field_state::{FieldValues, normalize_newlines};
use std::borrow::Cow;

/// Snapshot of a control's value at capture time.
#[derive(Clone, Debug, PartialEq)]
pub enum Baseline {
    Text(String),
    Checked(bool),
}

/// One captured control: its extraction kind (fixed at capture) and
/// the baseline it is compared against.
#[derive(Clone, Debug)]
pub struct TrackedField {
    pub kind: ControlKind,
    pub baseline: Baseline,
}

impl TrackedField {
    /// Does the control's current value differ from its baseline?
    ///
    /// Both sides are normalized to strings before comparing, so a
    /// boolean baseline and a textual current value (or vice versa)
    /// can never produce a false positive.
    pub fn is_dirty(&self, values: &FieldValues, id: Id) -> bool {
        normalize_baseline(&self.baseline) != current_value(self.kind, values, id)
    }
}

fn normalize_baseline(baseline: &Baseline) -> Cow<'_, str> {
    match baseline {
        Baseline::Text(s) => Cow::Borrowed(s.as_str()),
        Baseline::Checked(b) => Cow::Borrowed(stringify_bool(*b)),
    }
}

fn current_value(kind: ControlKind, values: &FieldValues, id: Id) -> Cow<'_, str> {
    match kind {
        ControlKind::Checkbox => Cow::Borrowed(stringify_bool(values.is_checked(field_id(id)))),
        ControlKind::TextLike => Cow::Borrowed(values.get(field_id(id)).unwrap_or("")),
    }
}

fn stringify_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Capture a baseline for the control at `id`, seeding the live store
/// from the tree's default state first if the store has no entry yet.
///
/// Returns `None` for nodes that are not form controls.
pub(crate) fn capture(tree: &Tree, values: &mut FieldValues, id: Id) -> Option<TrackedField> {
    let kind = control_kind(tree, id)?;
    seed_from_tree(tree, values, id, kind);

    let baseline = match kind {
        ControlKind::Checkbox => Baseline::Checked(values.is_checked(field_id(id))),
        ControlKind::TextLike => {
            Baseline::Text(values.get(field_id(id)).unwrap_or("").to_string())
        }
    };
    Some(TrackedField { kind, baseline })
}

/// Populate the live store with the control's default value when it has
/// never been touched. Existing entries (user input, earlier seeding)
/// always win.
fn seed_from_tree(tree: &Tree, values: &mut FieldValues, id: Id, kind: ControlKind) {
    let fid = field_id(id);
    if values.has(fid) {
        return;
    }

    match kind {
        ControlKind::Checkbox => {
            values.ensure_initial_checked(fid, tree.has_attr(id, "checked"));
        }
        ControlKind::TextLike => {
            let tag = tree.tag(id).unwrap_or("");
            if tag.eq_ignore_ascii_case("textarea") {
                let mut initial = String::new();
                tree.collect_text(id, &mut initial);
                let mut initial = normalize_newlines(&initial).into_owned();
                // Textarea parsing: a leading newline is stripped.
                if initial.starts_with('\n') {
                    initial.remove(0);
                }
                values.ensure_initial(fid, initial);
            } else if tag.eq_ignore_ascii_case("select") {
                values.ensure_initial(fid, selected_option_value(tree, id));
            } else {
                let initial = tree.attr(id, "value").unwrap_or("").to_string();
                values.ensure_initial(fid, initial);
            }
        }
    }
}

/// Default value of a select: the first option flagged `selected`, or
/// failing that the first option at all. An option without a `value`
/// attribute contributes its text content.
fn selected_option_value(tree: &Tree, select: Id) -> String {
    let options: Vec<Id> = tree
        .descendants(select)
        .into_iter()
        .filter(|&c| tree.tag(c).is_some_and(|t| t.eq_ignore_ascii_case("option")))
        .collect();

    let chosen = options
        .iter()
        .copied()
        .find(|&o| tree.has_attr(o, "selected"))
        .or_else(|| options.first().copied());

    let Some(option) = chosen else {
        return String::new();
    };

    if let Some(value) = tree.attr(option, "value") {
        return value.to_string();
    }
    let mut text = String::new();
    tree.collect_text(option, &mut text);
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_baseline_compares_against_stringified_current() {
        let mut tree = Tree::new();
        let cb = tree.add_element(
            None,
            "input",
            vec![("type".to_string(), Some("checkbox".to_string()))],
        );
        let mut values = FieldValues::new();

        let field = capture(&tree, &mut values, cb).unwrap();
        assert_eq!(field.baseline, Baseline::Checked(false));
        assert!(!field.is_dirty(&values, cb));

        values.set_checked(field_id(cb), true);
        assert!(field.is_dirty(&values, cb));
    }

    #[test]
    fn capture_seeds_text_input_from_value_attr() {
        let mut tree = Tree::new();
        let input = tree.add_element(
            None,
            "input",
            vec![("value".to_string(), Some("foo".to_string()))],
        );
        let mut values = FieldValues::new();

        let field = capture(&tree, &mut values, input).unwrap();
        assert_eq!(field.baseline, Baseline::Text("foo".to_string()));
        assert_eq!(values.get(field_id(input)), Some("foo"));
    }

    #[test]
    fn capture_prefers_existing_store_state() {
        let mut tree = Tree::new();
        let input = tree.add_element(
            None,
            "input",
            vec![("value".to_string(), Some("default".to_string()))],
        );
        let mut values = FieldValues::new();
        values.ensure_initial(field_id(input), "typed earlier".to_string());

        let field = capture(&tree, &mut values, input).unwrap();
        assert_eq!(field.baseline, Baseline::Text("typed earlier".to_string()));
    }

    #[test]
    fn capture_seeds_textarea_from_text_content() {
        let mut tree = Tree::new();
        let ta = tree.add_element(None, "textarea", Vec::new());
        tree.add_text(ta, "\nfirst\r\nsecond");
        let mut values = FieldValues::new();

        let field = capture(&tree, &mut values, ta).unwrap();
        assert_eq!(field.baseline, Baseline::Text("first\nsecond".to_string()));
    }

    #[test]
    fn capture_seeds_select_from_selected_option() {
        let mut tree = Tree::new();
        let select = tree.add_element(None, "select", Vec::new());
        let o1 = tree.add_element(
            Some(select),
            "option",
            vec![("value".to_string(), Some("a".to_string()))],
        );
        tree.add_text(o1, "Alpha");
        let o2 = tree.add_element(
            Some(select),
            "option",
            vec![
                ("value".to_string(), Some("b".to_string())),
                ("selected".to_string(), None),
            ],
        );
        tree.add_text(o2, "Beta");
        let mut values = FieldValues::new();

        let field = capture(&tree, &mut values, select).unwrap();
        assert_eq!(field.baseline, Baseline::Text("b".to_string()));
    }

    #[test]
    fn non_controls_are_not_captured() {
        let mut tree = Tree::new();
        let div = tree.add_element(None, "div", Vec::new());
        let mut values = FieldValues::new();
        assert!(capture(&tree, &mut values, div).is_none());
        assert!(values.is_empty());
    }
}
