use crate::baseline::{Baseline, TrackedField, capture};
use crate::boundary::{RowBoundary, find_row};
use dom::{Id, Tree};
use field_state::FieldValues;
use std::collections::{HashMap, HashSet};

/// Host reactions to a row's edit-mode evaluation.
///
/// Invoked on every qualifying input event while the condition holds,
/// not only on clean/editing transitions, so implementations must be
/// idempotent and cheap (style-class toggles are the typical case).
pub trait EditModeHooks {
    fn entered(&mut self, _row: Id) {}
    fn left(&mut self, _row: Id) {}
}

/// No-op hooks for hosts that only query [`DirtyRowTracker::is_editing`].
pub struct NoHooks;

impl EditModeHooks for NoHooks {}

/// Tracks which form controls have diverged from their last-saved
/// values and reports edit mode per row.
///
/// All bookkeeping lives in registries owned by the tracker, keyed by
/// node id:
/// - captured baselines (the "saved value" snapshot per control),
/// - configured scopes (setup idempotency guard),
/// - rows currently in edit mode (the visual marker state).
///
/// Controls that never passed through [`setup`](Self::setup) have no
/// baseline and are invisible to the dirty check; the host upholds the
/// one ordering requirement — capture before events — simply by wiring
/// event delivery after setup returns.
#[derive(Default)]
pub struct DirtyRowTracker {
    fields: HashMap<Id, TrackedField>,
    configured_scopes: HashSet<Id>,
    editing_rows: HashSet<Id>,
}

impl DirtyRowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture baselines for every form control under `scope`.
    ///
    /// Idempotent per scope: a second call for the same scope is a
    /// no-op, so several independent columns may wire the same table
    /// without re-snapshotting each other's baselines. A scope id that
    /// does not resolve in the tree is also a no-op.
    ///
    /// Returns `true` if this call did the wiring.
    pub fn setup(&mut self, tree: &Tree, scope: Id, values: &mut FieldValues) -> bool {
        if !tree.contains(scope) {
            log::trace!(target: "edit.tracker", "setup: scope {scope:?} not in tree, skipping");
            return false;
        }
        if self.configured_scopes.contains(&scope) {
            log::trace!(target: "edit.tracker", "setup: scope {scope:?} already configured");
            return false;
        }

        let captured = self.capture_under(tree, scope, values);
        self.configured_scopes.insert(scope);
        log::debug!(
            target: "edit.tracker",
            "setup: scope {scope:?} configured, {captured} control(s) captured"
        );
        true
    }

    /// Re-snapshot baselines for every control under `scope`, e.g.
    /// after the host saved the row's values.
    ///
    /// Scope wiring and current editing markers are untouched; rows
    /// read clean on the next input event that re-evaluates them.
    pub fn rebaseline(&mut self, tree: &Tree, scope: Id, values: &mut FieldValues) {
        let captured = self.capture_under(tree, scope, values);
        log::debug!(
            target: "edit.tracker",
            "rebaseline: scope {scope:?}, {captured} control(s) re-captured"
        );
    }

    fn capture_under(&mut self, tree: &Tree, scope: Id, values: &mut FieldValues) -> usize {
        let mut captured = 0usize;
        for id in tree.descendants(scope) {
            if let Some(field) = capture(tree, values, id) {
                self.fields.insert(id, field);
                captured += 1;
            }
        }
        captured
    }

    /// Delegated input event: re-evaluate the row enclosing `target`.
    ///
    /// The row's controls are rediscovered on every event (never cached
    /// from setup), so controls captured by a later setup call under
    /// the same row take part as soon as they exist. The matching hook
    /// fires unconditionally on each event, whichever branch holds.
    ///
    /// Returns the row's editing state; no boundary match reads clean.
    pub fn on_input(
        &mut self,
        tree: &Tree,
        values: &FieldValues,
        target: Id,
        boundary: &impl RowBoundary,
        hooks: &mut impl EditModeHooks,
    ) -> bool {
        let Some(row) = find_row(tree, target, boundary) else {
            log::trace!(target: "edit.tracker", "input on {target:?}: no row boundary match");
            return false;
        };

        let any_editing = tree
            .descendants(row)
            .into_iter()
            .filter_map(|id| self.fields.get(&id).map(|f| (id, f)))
            .any(|(id, field)| field.is_dirty(values, id));

        if any_editing {
            if self.editing_rows.insert(row) {
                log::debug!(target: "edit.tracker", "row {row:?} entered edit mode");
            }
            hooks.entered(row);
        } else {
            if self.editing_rows.remove(&row) {
                log::debug!(target: "edit.tracker", "row {row:?} left edit mode");
            }
            hooks.left(row);
        }
        any_editing
    }

    /// Current edit-mode marker for a row.
    pub fn is_editing(&self, row: Id) -> bool {
        self.editing_rows.contains(&row)
    }

    /// Whether a control has a captured baseline.
    pub fn is_captured(&self, id: Id) -> bool {
        self.fields.contains_key(&id)
    }

    /// The captured baseline for a control, if any.
    pub fn baseline(&self, id: Id) -> Option<&Baseline> {
        self.fields.get(&id).map(|f| &f.baseline)
    }

    /// Drop all tracker state (e.g. on navigation).
    pub fn clear(&mut self) {
        self.fields.clear();
        self.configured_scopes.clear();
        self.editing_rows.clear();
    }
}
