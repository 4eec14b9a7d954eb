use crate::field_id;
use crate::gate::DisplayGate;
use crate::measure::TextMeasurer;
use crate::mirror::MirrorSurface;
use dom::{Id, Tree, is_textarea};
use field_state::{FieldValues, normalize_newlines};
use std::collections::HashMap;
use style::{HeightBounds, MirrorMetrics};

#[derive(Clone, Debug)]
struct SizedInput {
    bounds: HeightBounds,
    metrics: MirrorMetrics,
    applied: Option<i32>,
}

/// Sizing engine for multi-line text inputs.
///
/// Owns the mirror registry (one [`MirrorSurface`] per distinct
/// font/padding signature) and per-input state: the height bounds read
/// at setup and the last applied height. The per-input entry doubles as
/// the initial-resize marker that makes [`setup`](Self::setup)
/// idempotent.
#[derive(Debug, Default)]
pub struct AutoHeight {
    mirrors: HashMap<MirrorMetrics, MirrorSurface>,
    inputs: HashMap<Id, SizedInput>,
}

impl AutoHeight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this input has already been through setup.
    pub fn is_sized(&self, id: Id) -> bool {
        self.inputs.contains_key(&id)
    }

    /// Register a text input and run its initial sizing pass.
    ///
    /// Idempotent per input: repeated calls neither re-register nor
    /// re-measure, and return `false`. Callers must only invoke this
    /// once the page is visible and laid out (see
    /// [`DisplayGate`](crate::DisplayGate)).
    pub fn setup(
        &mut self,
        values: &FieldValues,
        id: Id,
        bounds: HeightBounds,
        metrics: MirrorMetrics,
        width: i32,
        measurer: &dyn TextMeasurer,
    ) -> bool {
        if self.inputs.contains_key(&id) {
            log::trace!(target: "autosize", "setup: input {id:?} already sized");
            return false;
        }

        self.inputs.insert(
            id,
            SizedInput {
                bounds,
                metrics,
                applied: None,
            },
        );
        self.resize(values, id, width, measurer);
        true
    }

    /// Re-measure the input's current content and apply the clamped
    /// height. Invoked on every input event (and once from setup).
    ///
    /// Returns the applied height, or `None` for inputs that never went
    /// through setup.
    pub fn resize(
        &mut self,
        values: &FieldValues,
        id: Id,
        width: i32,
        measurer: &dyn TextMeasurer,
    ) -> Option<i32> {
        let (metrics, bounds) = {
            let input = self.inputs.get(&id)?;
            (input.metrics.clone(), input.bounds)
        };

        let mirror = self
            .mirrors
            .entry(metrics)
            .or_insert_with_key(|m| {
                log::debug!(target: "autosize", "creating mirror for signature {m:?}");
                MirrorSurface::new(m.clone())
            });

        mirror.show();
        mirror.set_content(values.get(field_id(id)).unwrap_or(""));
        mirror.set_width(width);
        let desired = mirror.measure(measurer);
        mirror.hide();

        let use_height = bounds.clamp(desired);
        if let Some(input) = self.inputs.get_mut(&id) {
            input.applied = Some(use_height);
        }
        log::trace!(
            target: "autosize",
            "resize {id:?}: desired {desired}px -> applied {use_height}px"
        );
        Some(use_height)
    }

    /// The height last applied to this input, if it has been sized.
    pub fn applied_height(&self, id: Id) -> Option<i32> {
        self.inputs.get(&id).and_then(|s| s.applied)
    }

    /// Number of distinct mirror surfaces currently alive.
    pub fn mirror_count(&self) -> usize {
        self.mirrors.len()
    }

    /// Drop all engine state (e.g. on navigation).
    pub fn clear(&mut self) {
        self.mirrors.clear();
        self.inputs.clear();
    }
}

/// Scan the tree for textarea elements and run setup for each one not
/// yet sized, deferred through the host's display gate.
///
/// Bounds and mirror metrics come from each element's style
/// declarations; `content_width` maps an element to its laid-out
/// content width in px. Default textarea content is seeded into the
/// store first, so the initial pass measures what the user sees.
pub fn setup_all(
    gate: &impl DisplayGate,
    engine: &mut AutoHeight,
    tree: &Tree,
    values: &mut FieldValues,
    content_width: &dyn Fn(Id) -> i32,
    measurer: &dyn TextMeasurer,
) {
    gate.when_visible(Box::new(move || {
        for id in tree.ids() {
            if !is_textarea(tree, id) || engine.is_sized(id) {
                continue;
            }
            seed_textarea_value(tree, values, id);

            let bounds = HeightBounds::from_declarations(tree.style(id));
            let metrics = MirrorMetrics::from_declarations(tree.style(id));
            engine.setup(values, id, bounds, metrics, content_width(id), measurer);
        }
    }));
}

/// Populate the store with the textarea's default text when it has
/// never been touched.
fn seed_textarea_value(tree: &Tree, values: &mut FieldValues, id: Id) {
    let fid = field_id(id);
    if values.has(fid) {
        return;
    }
    let mut initial = String::new();
    tree.collect_text(id, &mut initial);
    let mut initial = normalize_newlines(&initial).into_owned();
    if initial.starts_with('\n') {
        initial.remove(0);
    }
    values.ensure_initial(fid, initial);
}
