use dom::{Id, Tree};

/// Rule describing which ancestor of a changed control is "the row".
///
/// Rows are a host concept: a `<tr>`, an outer `<div>`, whatever the
/// host groups its fields by. The tracker only needs a yes/no answer
/// per ancestor.
pub trait RowBoundary {
    fn is_row(&self, tree: &Tree, id: Id) -> bool;
}

/// Boundary matching elements by tag name, case-insensitive.
#[derive(Clone, Debug)]
pub struct TagBoundary {
    tag: String,
}

impl TagBoundary {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }
}

impl RowBoundary for TagBoundary {
    fn is_row(&self, tree: &Tree, id: Id) -> bool {
        tree.tag(id)
            .is_some_and(|t| t.eq_ignore_ascii_case(&self.tag))
    }
}

impl<F> RowBoundary for F
where
    F: Fn(&Tree, Id) -> bool,
{
    fn is_row(&self, tree: &Tree, id: Id) -> bool {
        self(tree, id)
    }
}

/// Nearest ancestor of `target` the boundary accepts. The target
/// itself is never the row.
pub fn find_row(tree: &Tree, target: Id, boundary: &impl RowBoundary) -> Option<Id> {
    tree.ancestors(target).find(|&a| boundary.is_row(tree, a))
}
