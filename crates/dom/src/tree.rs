pub type RawId = u32;

/// Handle to a node within a [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub RawId);

#[derive(Debug)]
enum NodeData {
    Element {
        tag: String,
        attributes: Vec<(String, Option<String>)>,
        style: Vec<(String, String)>,
    },
    Text {
        text: String,
    },
}

/// Arena-backed element tree with parent links.
///
/// Nodes are append-only; removal is not needed by either behavior
/// (trackers hold their own registries and simply stop seeing ids that
/// no longer resolve).
#[derive(Debug, Default)]
pub struct Tree {
    nodes: Vec<NodeData>,
    parents: Vec<Option<Id>>,
    children: Vec<Vec<Id>>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<Id>, data: NodeData) -> Id {
        let id = Id(self.nodes.len() as RawId);
        self.nodes.push(data);
        self.parents.push(parent);
        self.children.push(Vec::new());
        if let Some(p) = parent
            && let Some(slot) = self.children.get_mut(p.0 as usize)
        {
            slot.push(id);
        }
        id
    }

    /// Append an element node. `parent = None` creates a root.
    pub fn add_element(
        &mut self,
        parent: Option<Id>,
        tag: &str,
        attributes: Vec<(String, Option<String>)>,
    ) -> Id {
        self.push(
            parent,
            NodeData::Element {
                tag: tag.to_string(),
                attributes,
                style: Vec::new(),
            },
        )
    }

    /// Append a text node under `parent`.
    pub fn add_text(&mut self, parent: Id, text: &str) -> Id {
        self.push(
            Some(parent),
            NodeData::Text {
                text: text.to_string(),
            },
        )
    }

    /// Replace the style declarations of an element. Property names are
    /// expected lowercase, as after cascade.
    pub fn set_style(&mut self, id: Id, declarations: Vec<(String, String)>) {
        if let Some(NodeData::Element { style, .. }) = self.nodes.get_mut(id.0 as usize) {
            *style = declarations;
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    /// Tag of an element, or `None` for text nodes and unknown ids.
    pub fn tag(&self, id: Id) -> Option<&str> {
        match self.nodes.get(id.0 as usize)? {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            NodeData::Text { .. } => None,
        }
    }

    /// Attribute lookup, case-insensitive on the attribute name.
    pub fn attr(&self, id: Id, name: &str) -> Option<&str> {
        match self.nodes.get(id.0 as usize)? {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.as_deref()),
            NodeData::Text { .. } => None,
        }
    }

    pub fn has_attr(&self, id: Id, name: &str) -> bool {
        match self.nodes.get(id.0 as usize) {
            Some(NodeData::Element { attributes, .. }) => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    /// Style declarations of an element (empty for text nodes / unknown ids).
    pub fn style(&self, id: Id) -> &[(String, String)] {
        match self.nodes.get(id.0 as usize) {
            Some(NodeData::Element { style, .. }) => style.as_slice(),
            _ => &[],
        }
    }

    /// Every node id in the tree, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        (0..self.nodes.len()).map(|i| Id(i as RawId))
    }

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.parents.get(id.0 as usize).copied().flatten()
    }

    /// Walk from `id` toward the root, excluding `id` itself.
    pub fn ancestors(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        let mut cur = self.parent(id);
        std::iter::from_fn(move || {
            let next = cur?;
            cur = self.parent(next);
            Some(next)
        })
    }

    /// Pre-order walk of the subtree rooted at `id`, excluding `id` itself.
    pub fn descendants(&self, id: Id) -> Vec<Id> {
        let mut out = Vec::new();
        let mut stack: Vec<Id> = match self.children.get(id.0 as usize) {
            Some(kids) => kids.iter().rev().copied().collect(),
            None => Vec::new(),
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(kids) = self.children.get(next.0 as usize) {
                stack.extend(kids.iter().rev().copied());
            }
        }
        out
    }

    /// Concatenated text content of the subtree under `id`.
    pub fn collect_text(&self, id: Id, out: &mut String) {
        if let Some(NodeData::Text { text }) = self.nodes.get(id.0 as usize) {
            out.push_str(text);
        }
        if let Some(kids) = self.children.get(id.0 as usize) {
            for &kid in kids {
                self.collect_text(kid, out);
            }
        }
    }
}
