//! Output tree the renderers append to.
//!
//! The tree is backend-neutral: renderers only allocate nodes and append them
//! in order, and a backend (the HTML synthesizer in [`crate::export`], a test
//! assertion, a native widget tree) walks it afterwards.
//!
//! # Example
//!
//! ```
//! use rekishi::dom::{DomTree, NodeId, Role};
//!
//! let mut tree = DomTree::new();
//! let p = tree.append_element(NodeId::ROOT, Role::Paragraph);
//! tree.append_text_node(p, "黒船来航");
//! assert_eq!(tree.text_content(NodeId::ROOT), "黒船来航");
//! ```

mod attrs;
mod node;

pub use attrs::AttrMap;
pub use node::{Node, NodeId, Role, TextRange};

/// An arena-backed output tree.
///
/// Uses a parent-pointer / first-child / next-sibling representation. Index 0
/// is always the root, which stands for the mount point.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes ever allocated (index 0 is always the root).
    nodes: Vec<Node>,
    /// Sparse attributes (id, href, classes, data-*).
    pub attrs: AttrMap,
    /// Text buffer (text nodes reference ranges into this).
    text: String,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    /// Create a new tree with only a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Role::Root)],
            attrs: AttrMap::new(),
            text: String::new(),
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get the role of a node.
    pub fn role(&self, id: NodeId) -> Option<Role> {
        self.node(id).map(|n| n.role)
    }

    /// Get the number of allocated nodes, detached ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new node and return its ID.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append text to the buffer and return the range.
    pub fn append_text(&mut self, text: &str) -> TextRange {
        let start = self.text.len() as u32;
        self.text.push_str(text);
        TextRange::new(start, text.len() as u32)
    }

    /// Get text from a range.
    pub fn text(&self, range: TextRange) -> &str {
        let start = range.start as usize;
        let end = range.end() as usize;
        &self.text[start..end]
    }

    /// Append a child node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let last = self.nodes.get(parent.0 as usize).and_then(|n| n.last_child);

        if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
            child_node.parent = Some(parent);
            child_node.next_sibling = None;
        }

        match last {
            Some(last) => {
                if let Some(last_node) = self.nodes.get_mut(last.0 as usize) {
                    last_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
                    parent_node.first_child = Some(child);
                }
            }
        }

        if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
            parent_node.last_child = Some(child);
        }
    }

    /// Allocate an element with the given role and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, role: Role) -> NodeId {
        let id = self.alloc_node(Node::new(role));
        self.append_child(parent, id);
        id
    }

    /// Allocate an element carrying `class` and append it to `parent`.
    pub fn append_with_class(&mut self, parent: NodeId, role: Role, class: &str) -> NodeId {
        let id = self.append_element(parent, role);
        self.attrs.add_class(id, class);
        id
    }

    /// Allocate a text leaf and append it to `parent`. Empty text still
    /// produces a node.
    pub fn append_text_node(&mut self, parent: NodeId, text: &str) -> NodeId {
        let range = self.append_text(text);
        let id = self.alloc_node(Node::text(range));
        self.append_child(parent, id);
        id
    }

    /// Detach every child of `parent`. Detached nodes stay allocated but are
    /// no longer reachable from the root.
    ///
    /// Nothing is reclaimed: the nodes, their text and their attributes keep
    /// their arena slots until the tree is dropped. Callers that re-render
    /// the whole tree repeatedly should build a new `DomTree` instead.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children: Vec<NodeId> = self.children(parent).collect();
        for child in children {
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                node.parent = None;
                node.next_sibling = None;
            }
        }
        if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
            parent_node.first_child = None;
            parent_node.last_child = None;
        }
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self
            .nodes
            .get(parent.0 as usize)
            .and_then(|n| n.first_child);
        ChildIter {
            tree: self,
            current: first_child,
        }
    }

    /// Iterate over the ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).and_then(|n| n.parent), |current| {
            self.node(*current).and_then(|n| n.parent)
        })
    }

    /// The node itself or its nearest ancestor carrying `class`.
    pub fn closest_with_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|n| self.attrs.has_class(*n, class))
    }

    /// Whether `id` is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.ancestors(id).any(|n| n == NodeId::ROOT)
    }

    /// Iterate over all attached nodes in depth-first order.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        self.descendants(NodeId::ROOT)
    }

    /// Iterate over `id` and everything below it in depth-first order.
    pub fn descendants(&self, id: NodeId) -> DfsIter<'_> {
        DfsIter {
            tree: self,
            stack: vec![id],
        }
    }

    /// Attached nodes carrying `class`, in document order.
    pub fn find_by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.iter_dfs()
            .filter(move |id| self.attrs.has_class(*id, class))
    }

    /// First attached node whose id attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_dfs().find(|n| self.attrs.id(*n) == Some(id))
    }

    /// All text under a node, in reading order.
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|n| self.node(n))
            .filter(|n| n.role == Role::Text)
            .map(|n| self.text(n.text))
            .collect()
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .tree
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over a subtree.
pub struct DfsIter<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.tree.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}
