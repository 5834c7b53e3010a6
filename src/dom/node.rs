//! Output node types and roles.

/// Unique identifier for a node within a [`DomTree`](super::DomTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0). The root is the mount point.
    pub const ROOT: NodeId = NodeId(0);
}

/// Structural role of an output node.
///
/// Roles describe what a node is in the rendered page. Visual hooks (blank
/// controls, cards, token spans) are carried as classes in the
/// [`AttrMap`](super::AttrMap), the same way the styling layer targets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Leaf text content node containing actual string data.
    /// References a range in the tree's text buffer, which may be empty.
    #[default]
    Text,
    /// The mount point.
    Root,
    /// Generic block container (`<div>`).
    Container,
    /// Document section (`<section>`).
    Section,
    /// Headings with level 1-6.
    Heading(u8),
    /// Unordered list (`<ul>`).
    UnorderedList,
    /// Individual list items.
    ListItem,
    /// Bold lead-in (`<strong>`).
    Strong,
    /// Generic inline container (`<span>`).
    Inline,
    /// Ruby annotation container (`<ruby>`).
    Ruby,
    /// Ruby reading (`<rt>`).
    RubyText,
    /// Clickable control wrapper (`<label>`).
    Label,
    /// Checkbox input (`<input type="checkbox">`).
    Checkbox,
    /// Hyperlinks. href in AttrMap.
    Link,
    /// Push button (`<button>`).
    Button,
    /// Paragraph (`<p>`).
    Paragraph,
    /// Line break (`<br>`).
    Break,
}

impl Role {
    /// Whether the node can hold children.
    pub fn is_void(self) -> bool {
        matches!(self, Role::Text | Role::Checkbox | Role::Break)
    }
}

/// Range into the tree's text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    /// Byte offset into the buffer.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

impl TextRange {
    /// Create a new text range.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Check if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the end offset.
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}

/// A node in the output tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Structural role.
    pub role: Role,
    /// Parent node (None for root and for detached nodes).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node, kept so appends stay O(1).
    pub last_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
    /// Text content range (only for Text nodes).
    pub text: TextRange,
}

impl Node {
    /// Create a new node with default values.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            text: TextRange::default(),
        }
    }

    /// Create a text node with the given range.
    pub fn text(range: TextRange) -> Self {
        Self {
            text: range,
            ..Self::new(Role::Text)
        }
    }
}
