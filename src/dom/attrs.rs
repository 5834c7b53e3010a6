//! Sparse attributes for output nodes.
//!
//! Most nodes carry no attributes, so they live in side tables keyed by
//! [`NodeId`] instead of on every node. Fixed string values share one buffer
//! referenced through [`TextRange`]; class lists are mutable because
//! interaction handlers add and remove presentation markers.

use std::collections::HashMap;

use super::node::{NodeId, TextRange};

/// Sparse map for node attributes.
#[derive(Debug, Default, Clone)]
pub struct AttrMap {
    /// Contiguous buffer for string attribute values.
    buffer: String,
    /// id attribute (section anchors, mount point).
    id: HashMap<NodeId, TextRange>,
    /// href attribute (for links).
    href: HashMap<NodeId, TextRange>,
    /// data-token attribute (token spans, blank answers).
    token: HashMap<NodeId, TextRange>,
    /// data-item attribute (review rows).
    item: HashMap<NodeId, TextRange>,
    /// Inline style, rewritten by handlers.
    style: HashMap<NodeId, String>,
    /// Class list, in insertion order.
    classes: HashMap<NodeId, Vec<String>>,
    /// Checkbox state.
    checked: HashMap<NodeId, bool>,
}

impl AttrMap {
    /// Create a new empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&mut self, s: &str) -> TextRange {
        let start = self.buffer.len() as u32;
        self.buffer.push_str(s);
        TextRange::new(start, s.len() as u32)
    }

    fn get_str(&self, range: TextRange) -> &str {
        let start = range.start as usize;
        let end = range.end() as usize;
        &self.buffer[start..end]
    }

    // --- id ---

    /// Set the id for a node.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if !id.is_empty() {
            let range = self.append(id);
            self.id.insert(node, range);
        }
    }

    /// Get the id for a node.
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.id.get(&node).map(|r| self.get_str(*r))
    }

    // --- href ---

    /// Set the href for a node.
    pub fn set_href(&mut self, node: NodeId, href: &str) {
        if !href.is_empty() {
            let range = self.append(href);
            self.href.insert(node, range);
        }
    }

    /// Get the href for a node.
    pub fn href(&self, node: NodeId) -> Option<&str> {
        self.href.get(&node).map(|r| self.get_str(*r))
    }

    // --- data-token ---

    /// Tag a node with the semantic token it renders.
    pub fn set_token(&mut self, node: NodeId, token: &str) {
        if !token.is_empty() {
            let range = self.append(token);
            self.token.insert(node, range);
        }
    }

    pub fn token(&self, node: NodeId) -> Option<&str> {
        self.token.get(&node).map(|r| self.get_str(*r))
    }

    // --- data-item ---

    /// Tag a node with the item id it renders.
    pub fn set_item(&mut self, node: NodeId, item: &str) {
        if !item.is_empty() {
            let range = self.append(item);
            self.item.insert(node, range);
        }
    }

    pub fn item(&self, node: NodeId) -> Option<&str> {
        self.item.get(&node).map(|r| self.get_str(*r))
    }

    // --- style ---

    pub fn set_style(&mut self, node: NodeId, style: &str) {
        if style.is_empty() {
            self.style.remove(&node);
        } else {
            self.style.insert(node, style.to_string());
        }
    }

    pub fn style(&self, node: NodeId) -> Option<&str> {
        self.style.get(&node).map(String::as_str)
    }

    // --- checked ---

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.checked.insert(node, checked);
    }

    pub fn checked(&self, node: NodeId) -> Option<bool> {
        self.checked.get(&node).copied()
    }

    // --- classes ---

    /// Add a class, ignoring empty names and duplicates.
    /// Whitespace-separated names are added one by one.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        for name in class.split_whitespace() {
            let list = self.classes.entry(node).or_default();
            if !list.iter().any(|c| c == name) {
                list.push(name.to_string());
            }
        }
    }

    /// Remove a class. Returns `true` if it was present.
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        let Some(list) = self.classes.get_mut(&node) else {
            return false;
        };
        let before = list.len();
        list.retain(|c| c != class);
        let removed = list.len() != before;
        if list.is_empty() {
            self.classes.remove(&node);
        }
        removed
    }

    /// Flip a class. Returns `true` if the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.remove_class(node, class) {
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes
            .get(&node)
            .is_some_and(|list| list.iter().any(|c| c == class))
    }

    /// Classes of a node, in insertion order.
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.classes.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get an attribute by its HTML name.
    pub fn get_attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match name {
            "id" => self.id(node),
            "href" => self.href(node),
            "data-token" => self.token(node),
            "data-item" => self.item(node),
            "style" => self.style(node),
            _ => None,
        }
    }
}
