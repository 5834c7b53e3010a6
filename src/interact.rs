//! Interaction contract for a rendered tree.
//!
//! Rendering never wires behavior. After a tree is built, [`Bindings::wire`]
//! walks it once and records which action each interactive node triggers,
//! keyed by node identity. Views route [`Event`]s through the bindings and
//! apply the resulting [`Action`].
//!
//! Presentation state lives on the tree as class markers and inline style,
//! so the same queries ([`is_hidden`], [`visible_text`]) answer "what does
//! the reader see" for any backend.

use std::collections::HashMap;

use crate::dom::{DomTree, NodeId, Role};
use crate::render::hooks;

/// Inline style for a row the reader unchecked.
pub const DIMMED_STYLE: &str = "opacity:0.3";
/// Inline style for a row that is checked again.
pub const UNDIMMED_STYLE: &str = "opacity:1";

/// Input delivered to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The node was clicked.
    Click(NodeId),
    /// A checkbox changed to `checked`.
    Change { target: NodeId, checked: bool },
}

/// Page-wide actions reachable from the review top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    BackToListing,
    ClearAllChecked,
}

/// What an interactive node does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the answer of the blank control.
    RevealBlank { control: NodeId },
    /// Flip the expanded marker of a detail card.
    ToggleCard { card: NodeId },
    /// Add or remove `item` from the review set; `row` is the rendered item.
    SetReviewed { item: String, row: NodeId },
    Global(GlobalAction),
}

/// Node identity → action, for clicks and for checkbox changes.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    click: HashMap<NodeId, Action>,
    change: HashMap<NodeId, Action>,
}

impl Bindings {
    /// Bind every interactive node of `tree`.
    pub fn wire(tree: &DomTree) -> Self {
        let mut bindings = Self::default();

        for id in tree.iter_dfs() {
            let attrs = &tree.attrs;

            if attrs.has_class(id, hooks::FILL_PLACEHOLDER)
                && let Some(control) = tree.closest_with_class(id, hooks::FILL_LABEL)
            {
                bindings.click.insert(id, Action::RevealBlank { control });
            } else if attrs.has_class(id, hooks::Q_CARD) {
                bindings.click.insert(id, Action::ToggleCard { card: id });
            } else if attrs.has_class(id, hooks::Q_REMEMBER_CHECK) {
                let row = tree.closest_with_class(id, hooks::Q_ITEM);
                if let Some((row, item)) = row.and_then(|r| attrs.item(r).map(|i| (r, i))) {
                    let action = Action::SetReviewed {
                        item: item.to_string(),
                        row,
                    };
                    bindings.change.insert(id, action);
                }
            } else if attrs.has_class(id, hooks::BACK_TO_LISTING) {
                let action = Action::Global(GlobalAction::BackToListing);
                bindings.click.insert(id, action);
            } else if attrs.has_class(id, hooks::CLEAR_ALL) {
                let action = Action::Global(GlobalAction::ClearAllChecked);
                bindings.click.insert(id, action);
            }
        }

        bindings
    }

    /// The action an event triggers, if its target is bound.
    ///
    /// A click lands on the innermost node under the pointer, so click
    /// targets without a binding of their own bubble up to the nearest bound
    /// ancestor.
    pub fn resolve(&self, tree: &DomTree, event: Event) -> Option<&Action> {
        match event {
            Event::Click(target) => std::iter::once(target)
                .chain(tree.ancestors(target))
                .find_map(|n| self.click.get(&n)),
            Event::Change { target, .. } => self.change.get(&target),
        }
    }

    /// Number of bound nodes.
    pub fn len(&self) -> usize {
        self.click.len() + self.change.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reveal the answer of a blank control. Returns `true` if this call
/// changed anything; revealing again is a no-op.
pub fn reveal_blank(tree: &mut DomTree, control: NodeId) -> bool {
    if tree.attrs.has_class(control, hooks::SHOW_ANSWER) {
        return false;
    }
    tree.attrs.add_class(control, hooks::SHOW_ANSWER);
    true
}

/// Flip the expanded marker of a card. Returns the new state.
pub fn toggle_card(tree: &mut DomTree, card: NodeId) -> bool {
    tree.attrs.toggle_class(card, hooks::IS_OPEN)
}

/// Dim or restore a review row. The row stays in the tree either way.
pub fn set_row_dimmed(tree: &mut DomTree, row: NodeId, dimmed: bool) {
    let style = if dimmed { DIMMED_STYLE } else { UNDIMMED_STYLE };
    tree.attrs.set_style(row, style);
}

pub fn is_dimmed(tree: &DomTree, row: NodeId) -> bool {
    tree.attrs.style(row) == Some(DIMMED_STYLE)
}

/// Whether the card is expanded.
pub fn is_open(tree: &DomTree, card: NodeId) -> bool {
    tree.attrs.has_class(card, hooks::IS_OPEN)
}

/// Whether `node` sits inside a concealed answer region, i.e. a
/// `.fill-answer` whose blank control has not been revealed.
pub fn is_hidden(tree: &DomTree, node: NodeId) -> bool {
    std::iter::once(node)
        .chain(tree.ancestors(node))
        .filter(|n| tree.attrs.has_class(*n, hooks::FILL_ANSWER))
        .any(|answer| {
            tree.closest_with_class(answer, hooks::FILL_LABEL)
                .is_none_or(|label| !tree.attrs.has_class(label, hooks::SHOW_ANSWER))
        })
}

/// Text the reader sees under `node`, in reading order. Ruby readings are
/// included; concealed answers are not.
pub fn visible_text(tree: &DomTree, node: NodeId) -> String {
    tree.descendants(node)
        .filter(|n| tree.role(*n) == Some(Role::Text))
        .filter(|n| !is_hidden(tree, *n))
        .filter_map(|n| tree.node(n).map(|node| tree.text(node.text)))
        .collect()
}
