//! Study and review views.
//!
//! A view owns the mount point (the root of its [`DomTree`]) and moves
//! through a small lifecycle:
//!
//! - **Loading**: the mount shows a loading message.
//! - **Failed**: the document could not be loaded; the mount shows the plain
//!   error message and nothing else. There is no retry.
//! - **Ready**: the document is rendered and wired for interaction.
//! - **Empty**: (review only) no item is in the review set.
//!
//! Events are delivered with `dispatch`, which routes them through the
//! [`Bindings`](crate::interact::Bindings) built for the current tree and
//! reports what changed as an [`Outcome`].

mod review;
mod study;

pub use review::ReviewView;
pub use study::StudyView;

use crate::config::ViewConfig;
use crate::dom::{DomTree, NodeId, Role};
use crate::interact::{self, Action};
use crate::render::hooks;

/// Mount text while the document loads.
pub const LOADING_TEXT: &str = "読み込み中…";
/// Message shown when the review set is empty.
pub const EMPTY_MESSAGE: &str = "現在、チェックをつけている問題はありません。";
/// Label of the empty-state link back to the listing.
pub const EMPTY_LINK_LABEL: &str = "一覧ページに戻ってチェックを入れる";
/// Question asked before clearing the review set.
pub const CLEAR_CONFIRM: &str = "チェックをすべて消去しますか？";
pub const BACK_LABEL: &str = "一覧に戻る";
pub const CLEAR_LABEL: &str = "全消去";

/// Lifecycle state of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Failed,
    Ready,
    Empty,
}

/// Result of dispatching an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was bound to the event, or it changed nothing.
    Unchanged,
    /// Presentation or review state changed in place.
    Updated,
    /// The host should navigate to this href.
    Navigate(String),
    /// The view switched to the empty state.
    EmptyState,
}

/// Asks the reader to confirm a destructive action.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Prompt for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// A fresh tree whose root carries the mount id and shows the loading text.
fn mount(config: &ViewConfig) -> DomTree {
    let mut tree = DomTree::new();
    tree.attrs.set_id(NodeId::ROOT, &config.mount_id);
    tree.append_text_node(NodeId::ROOT, LOADING_TEXT);
    tree
}

/// Swap in an empty tree that keeps the mount id. Everything rendered
/// before is dropped with the old arena.
fn remount(tree: &mut DomTree) {
    let mut fresh = DomTree::new();
    if let Some(mount_id) = tree.attrs.id(NodeId::ROOT) {
        fresh.attrs.set_id(NodeId::ROOT, mount_id);
    }
    *tree = fresh;
}

/// Replace the mount content with a single text message.
fn show_message(tree: &mut DomTree, message: &str) {
    remount(tree);
    tree.append_text_node(NodeId::ROOT, message);
}

/// Replace the mount content with the empty-state message and a link back
/// to the listing.
fn show_empty_state(tree: &mut DomTree, listing_href: &str) {
    remount(tree);
    let wrap = tree.append_with_class(NodeId::ROOT, Role::Container, hooks::EMPTY_STATE);
    let p = tree.append_element(wrap, Role::Paragraph);
    tree.append_text_node(p, EMPTY_MESSAGE);
    let p = tree.append_element(wrap, Role::Paragraph);
    let a = tree.append_element(p, Role::Link);
    tree.attrs.set_href(a, listing_href);
    tree.append_text_node(a, EMPTY_LINK_LABEL);
}

/// Apply an action that only touches presentation state. Returns `None`
/// for actions that need the view.
fn apply_presentation(tree: &mut DomTree, action: &Action) -> Option<Outcome> {
    match action {
        Action::RevealBlank { control } => Some(if interact::reveal_blank(tree, *control) {
            Outcome::Updated
        } else {
            Outcome::Unchanged
        }),
        Action::ToggleCard { card } => {
            interact::toggle_card(tree, *card);
            Some(Outcome::Updated)
        }
        Action::SetReviewed { .. } | Action::Global(_) => None,
    }
}
