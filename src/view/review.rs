use crate::config::ViewConfig;
use crate::dom::{DomTree, NodeId, Role};
use crate::error::Result;
use crate::interact::{self, Action, Bindings, Event, GlobalAction};
use crate::model::Document;
use crate::render::{Layout, build_document, hooks};
use crate::review::{ReviewSet, ReviewStore, filter_document};
use crate::style::ClassLookup;

use super::{
    BACK_LABEL, CLEAR_CONFIRM, CLEAR_LABEL, Outcome, Prompt, ViewState, apply_presentation,
    mount, remount, show_empty_state, show_message,
};

/// Listing of the items in the review set, answers open.
///
/// The store is read once when the document arrives and written on every
/// change of the set. Stored ids that match no item are kept but never
/// count as something to review.
#[derive(Debug)]
pub struct ReviewView<S> {
    config: ViewConfig,
    store: S,
    tree: DomTree,
    bindings: Bindings,
    state: ViewState,
    /// Ids of the rendered rows, in document order.
    shown: Vec<String>,
}

impl<S: ReviewStore> ReviewView<S> {
    /// Create the view in the loading state.
    pub fn new(config: ViewConfig, store: S) -> Self {
        Self {
            tree: mount(&config),
            config,
            store,
            bindings: Bindings::default(),
            state: ViewState::Loading,
            shown: Vec::new(),
        }
    }

    /// Render the loaded document filtered by the stored set, the empty
    /// state if no item of the document is in the set, or the error message
    /// if loading failed.
    pub fn finish_load(&mut self, result: Result<Document>) {
        let doc = match result {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "review document failed to load");
                show_message(&mut self.tree, &format!("読み込みエラー: {e}"));
                self.bindings = Bindings::default();
                self.state = ViewState::Failed;
                self.shown.clear();
                return;
            }
        };

        let set = self.store.load();
        let filtered = filter_document(&doc, &set);
        self.shown = filtered.items().map(|item| item.id.clone()).collect();
        if self.shown.is_empty() {
            if !set.is_empty() {
                tracing::debug!(checked = set.len(), "no stored id matches an item");
            }
            self.enter_empty_state();
            return;
        }

        let lookup = ClassLookup::from_style_map(&doc.style_map);
        let root = NodeId::ROOT;
        remount(&mut self.tree);
        self.render_top_bar();
        let content = self.tree.append_element(root, Role::Container);
        self.tree.attrs.set_id(content, hooks::REVIEW_CONTENT_ID);
        build_document(&mut self.tree, content, &filtered, &lookup, Layout::Review);

        self.bindings = Bindings::wire(&self.tree);
        self.state = ViewState::Ready;
        tracing::debug!(
            checked = set.len(),
            shown = filtered.item_count(),
            "review view ready"
        );
    }

    /// Route an event through the bindings. `prompt` is asked before the
    /// set is cleared.
    pub fn dispatch(&mut self, event: Event, prompt: &mut impl Prompt) -> Outcome {
        let Some(action) = self.bindings.resolve(&self.tree, event).cloned() else {
            return Outcome::Unchanged;
        };
        if let Some(outcome) = apply_presentation(&mut self.tree, &action) {
            return outcome;
        }

        match action {
            Action::SetReviewed { item, row } => {
                let checked = match event {
                    Event::Change { target, checked } => {
                        self.tree.attrs.set_checked(target, checked);
                        checked
                    }
                    Event::Click(_) => return Outcome::Unchanged,
                };
                self.set_reviewed(&item, row, checked)
            }
            Action::Global(GlobalAction::BackToListing) => self.back_to_listing(),
            Action::Global(GlobalAction::ClearAllChecked) => self.clear_all(prompt),
            Action::RevealBlank { .. } | Action::ToggleCard { .. } => Outcome::Unchanged,
        }
    }

    /// Global action: clear the whole set after confirmation.
    pub fn clear_all(&mut self, prompt: &mut impl Prompt) -> Outcome {
        if !prompt.confirm(CLEAR_CONFIRM) {
            return Outcome::Unchanged;
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear review set");
        }
        self.shown.clear();
        self.enter_empty_state();
        Outcome::EmptyState
    }

    /// Global action: leave for the listing page.
    pub fn back_to_listing(&self) -> Outcome {
        Outcome::Navigate(self.config.listing_href.clone())
    }

    /// The set as currently stored.
    pub fn checked(&self) -> ReviewSet {
        self.store.load()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read-modify-write of the stored set. The row stays rendered either
    /// way; an unchecked row is dimmed. Once no rendered row is left in the
    /// set the view turns to the empty state, whatever else the set holds.
    fn set_reviewed(&mut self, item: &str, row: NodeId, checked: bool) -> Outcome {
        let mut set = self.store.load();
        if checked {
            set.check(item);
        } else {
            set.uncheck(item);
        }
        if let Err(e) = self.store.save(&set) {
            tracing::warn!(item, error = %e, "failed to save review set");
        }

        interact::set_row_dimmed(&mut self.tree, row, !checked);

        if !self.shown.iter().any(|id| set.contains(id)) {
            self.enter_empty_state();
            return Outcome::EmptyState;
        }
        Outcome::Updated
    }

    fn render_top_bar(&mut self) {
        let nav = self
            .tree
            .append_with_class(NodeId::ROOT, Role::Container, hooks::REVIEW_NAV);
        let back = self
            .tree
            .append_with_class(nav, Role::Button, hooks::BACK_TO_LISTING);
        self.tree.append_text_node(back, BACK_LABEL);
        let clear = self.tree.append_with_class(nav, Role::Button, hooks::CLEAR_ALL);
        self.tree.append_text_node(clear, CLEAR_LABEL);
    }

    fn enter_empty_state(&mut self) {
        show_empty_state(&mut self.tree, &self.config.listing_href);
        self.bindings = Bindings::wire(&self.tree);
        self.state = ViewState::Empty;
    }
}
