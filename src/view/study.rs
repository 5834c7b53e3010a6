use std::path::Path;

use crate::config::ViewConfig;
use crate::dom::{DomTree, NodeId};
use crate::error::Result;
use crate::interact::{Bindings, Event};
use crate::model::Document;
use crate::render::{Layout, build_document, render_nav};
use crate::style::ClassLookup;

use super::{Outcome, ViewState, apply_presentation, mount, remount, show_message};

/// Full listing with concealed blanks.
#[derive(Debug, Clone)]
pub struct StudyView {
    config: ViewConfig,
    tree: DomTree,
    bindings: Bindings,
    state: ViewState,
}

impl StudyView {
    /// Create the view in the loading state.
    pub fn new(config: ViewConfig) -> Self {
        Self {
            tree: mount(&config),
            config,
            bindings: Bindings::default(),
            state: ViewState::Loading,
        }
    }

    /// Create the view and load the document at `path`.
    pub fn open(config: ViewConfig, path: impl AsRef<Path>) -> Self {
        let mut view = Self::new(config);
        view.finish_load(Document::load(path));
        view
    }

    /// Render the loaded document, or the error message if loading failed.
    pub fn finish_load(&mut self, result: Result<Document>) {
        let doc = match result {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "study document failed to load");
                show_message(&mut self.tree, &format!("エラー: {e}"));
                self.bindings = Bindings::default();
                self.state = ViewState::Failed;
                return;
            }
        };

        let lookup = ClassLookup::from_style_map(&doc.style_map);
        let root = NodeId::ROOT;
        remount(&mut self.tree);

        render_nav(&mut self.tree, root, &doc.nav_links);
        build_document(&mut self.tree, root, &doc, &lookup, Layout::Study);
        render_nav(&mut self.tree, root, &doc.nav_links);

        self.bindings = Bindings::wire(&self.tree);
        self.state = ViewState::Ready;
        tracing::debug!(
            items = doc.item_count(),
            bindings = self.bindings.len(),
            "study view ready"
        );
    }

    /// Route an event through the bindings.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let Some(action) = self.bindings.resolve(&self.tree, event).cloned() else {
            return Outcome::Unchanged;
        };
        apply_presentation(&mut self.tree, &action).unwrap_or(Outcome::Unchanged)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::interact::{is_hidden, visible_text};
    use crate::render::hooks;

    const DATA: &str = r##"{
        "styles": {"red": ["b1"]},
        "page": {"nav": [{"href": "#s1", "label": "開国"}]},
        "sections": [{
            "id": "s1",
            "h2": "開国",
            "groups": [{"items": [{
                "id": "q1",
                "year": "1858",
                "parts": [
                    "日米修好通商",
                    {"blank": {"id": "b1", "answer": [{"t": "条約"}]}}
                ]
            }]}]
        }]
    }"##;

    #[test]
    fn test_loading_then_ready() {
        let mut view = StudyView::new(ViewConfig::default());
        assert_eq!(view.state(), ViewState::Loading);
        assert_eq!(view.tree().text_content(NodeId::ROOT), "読み込み中…");

        view.finish_load(Document::from_json(DATA));
        assert_eq!(view.state(), ViewState::Ready);
        assert_eq!(view.tree().find_by_class("jump-nav").count(), 2);
        assert!(view.tree().find_by_id("s1").is_some());
    }

    #[test]
    fn test_blank_reveal_example() {
        let mut view = StudyView::new(ViewConfig::default());
        view.finish_load(Document::from_json(DATA));
        let tree = view.tree();

        let answer = tree.find_by_class(hooks::FILL_ANSWER).next().unwrap();
        let inner = tree.children(answer).next().unwrap();
        assert!(tree.attrs.has_class(inner, "red"));
        assert!(is_hidden(tree, inner));

        let item = tree.find_by_class(hooks::FILL_LABEL).next().unwrap();
        let li = tree.ancestors(item).next().unwrap();
        assert_eq!(visible_text(tree, li), "1858：日米修好通商");

        let placeholder = tree.find_by_class(hooks::FILL_PLACEHOLDER).next().unwrap();
        assert_eq!(view.dispatch(Event::Click(placeholder)), Outcome::Updated);
        assert_eq!(view.dispatch(Event::Click(placeholder)), Outcome::Unchanged);

        let tree = view.tree();
        assert!(!is_hidden(tree, inner));
        assert_eq!(visible_text(tree, li), "1858：日米修好通商条約");
    }

    #[test]
    fn test_load_failure_shows_message_only() {
        let mut view = StudyView::new(ViewConfig::default());
        view.finish_load(Err(Error::Load("connection refused".into())));

        assert_eq!(view.state(), ViewState::Failed);
        let tree = view.tree();
        assert_eq!(tree.children(NodeId::ROOT).count(), 1);
        assert_eq!(
            tree.text_content(NodeId::ROOT),
            "エラー: Failed to load study data: connection refused"
        );
        assert!(view.bindings().is_empty());
    }

    #[test]
    fn test_reload_rebuilds_the_tree() {
        let mut view = StudyView::new(ViewConfig::default().with_mount_id("study"));
        view.finish_load(Document::from_json(DATA));
        let rendered = view.tree().node_count();

        view.finish_load(Document::from_json(DATA));
        assert_eq!(view.tree().node_count(), rendered);
        assert_eq!(view.tree().attrs.id(NodeId::ROOT), Some("study"));
        assert_eq!(view.tree().find_by_class("jump-nav").count(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let view = StudyView::open(ViewConfig::default(), "/nonexistent/bakumatsu.json");
        assert_eq!(view.state(), ViewState::Failed);
        assert!(view.tree().text_content(NodeId::ROOT).starts_with("エラー: "));
    }
}
