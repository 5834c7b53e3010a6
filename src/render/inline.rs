//! Inline content → output nodes.
//!
//! Appends one rendered fragment per [`InlineNode`], in sequence order, to a
//! target node:
//!
//! | node    | output |
//! |---------|--------|
//! | `Text`  | text leaf (kept even when empty) |
//! | `Gloss` | `<ruby>base<rt>reading</rt></ruby>` |
//! | `Token` | `<span data-token=id class=resolved>` around text or ruby |
//! | `Blank` | depends on [`BlankMode`] |
//!
//! Blank answers are rendered by recursing into the same renderer, so blanks
//! nest to any depth.

use crate::dom::{DomTree, NodeId, Role};
use crate::model::{Blank, InlineNode, TokenBody};
use crate::style::ClassLookup;

use super::hooks;

/// How blanks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankMode {
    /// Study mode: a reveal control with the answer present but hidden.
    #[default]
    Concealed,
    /// Review mode: a neutral marker followed by the visible answer.
    Open,
}

/// Renders inline content with a fixed class lookup and blank mode.
#[derive(Debug, Clone, Copy)]
pub struct InlineRenderer<'a> {
    lookup: &'a ClassLookup,
    mode: BlankMode,
}

impl<'a> InlineRenderer<'a> {
    pub fn new(lookup: &'a ClassLookup, mode: BlankMode) -> Self {
        Self { lookup, mode }
    }

    pub fn mode(&self) -> BlankMode {
        self.mode
    }

    /// Append the rendering of `nodes` to `target`, in order.
    pub fn render(&self, tree: &mut DomTree, target: NodeId, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(value) => {
                    tree.append_text_node(target, value);
                }
                InlineNode::Gloss { base, reading } => {
                    append_ruby(tree, target, base, reading);
                }
                InlineNode::Token { id, body } => self.render_token(tree, target, id, body),
                InlineNode::Blank(blank) => match self.mode {
                    BlankMode::Concealed => self.render_concealed_blank(tree, target, blank),
                    BlankMode::Open => self.render_open_blank(tree, target, blank),
                },
            }
        }
    }

    fn render_token(&self, tree: &mut DomTree, target: NodeId, id: &str, body: &TokenBody) {
        let span = tree.append_element(target, Role::Inline);
        tree.attrs.set_token(span, id);
        if let Some(class) = self.lookup.get(id) {
            tree.attrs.add_class(span, class);
        }

        match body {
            TokenBody::Gloss { base, reading } => {
                append_ruby(tree, span, base, reading);
            }
            TokenBody::Text(value) => {
                tree.append_text_node(span, value);
            }
        }
    }

    /// `label.fill-label > input + span.fill-placeholder + span.fill-answer > span`
    fn render_concealed_blank(&self, tree: &mut DomTree, target: NodeId, blank: &Blank) {
        let label = tree.append_with_class(target, Role::Label, hooks::FILL_LABEL);
        let input = tree.append_element(label, Role::Checkbox);
        tree.attrs.set_checked(input, false);
        tree.append_with_class(label, Role::Inline, hooks::FILL_PLACEHOLDER);

        let outer = tree.append_with_class(label, Role::Inline, hooks::FILL_ANSWER);
        let inner = tree.append_element(outer, Role::Inline);
        self.style_answer(tree, inner, blank);

        self.render(tree, inner, &blank.answer);
    }

    /// `span.q-blank` followed by `span.q-answer`
    fn render_open_blank(&self, tree: &mut DomTree, target: NodeId, blank: &Blank) {
        tree.append_with_class(target, Role::Inline, hooks::Q_BLANK);
        let answer = tree.append_with_class(target, Role::Inline, hooks::Q_ANSWER);
        self.style_answer(tree, answer, blank);

        self.render(tree, answer, &blank.answer);
    }

    /// Apply the explicit answer class, then the class resolved from the
    /// blank's token id.
    fn style_answer(&self, tree: &mut DomTree, node: NodeId, blank: &Blank) {
        if let Some(class) = &blank.answer_class {
            tree.attrs.add_class(node, class);
        }
        if let Some(id) = &blank.id {
            tree.attrs.set_token(node, id);
            if let Some(class) = self.lookup.get(id) {
                tree.attrs.add_class(node, class);
            }
        }
    }
}

/// Append the rendering of `nodes` to `target`.
pub fn render_inline(
    tree: &mut DomTree,
    target: NodeId,
    nodes: &[InlineNode],
    lookup: &ClassLookup,
    mode: BlankMode,
) {
    InlineRenderer::new(lookup, mode).render(tree, target, nodes);
}

fn append_ruby(tree: &mut DomTree, parent: NodeId, base: &str, reading: &str) -> NodeId {
    let ruby = tree.append_element(parent, Role::Ruby);
    tree.append_text_node(ruby, base);
    let rt = tree.append_element(ruby, Role::RubyText);
    tree.append_text_node(rt, reading);
    ruby
}
