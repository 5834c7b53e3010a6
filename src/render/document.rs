//! Sections, groups and items → output nodes.

use crate::dom::{DomTree, NodeId, Role};
use crate::model::{Document, Group, Item, NavLink, Section};
use crate::style::ClassLookup;

use super::hooks;
use super::inline::{BlankMode, InlineRenderer};

/// Separator glyph after the year lead-in (full-width colon).
pub const YEAR_SEPARATOR: &str = "：";

/// Page layout for the document builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Full listing: plain list entries, concealed blanks.
    #[default]
    Study,
    /// Review listing: check control and card per item, open blanks.
    Review,
}

impl Layout {
    pub fn blank_mode(self) -> BlankMode {
        match self {
            Layout::Study => BlankMode::Concealed,
            Layout::Review => BlankMode::Open,
        }
    }
}

/// Append every section of `doc` to `parent`.
///
/// Groups without items are skipped. In the review layout a section left
/// without any group is skipped too; study pages keep its heading as a jump
/// target.
pub fn build_document(
    tree: &mut DomTree,
    parent: NodeId,
    doc: &Document,
    lookup: &ClassLookup,
    layout: Layout,
) {
    let builder = SectionBuilder {
        inline: InlineRenderer::new(lookup, layout.blank_mode()),
        layout,
    };
    for section in &doc.sections {
        builder.section(tree, parent, section);
    }
}

/// Append the jump navigation box: "▶ " then the links separated by breaks.
pub fn render_nav(tree: &mut DomTree, parent: NodeId, links: &[NavLink]) -> NodeId {
    let nav = tree.append_with_class(parent, Role::Container, hooks::JUMP_NAV);
    tree.append_text_node(nav, "▶ ");
    for (i, link) in links.iter().enumerate() {
        let a = tree.append_element(nav, Role::Link);
        tree.attrs.set_href(a, &link.href);
        tree.append_text_node(a, &link.label);
        if i + 1 != links.len() {
            tree.append_element(nav, Role::Break);
        }
    }
    nav
}

struct SectionBuilder<'a> {
    inline: InlineRenderer<'a>,
    layout: Layout,
}

impl SectionBuilder<'_> {
    fn section(&self, tree: &mut DomTree, parent: NodeId, section: &Section) {
        if self.layout == Layout::Review && section.groups.iter().all(|g| g.items.is_empty()) {
            return;
        }

        let sec = tree.append_element(parent, Role::Section);
        let h2 = tree.append_element(sec, Role::Heading(2));
        tree.append_text_node(h2, &section.heading);

        // Study pages anchor the heading, review pages the section.
        match self.layout {
            Layout::Study => tree.attrs.set_id(h2, &section.anchor_id),
            Layout::Review => tree.attrs.set_id(sec, &section.anchor_id),
        }

        for group in section.groups.iter().filter(|g| !g.items.is_empty()) {
            self.group(tree, sec, group);
        }
    }

    fn group(&self, tree: &mut DomTree, sec: NodeId, group: &Group) {
        match self.layout {
            Layout::Study => {
                if let Some(heading) = group.heading.as_deref().filter(|h| !h.is_empty()) {
                    let h3 = tree.append_element(sec, Role::Heading(3));
                    tree.append_text_node(h3, heading);
                }
                let ul = tree.append_element(sec, Role::UnorderedList);
                if let Some(class) = &group.class {
                    tree.attrs.add_class(ul, class);
                }
                for item in &group.items {
                    self.study_item(tree, ul, item);
                }
            }
            Layout::Review => {
                let ul = tree.append_with_class(sec, Role::UnorderedList, hooks::Q_LIST);
                for item in &group.items {
                    self.review_item(tree, ul, item);
                }
            }
        }
    }

    fn study_item(&self, tree: &mut DomTree, ul: NodeId, item: &Item) {
        let li = tree.append_element(ul, Role::ListItem);
        if let Some(class) = &item.class {
            tree.attrs.add_class(li, class);
        }
        tree.attrs.set_item(li, &item.id);
        self.item_content(tree, li, item, None, None);
    }

    /// `li.q-item > label.q-check-label > input.q-remember-check[checked]`
    /// then `div.q-card > div.q-card-content`.
    fn review_item(&self, tree: &mut DomTree, ul: NodeId, item: &Item) {
        let li = tree.append_with_class(ul, Role::ListItem, hooks::Q_ITEM);
        tree.attrs.set_item(li, &item.id);

        let label = tree.append_with_class(li, Role::Label, hooks::Q_CHECK_LABEL);
        let check = tree.append_with_class(label, Role::Checkbox, hooks::Q_REMEMBER_CHECK);
        tree.attrs.set_checked(check, true);

        let card = tree.append_with_class(li, Role::Container, hooks::Q_CARD);
        let content = tree.append_with_class(card, Role::Container, hooks::Q_CARD_CONTENT);
        self.item_content(tree, content, item, Some(hooks::Q_YEAR), Some(hooks::Q_TERM));
    }

    /// Year lead-in, term wrapper, then the body inline into `container`.
    fn item_content(
        &self,
        tree: &mut DomTree,
        container: NodeId,
        item: &Item,
        year_class: Option<&str>,
        term_class: Option<&str>,
    ) {
        if let Some(year) = item.year.as_deref().filter(|y| !y.is_empty()) {
            let strong = tree.append_element(container, Role::Strong);
            if let Some(class) = year_class {
                tree.attrs.add_class(strong, class);
            }
            tree.append_text_node(strong, &format!("{year}{YEAR_SEPARATOR}"));
        }

        if let Some(term) = item.term.as_deref().filter(|t| !t.is_empty()) {
            let span = tree.append_element(container, Role::Inline);
            if let Some(class) = term_class {
                tree.attrs.add_class(span, class);
            }
            self.inline.render(tree, span, term);
        }

        if let Some(body) = item.body.as_deref() {
            self.inline.render(tree, container, body);
        }
    }
}
