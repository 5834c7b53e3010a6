//! HTML synthesizer: walks a [`DomTree`] and emits markup.
//!
//! Block elements go on their own indented lines; inline elements and text
//! are emitted in place so that no whitespace leaks between inline runs
//! (ruby bases, blank placeholders and answers sit flush against the
//! surrounding text).
//!
//! # Example
//!
//! ```
//! use rekishi::dom::{DomTree, NodeId, Role};
//! use rekishi::export::synthesize_html;
//!
//! let mut tree = DomTree::new();
//! let ruby = tree.append_element(NodeId::ROOT, Role::Ruby);
//! tree.append_text_node(ruby, "攘夷");
//! let rt = tree.append_element(ruby, Role::RubyText);
//! tree.append_text_node(rt, "じょうい");
//!
//! assert_eq!(synthesize_html(&tree), "<ruby>攘夷<rt>じょうい</rt></ruby>");
//! ```

use std::fmt::Write;

use crate::dom::{DomTree, NodeId, Role};

/// Synthesize the markup of everything below the root (the mount point's
/// inner HTML).
pub fn synthesize_html(tree: &DomTree) -> String {
    let mut ctx = SynthesisContext {
        out: String::new(),
        tree,
        indent_level: 0,
    };

    for child_id in tree.children(NodeId::ROOT) {
        walk_node(child_id, &mut ctx);
    }

    ctx.out
}

/// Synthesize a complete HTML page (doctype, head, body). The root is
/// emitted as the mount container with its id attribute.
pub fn synthesize_html_document(
    tree: &DomTree,
    title: &str,
    stylesheet_href: Option<&str>,
) -> String {
    let mut doc = String::new();

    doc.push_str(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>"#,
    );
    doc.push_str(&escape_xml(title));
    doc.push_str("</title>\n");

    if let Some(href) = stylesheet_href {
        let _ = writeln!(
            doc,
            "  <link rel=\"stylesheet\" href=\"{}\"/>",
            escape_xml(href)
        );
    }

    doc.push_str("</head>\n<body>\n");

    let mut ctx = SynthesisContext {
        out: doc,
        tree,
        indent_level: 0,
    };
    walk_node(NodeId::ROOT, &mut ctx);

    let mut doc = ctx.out;
    doc.push_str("</body>\n</html>\n");
    doc
}

/// Context for the synthesis walk.
struct SynthesisContext<'a> {
    out: String,
    tree: &'a DomTree,
    indent_level: usize,
}

impl SynthesisContext<'_> {
    fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
    }
}

/// Walk a node and emit its HTML.
fn walk_node(id: NodeId, ctx: &mut SynthesisContext) {
    let Some(node) = ctx.tree.node(id) else {
        return;
    };
    let role = node.role;

    if role == Role::Text {
        let text = ctx.tree.text(node.text);
        ctx.out.push_str(&escape_xml(text));
        return;
    }

    let (tag, is_void, is_block) = role_to_tag(role);
    let attrs = attributes(ctx.tree, id, role);

    if is_block {
        ctx.indent();
    }

    if is_void {
        let _ = write!(ctx.out, "<{}{}/>", tag, attrs);
        if is_block {
            ctx.out.push('\n');
        }
        return;
    }

    let _ = write!(ctx.out, "<{}{}>", tag, attrs);

    // Only indent children of blocks that hold nothing but blocks; mixed
    // content stays on one line.
    let mut children = ctx.tree.children(id).peekable();
    let has_children = children.peek().is_some();
    let block_children = has_children
        && ctx
            .tree
            .children(id)
            .all(|c| ctx.tree.role(c).is_some_and(|r| role_to_tag(r).2));
    let nested = is_block && block_children;

    if nested {
        ctx.out.push('\n');
        ctx.indent_level += 1;
    }

    for child_id in ctx.tree.children(id) {
        walk_node(child_id, ctx);
    }

    if nested {
        ctx.indent_level -= 1;
        ctx.indent();
    }
    let _ = write!(ctx.out, "</{}>", tag);

    if is_block {
        ctx.out.push('\n');
    }
}

fn attributes(tree: &DomTree, id: NodeId, role: Role) -> String {
    let mut attrs = String::new();

    if role == Role::Checkbox {
        attrs.push_str(" type=\"checkbox\"");
    }
    if role == Role::Button {
        attrs.push_str(" type=\"button\"");
    }

    let classes = tree.attrs.classes(id);
    if !classes.is_empty() {
        let _ = write!(attrs, " class=\"{}\"", escape_xml(&classes.join(" ")));
    }

    for name in ["id", "href", "data-token", "data-item", "style"] {
        if let Some(value) = tree.attrs.get_attr(id, name) {
            let _ = write!(attrs, " {}=\"{}\"", name, escape_xml(value));
        }
    }

    if tree.attrs.checked(id) == Some(true) {
        attrs.push_str(" checked=\"checked\"");
    }

    attrs
}

/// Map a role to an HTML tag name.
///
/// Returns (tag_name, is_void_element, is_block_element).
fn role_to_tag(role: Role) -> (&'static str, bool, bool) {
    match role {
        // Root and containers
        Role::Root => ("div", false, true),
        Role::Container => ("div", false, true),
        Role::Section => ("section", false, true),
        Role::Paragraph => ("p", false, true),

        // Text nodes are handled before tag mapping
        Role::Text => ("span", false, false),

        Role::Heading(1) => ("h1", false, true),
        Role::Heading(2) => ("h2", false, true),
        Role::Heading(3) => ("h3", false, true),
        Role::Heading(4) => ("h4", false, true),
        Role::Heading(5) => ("h5", false, true),
        Role::Heading(_) => ("h6", false, true), // Fallback

        Role::UnorderedList => ("ul", false, true),
        Role::ListItem => ("li", false, true),

        // Void elements
        Role::Checkbox => ("input", true, false),
        Role::Break => ("br", true, false),

        // Inline elements
        Role::Strong => ("strong", false, false),
        Role::Inline => ("span", false, false),
        Role::Ruby => ("ruby", false, false),
        Role::RubyText => ("rt", false, false),
        Role::Label => ("label", false, false),
        Role::Link => ("a", false, false),
        Role::Button => ("button", false, false),
    }
}

/// Escape special XML/HTML characters.
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
