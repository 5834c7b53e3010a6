//! Export module for writing rendered trees out as HTML.
//!
//! Provides the `Exporter` trait and the HTML implementation.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```
//! use rekishi::dom::{DomTree, NodeId, Role};
//! use rekishi::export::{Exporter, HtmlConfig, HtmlExporter};
//!
//! let mut tree = DomTree::new();
//! let p = tree.append_element(NodeId::ROOT, Role::Paragraph);
//! tree.append_text_node(p, "開国");
//!
//! let mut out = Vec::new();
//! HtmlExporter::new()
//!     .with_config(HtmlConfig::fragment())
//!     .export(&tree, &mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "<p>開国</p>\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};

use crate::config::ViewConfig;
use crate::dom::DomTree;

mod html;

pub use html::{escape_xml, synthesize_html, synthesize_html_document};

/// Trait for exporting rendered trees.
pub trait Exporter {
    /// Export the tree to the provided writer.
    fn export<W: Write>(&self, tree: &DomTree, writer: &mut W) -> io::Result<()>;
}

/// Configuration for HTML export.
#[derive(Debug, Clone, Default)]
pub struct HtmlConfig {
    /// Page title. Ignored for fragments.
    pub title: String,
    /// External stylesheet linked from the page head. Ignored for fragments.
    pub stylesheet_href: Option<String>,
    /// If true, emit only the mount point's inner markup.
    pub fragment: bool,
}

impl HtmlConfig {
    /// Inner markup only, no page wrapper.
    pub fn fragment() -> Self {
        Self {
            fragment: true,
            ..Self::default()
        }
    }
}

impl From<&ViewConfig> for HtmlConfig {
    fn from(config: &ViewConfig) -> Self {
        Self {
            title: config.title.clone(),
            stylesheet_href: config.stylesheet_href.clone(),
            fragment: false,
        }
    }
}

/// HTML exporter.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: HtmlConfig,
}

impl HtmlExporter {
    /// Create a new exporter with default configuration (full page).
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: HtmlConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the tree to a string.
    pub fn to_html(&self, tree: &DomTree) -> String {
        if self.config.fragment {
            synthesize_html(tree)
        } else {
            synthesize_html_document(
                tree,
                &self.config.title,
                self.config.stylesheet_href.as_deref(),
            )
        }
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write>(&self, tree: &DomTree, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_html(tree).as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{NodeId, Role};

    #[test]
    fn test_config_from_view_config() {
        let view = ViewConfig::default()
            .with_title("幕末")
            .with_stylesheet("style.css");
        let config = HtmlConfig::from(&view);
        assert_eq!(config.title, "幕末");
        assert_eq!(config.stylesheet_href.as_deref(), Some("style.css"));
        assert!(!config.fragment);
    }

    #[test]
    fn test_export_page_and_fragment() {
        let mut tree = DomTree::new();
        tree.attrs.set_id(NodeId::ROOT, "app");
        let p = tree.append_element(NodeId::ROOT, Role::Paragraph);
        tree.append_text_node(p, "開国");

        let mut page = Vec::new();
        HtmlExporter::new().export(&tree, &mut page).unwrap();
        let page = String::from_utf8(page).unwrap();
        assert!(page.contains("<div id=\"app\">"));

        let fragment = HtmlExporter::new()
            .with_config(HtmlConfig::fragment())
            .to_html(&tree);
        assert_eq!(fragment, "<p>開国</p>\n");
    }
}
