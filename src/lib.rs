//! # rekishi
//!
//! Renders study notes (timeline items with ruby-annotated Japanese text,
//! colored terminology and fill-in-the-blank fields) from a JSON data file
//! into a document tree, in two modes:
//!
//! - **study**: every item, blanks concealed until the reader reveals them
//! - **review**: only the items in the persisted review set, answers open,
//!   each item with a check control that edits the set
//!
//! ## Architecture
//!
//! ```text
//! data file ──► model::Document ──► render ──► dom::DomTree ──► export (HTML)
//!                     │                            │
//!             review::filter_document        interact::Bindings
//!                     ▲                            │
//!             review::ReviewStore ◄──── view::{StudyView, ReviewView}
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use rekishi::{Document, StudyView, ViewConfig};
//! use rekishi::export::{HtmlConfig, HtmlExporter};
//!
//! let doc = Document::from_json(r#"{
//!     "sections": [{"id": "s1", "h2": "開国", "groups": [{"items": [
//!         {"id": "q1", "year": "1853", "term": [{"t": "黒船来航"}]}
//!     ]}]}]
//! }"#)?;
//!
//! let mut view = StudyView::new(ViewConfig::default());
//! view.finish_load(Ok(doc));
//!
//! let html = HtmlExporter::new()
//!     .with_config(HtmlConfig::fragment())
//!     .to_html(view.tree());
//! assert!(html.contains("<strong>1853：</strong><span>黒船来航</span>"));
//! # Ok::<(), rekishi::Error>(())
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod export;
pub mod interact;
pub mod model;
pub mod render;
pub mod review;
pub mod style;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::ViewConfig;
pub use error::{Error, Result};
pub use model::{Blank, Document, Group, InlineNode, Item, NavLink, Section, TokenBody};
pub use review::{FileStore, MemoryStore, ReviewSet, ReviewStore};
pub use style::ClassLookup;
pub use view::{Outcome, Prompt, ReviewView, StudyView, ViewState};
