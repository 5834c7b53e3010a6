//! Rendering of study data into a [`DomTree`](crate::dom::DomTree).
//!
//! - [`inline`]: inline content (text, glosses, tokens, blanks)
//! - [`document`]: sections, groups and items, delegating inline content
//! - [`hooks`]: the fixed class names the styling layer and the interaction
//!   controller target
//!
//! Rendering is pure tree construction. Nothing here reacts to input; the
//! [`interact`](crate::interact) module binds behavior to the finished tree.

pub mod document;
pub mod hooks;
pub mod inline;

pub use document::{Layout, build_document, render_nav};
pub use inline::{BlankMode, InlineRenderer, render_inline};
