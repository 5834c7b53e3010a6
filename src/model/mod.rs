//! Core data model for study content.
//!
//! This module contains:
//! - The document hierarchy (sections, groups, items, navigation links)
//! - The closed inline content type and its JSON decoding

mod document;
mod inline;

pub use document::{Document, Group, Item, NavLink, Section, StyleMap};
pub use inline::{Blank, InlineNode, RawInline, TokenBody};
