//! Document structure: sections, groups and items.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::inline::InlineNode;
use crate::error::{Error, Result};

/// Style class → token ids, in declaration order.
pub type StyleMap = IndexMap<String, Vec<String>>;

/// A whole study page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
    pub nav_links: Vec<NavLink>,
    pub style_map: StyleMap,
}

/// A headed, deep-linkable part of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    #[serde(rename = "id", default)]
    pub anchor_id: String,
    #[serde(rename = "h2", default)]
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Group>,
}

/// An optionally headed list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Group {
    #[serde(rename = "h3", default)]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    /// Class for the list container.
    #[serde(rename = "ulClass", default)]
    pub class: Option<String>,
}

/// One timeline entry or question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Durable key of the item in the review set.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub term: Option<Vec<InlineNode>>,
    #[serde(rename = "parts", alias = "body", default)]
    pub body: Option<Vec<InlineNode>>,
    /// Class for the list entry.
    #[serde(rename = "liClass", default)]
    pub class: Option<String>,
}

/// A link in the jump navigation box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub href: String,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_term(mut self, term: Vec<InlineNode>) -> Self {
        self.term = Some(term);
        self
    }

    pub fn with_body(mut self, body: Vec<InlineNode>) -> Self {
        self.body = Some(body);
        self
    }
}

impl Group {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }
}

impl Section {
    pub fn new(anchor_id: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            anchor_id: anchor_id.into(),
            heading: heading.into(),
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl Document {
    /// Decode a document from the data file's JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Read and decode the data file. The file is read on every call.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json).map_err(|e| match e {
            Error::Json(e) => Error::Load(format!("{}: {}", path.display(), e)),
            other => other,
        })
    }

    /// Iterate over every item, in document order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections
            .iter()
            .flat_map(|s| s.groups.iter())
            .flat_map(|g| g.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }
}

// ----------------------------------------------------------------------------
// Top-level wire shape: { styles, page: { nav }, sections }
// ----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    styles: IndexMap<String, Option<Vec<String>>>,
    #[serde(default, deserialize_with = "null_as_default")]
    page: RawPage,
    #[serde(default, deserialize_with = "null_as_default")]
    sections: Vec<Section>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPage {
    #[serde(default, deserialize_with = "null_as_default")]
    nav: Vec<NavLink>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Document {
            sections: raw.sections,
            nav_links: raw.page.nav,
            style_map: raw
                .styles
                .into_iter()
                .map(|(class, tokens)| (class, tokens.unwrap_or_default()))
                .collect(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
