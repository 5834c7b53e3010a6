//! Narrowing a document to the review set.

use crate::model::{Document, Group, Section};

use super::ReviewSet;

/// Keep only items whose id is in `set`.
///
/// Walks section → group → item. Groups left without items are dropped, and
/// so are sections left without groups. Order, navigation links and the style
/// map are kept.
pub fn filter_document(doc: &Document, set: &ReviewSet) -> Document {
    let sections = doc
        .sections
        .iter()
        .filter_map(|section| {
            let groups: Vec<Group> = section
                .groups
                .iter()
                .filter_map(|group| {
                    let items: Vec<_> = group
                        .items
                        .iter()
                        .filter(|item| set.contains(&item.id))
                        .cloned()
                        .collect();
                    (!items.is_empty()).then(|| Group {
                        items,
                        ..group.clone()
                    })
                })
                .collect();
            (!groups.is_empty()).then(|| Section {
                groups,
                ..section.clone()
            })
        })
        .collect();

    Document {
        sections,
        nav_links: doc.nav_links.clone(),
        style_map: doc.style_map.clone(),
    }
}
