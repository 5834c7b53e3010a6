//! Review set: the items a reader marked for focused review.
//!
//! - [`ReviewSet`]: the ordered set of item ids
//! - [`store`]: durable storage of the set
//! - [`filter_document`]: narrows a document to the set before rendering

mod filter;
pub mod store;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

pub use filter::filter_document;
pub use store::{FileStore, MemoryStore, ReviewStore};

/// Item ids marked for review, in the order they were marked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewSet {
    ids: IndexSet<String>,
}

impl ReviewSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Mark an item. Returns `true` if it was not marked before.
    pub fn check(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Unmark an item, keeping the order of the rest. Returns `true` if it
    /// was marked.
    pub fn uncheck(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ReviewSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_and_uncheck() {
        let mut set = ReviewSet::new();
        assert!(set.check("q1"));
        assert!(set.check("q2"));
        assert!(!set.check("q1"));
        assert_eq!(set.len(), 2);

        assert!(set.uncheck("q1"));
        assert!(!set.uncheck("q1"));
        assert!(!set.contains("q1"));
        assert!(set.contains("q2"));
    }

    #[test]
    fn test_uncheck_keeps_order() {
        let mut set: ReviewSet = ["a", "b", "c", "d"].into_iter().collect();
        set.uncheck("b");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let set: ReviewSet = ["q2", "q1"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["q2","q1"]"#);

        let back: ReviewSet = serde_json::from_str(r#"["q1","q1","q3"]"#).unwrap();
        assert_eq!(back.iter().collect::<Vec<_>>(), vec!["q1", "q3"]);
    }
}
