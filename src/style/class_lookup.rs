//! Token id → style class lookup.

use std::collections::HashMap;

use crate::model::StyleMap;

/// Inverted style map: resolves a token id to the class it is styled with.
///
/// Built once per load and passed by reference into every render call.
/// A token without an entry renders unstyled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassLookup {
    classes: HashMap<String, String>,
}

impl ClassLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invert a class → tokens map.
    ///
    /// When a token is listed under more than one class, the class declared
    /// later in the map wins.
    pub fn from_style_map(style_map: &StyleMap) -> Self {
        let mut classes = HashMap::new();
        for (class, tokens) in style_map {
            for token in tokens {
                if let Some(previous) = classes.insert(token.clone(), class.clone())
                    && previous != *class
                {
                    tracing::debug!(
                        token = %token,
                        previous = %previous,
                        class = %class,
                        "token listed under two style classes, later class wins"
                    );
                }
            }
        }
        Self { classes }
    }

    /// Resolve a token id.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.classes.get(token).map(String::as_str)
    }

    /// Number of styled tokens.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn style_map(pairs: &[(&str, &[&str])]) -> StyleMap {
        pairs
            .iter()
            .map(|(class, tokens)| {
                (
                    class.to_string(),
                    tokens.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_inversion() {
        let lookup = ClassLookup::from_style_map(&style_map(&[
            ("blue-bold", &["perry", "harris"]),
            ("red", &["ii"]),
        ]));
        assert_eq!(lookup.get("perry"), Some("blue-bold"));
        assert_eq!(lookup.get("harris"), Some("blue-bold"));
        assert_eq!(lookup.get("ii"), Some("red"));
        assert_eq!(lookup.get("unknown"), None);
        assert_eq!(lookup.len(), 3);
    }

    #[test]
    fn test_empty_map() {
        let lookup = ClassLookup::from_style_map(&StyleMap::new());
        assert!(lookup.is_empty());
        assert_eq!(lookup, ClassLookup::new());
    }

    #[test]
    fn test_later_class_wins() {
        let lookup = ClassLookup::from_style_map(&style_map(&[
            ("blue", &["shared"]),
            ("red", &["shared"]),
        ]));
        assert_eq!(lookup.get("shared"), Some("red"));

        let lookup = ClassLookup::from_style_map(&style_map(&[
            ("red", &["shared"]),
            ("blue", &["shared"]),
        ]));
        assert_eq!(lookup.get("shared"), Some("blue"));
    }

    proptest! {
        #[test]
        fn prop_every_token_maps_to_its_last_declaring_class(
            entries in prop::collection::vec(
                ("[a-z]{1,6}", prop::collection::vec("[a-z0-9]{1,4}", 0..6)),
                0..8
            )
        ) {
            let mut map = StyleMap::new();
            for (class, tokens) in entries {
                map.entry(class).or_insert_with(Vec::new).extend(tokens);
            }
            let lookup = ClassLookup::from_style_map(&map);

            for (class, tokens) in &map {
                for token in tokens {
                    let last = map
                        .iter()
                        .rev()
                        .find(|(_, ts)| ts.contains(token))
                        .map(|(c, _)| c.as_str());
                    prop_assert_eq!(lookup.get(token), last);
                    prop_assert!(map.contains_key(class));
                }
            }
        }
    }
}
