//! Style class resolution for semantic tokens.
//!
//! The data file declares styles as `class → [token ids]`. Rendering needs the
//! opposite direction, so the map is inverted once per load into a
//! [`ClassLookup`].

mod class_lookup;

pub use class_lookup::ClassLookup;
