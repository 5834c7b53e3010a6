//! Structural class names emitted by the renderers.

/// Study blank: the clickable wrapper.
pub const FILL_LABEL: &str = "fill-label";
/// Study blank: the placeholder the reader clicks.
pub const FILL_PLACEHOLDER: &str = "fill-placeholder";
/// Study blank: the answer region, hidden until revealed.
pub const FILL_ANSWER: &str = "fill-answer";
/// Marker added to a [`FILL_LABEL`] once its answer is revealed.
pub const SHOW_ANSWER: &str = "show-answer";

/// Review blank: neutral placeholder marker.
pub const Q_BLANK: &str = "q-blank";
/// Review blank: the always visible answer.
pub const Q_ANSWER: &str = "q-answer";

/// Jump navigation box.
pub const JUMP_NAV: &str = "jump-nav box2";

pub const Q_LIST: &str = "q-list";
pub const Q_ITEM: &str = "q-item";
pub const Q_CHECK_LABEL: &str = "q-check-label";
/// Review row check control.
pub const Q_REMEMBER_CHECK: &str = "q-remember-check";
/// Review detail card.
pub const Q_CARD: &str = "q-card";
pub const Q_CARD_CONTENT: &str = "q-card-content";
pub const Q_YEAR: &str = "q-year";
pub const Q_TERM: &str = "q-term";
/// Marker toggled on a [`Q_CARD`] by clicks.
pub const IS_OPEN: &str = "is-open";

/// Review top bar.
pub const REVIEW_NAV: &str = "review-nav";
/// Review top bar: back to the full listing.
pub const BACK_TO_LISTING: &str = "back-to-listing";
/// Review top bar: clear the review set.
pub const CLEAR_ALL: &str = "clear-all";
/// Id of the container holding the filtered review sections.
pub const REVIEW_CONTENT_ID: &str = "review-content";
/// Empty-state message box.
pub const EMPTY_STATE: &str = "empty-state";
