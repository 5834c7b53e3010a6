//! View configuration.

use crate::review::store::DEFAULT_KEY;

/// Configuration shared by the study and review views and the page exporter.
///
/// # Example
///
/// ```
/// use rekishi::ViewConfig;
///
/// let config = ViewConfig::default()
///     .with_title("幕末")
///     .with_listing_href("bakumatsu.html");
/// assert_eq!(config.mount_id, "app");
/// assert_eq!(config.listing_href, "bakumatsu.html");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    /// Id of the mount container (default `app`).
    pub mount_id: String,
    /// Target of the back-to-listing action and the empty-state link.
    pub listing_href: String,
    /// Page title for full-page export.
    pub title: String,
    /// Optional external stylesheet for full-page export.
    pub stylesheet_href: Option<String>,
    /// Name of the persisted review record.
    pub storage_key: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            listing_href: "index.html".to_string(),
            title: String::new(),
            stylesheet_href: None,
            storage_key: DEFAULT_KEY.to_string(),
        }
    }
}

impl ViewConfig {
    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn with_listing_href(mut self, href: impl Into<String>) -> Self {
        self.listing_href = href.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = Some(href.into());
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.listing_href, "index.html");
        assert_eq!(config.storage_key, "checked-questions");
        assert!(config.stylesheet_href.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ViewConfig::default()
            .with_mount_id("root")
            .with_stylesheet("style.css")
            .with_storage_key("bakumatsu");
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.stylesheet_href.as_deref(), Some("style.css"));
        assert_eq!(config.storage_key, "bakumatsu");
    }
}
