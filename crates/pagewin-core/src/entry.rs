//! Entries of a page-window layout plan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One slot of a layout plan.
///
/// A plan is an ordered sequence of entries, recomputed for every render and
/// discarded afterwards. Entries do not mark the active page; the consumer
/// compares [`WindowEntry::page`] against the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowEntry {
    /// A link to the zero-based page `index`.
    Page { index: usize },
    /// Placeholder for two or more consecutive hidden pages.
    Ellipsis,
}

impl WindowEntry {
    /// Create a page entry.
    pub const fn page_at(index: usize) -> Self {
        Self::Page { index }
    }

    /// Page index of this entry, if it is a page.
    pub const fn page(&self) -> Option<usize> {
        match self {
            Self::Page { index } => Some(*index),
            Self::Ellipsis => None,
        }
    }

    /// Check if this is an ellipsis.
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Check if this entry is the page `current`.
    pub fn is_current(&self, current: usize) -> bool {
        self.page() == Some(current)
    }

    /// Human-facing label: the one-based page number, or `…`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WindowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { index } => write!(f, "{}", index + 1),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let page = WindowEntry::page_at(4);
        assert_eq!(page.page(), Some(4));
        assert!(!page.is_ellipsis());
        assert!(page.is_current(4));
        assert!(!page.is_current(3));

        assert_eq!(WindowEntry::Ellipsis.page(), None);
        assert!(WindowEntry::Ellipsis.is_ellipsis());
        assert!(!WindowEntry::Ellipsis.is_current(0));
    }

    #[test]
    fn test_entry_labels_are_one_based() {
        assert_eq!(WindowEntry::page_at(0).label(), "1");
        assert_eq!(WindowEntry::page_at(19).label(), "20");
        assert_eq!(WindowEntry::Ellipsis.label(), "…");
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_string(&WindowEntry::page_at(3)).unwrap();
        assert_eq!(json, r#"{"kind":"page","index":3}"#);

        let json = serde_json::to_string(&WindowEntry::Ellipsis).unwrap();
        assert_eq!(json, r#"{"kind":"ellipsis"}"#);

        let parsed: WindowEntry = serde_json::from_str(r#"{"kind":"page","index":8}"#).unwrap();
        assert_eq!(parsed, WindowEntry::page_at(8));
    }
}
