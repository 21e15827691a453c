//! Palette state.
//!
//! | State              | Visible emoji                     |
//! |--------------------|-----------------------------------|
//! | `Closed`           | none                              |
//! | `OpenCategory(c)`  | `catalog.by_category(c)`          |
//! | `OpenSearch(q)`    | `catalog.by_substring(q)`         |
//!
//! The visible list is always derived from the state; it is never stored.

use std::fmt;

use emoji_catalog::{Category, EmojiCatalog, EmojiRecord};

/// Where the palette is in its open/close cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum PaletteState {
    /// Hidden. The initial state.
    #[default]
    Closed,
    /// Showing one category tab.
    OpenCategory(Category),
    /// Showing search results for a non-empty query.
    OpenSearch(String),
}

impl PaletteState {
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The active tab, or `None` when closed or searching.
    #[must_use]
    pub const fn active_category(&self) -> Option<Category> {
        match self {
            Self::OpenCategory(c) => Some(*c),
            _ => None,
        }
    }

    /// The search text; empty outside search mode.
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::OpenSearch(q) => q,
            _ => "",
        }
    }

    /// Resolve the visible emoji for this state.
    #[must_use]
    pub fn visible<'c>(&self, catalog: &'c EmojiCatalog) -> Vec<&'c EmojiRecord> {
        match self {
            Self::Closed => Vec::new(),
            Self::OpenCategory(c) => catalog.by_category(*c),
            Self::OpenSearch(q) => catalog.by_substring(q),
        }
    }
}

impl fmt::Display for PaletteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed"),
            Self::OpenCategory(c) => write!(f, "category:{}", c.code()),
            Self::OpenSearch(q) => write!(f, "search:{q}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> EmojiCatalog {
        EmojiCatalog::new([
            EmojiRecord::new("grin", Category::People, "128513", 1),
            EmojiRecord::new("dog", Category::Nature, "128054", 2),
        ])
    }

    #[test]
    fn default_is_closed() {
        let s = PaletteState::default();
        assert!(!s.is_open());
        assert_eq!(s.active_category(), None);
        assert_eq!(s.query(), "");
    }

    #[test]
    fn closed_shows_nothing() {
        assert!(PaletteState::Closed.visible(&catalog()).is_empty());
    }

    #[test]
    fn category_accessors() {
        let s = PaletteState::OpenCategory(Category::Nature);
        assert!(s.is_open());
        assert_eq!(s.active_category(), Some(Category::Nature));
        assert_eq!(s.query(), "");
        let cat = catalog();
        let names: Vec<&str> = s.visible(&cat).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["dog"]);
    }

    #[test]
    fn search_accessors() {
        let s = PaletteState::OpenSearch("gr".to_string());
        assert_eq!(s.active_category(), None);
        assert_eq!(s.query(), "gr");
        let cat = catalog();
        let names: Vec<&str> = s.visible(&cat).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["grin"]);
    }

    #[test]
    fn display() {
        assert_eq!(PaletteState::Closed.to_string(), "closed");
        assert_eq!(PaletteState::OpenCategory(Category::Food).to_string(), "category:d");
        assert_eq!(PaletteState::OpenSearch("do".into()).to_string(), "search:do");
    }
}
