//! The emoji catalog — ordered, read-only, process-wide.
//!
//! The catalog is sorted once at construction by `sort_order` ascending.
//! The sort is stable, so records with equal orders keep their load order.
//! All lookups return records in catalog order; there is no ranking.
//!
//! # Search
//!
//! [`EmojiCatalog::by_substring`] is a **case-insensitive** literal substring
//! match against the record name. Names in the built-in table are lowercase
//! ASCII, so `"Do"` and `"do"` both find `dog`. An empty query matches
//! nothing; the palette falls back to category mode instead of asking.

use std::sync::OnceLock;

use crate::category::Category;
use crate::data::ROWS;
use crate::record::EmojiRecord;

/// An ordered, immutable collection of emoji records.
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    records: Vec<EmojiRecord>,
}

static BUILTIN: OnceLock<EmojiCatalog> = OnceLock::new();

impl EmojiCatalog {
    // -- Construction -------------------------------------------------------

    /// Build a catalog from arbitrary records, sorting them by `sort_order`.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = EmojiRecord>) -> Self {
        let mut records: Vec<EmojiRecord> = records.into_iter().collect();
        records.sort_by_key(|r| r.sort_order);
        Self { records }
    }

    /// The built-in catalog. Built on first use, then shared.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            Self::new(
                ROWS.iter()
                    .map(|&(name, category, code, order)| {
                        EmojiRecord::new(name, category, code, order)
                    }),
            )
        })
    }

    // -- Access -------------------------------------------------------------

    /// Every record, in catalog order.
    #[inline]
    #[must_use]
    pub fn load(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Number of records.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EmojiRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    // -- Filtering ----------------------------------------------------------

    /// Records in `category`, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&EmojiRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Records for a filter code (`"p"`, `"n"`, ...). Unknown codes yield an
    /// empty list rather than an error.
    #[must_use]
    pub fn by_category_code(&self, code: &str) -> Vec<&EmojiRecord> {
        Category::from_code(code).map_or_else(Vec::new, |c| self.by_category(c))
    }

    /// Records whose name contains `query`, ignoring case, in catalog order.
    /// An empty query returns nothing.
    #[must_use]
    pub fn by_substring(&self, query: &str) -> Vec<&EmojiRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
