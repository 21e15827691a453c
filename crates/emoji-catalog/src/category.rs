//! Emoji categories — the fixed taxonomy behind the palette tabs.
//!
//! Each category has a single-letter filter code (the tab's data key), a
//! full name, and a representative glyph used as the tab label:
//!
//! | Code | Name     | Tab |
//! |------|----------|-----|
//! | `p`  | people   | 😀  |
//! | `n`  | nature   | 🐶  |
//! | `d`  | food     | 🍎  |
//! | `s`  | symbols  | ❤   |
//! | `a`  | activity | ⚽  |
//! | `t`  | travel   | 🚗  |
//! | `o`  | objects  | 💡  |
//! | `f`  | flags    | 🏁  |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A category bucket. The set is closed: every record belongs to exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    People,
    Nature,
    Food,
    Symbols,
    Activity,
    Travel,
    Objects,
    Flags,
}

/// The category shown when the palette opens.
pub const DEFAULT_CATEGORY: Category = Category::People;

impl Category {
    /// All categories in tab order.
    pub const ALL: [Self; 8] = [
        Self::People,
        Self::Nature,
        Self::Food,
        Self::Symbols,
        Self::Activity,
        Self::Travel,
        Self::Objects,
        Self::Flags,
    ];

    /// Single-letter filter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::People => "p",
            Self::Nature => "n",
            Self::Food => "d",
            Self::Symbols => "s",
            Self::Activity => "a",
            Self::Travel => "t",
            Self::Objects => "o",
            Self::Flags => "f",
        }
    }

    /// Lowercase full name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Nature => "nature",
            Self::Food => "food",
            Self::Symbols => "symbols",
            Self::Activity => "activity",
            Self::Travel => "travel",
            Self::Objects => "objects",
            Self::Flags => "flags",
        }
    }

    /// Representative glyph for the category tab.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::People => "\u{1F600}",
            Self::Nature => "\u{1F436}",
            Self::Food => "\u{1F34E}",
            Self::Symbols => "\u{2764}",
            Self::Activity => "\u{26BD}",
            Self::Travel => "\u{1F697}",
            Self::Objects => "\u{1F4A1}",
            Self::Flags => "\u{1F3C1}",
        }
    }

    /// Look up a category by its filter code. Unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Returned when a string names no category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emoji category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts either the filter code (`"n"`) or the full name (`"nature"`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::from_code(&lower)
            .or_else(|| Self::ALL.into_iter().find(|c| c.name() == lower))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn default_is_people() {
        assert_eq!(DEFAULT_CATEGORY, Category::People);
        assert_eq!(DEFAULT_CATEGORY.code(), "p");
    }

    #[test]
    fn food_code_is_d() {
        // Food uses `d` because `f` is taken by flags.
        assert_eq!(Category::Food.code(), "d");
        assert_eq!(Category::from_code("d"), Some(Category::Food));
    }

    #[test]
    fn from_code_unknown() {
        assert_eq!(Category::from_code("z"), None);
        assert_eq!(Category::from_code(""), None);
    }

    #[test]
    fn parse_code_and_name() {
        assert_eq!("n".parse::<Category>(), Ok(Category::Nature));
        assert_eq!("nature".parse::<Category>(), Ok(Category::Nature));
        assert_eq!("Travel".parse::<Category>(), Ok(Category::Travel));
        assert_eq!(" o ".parse::<Category>(), Ok(Category::Objects));
    }

    #[test]
    fn parse_unknown() {
        let err = "weather".parse::<Category>().unwrap_err();
        assert_eq!(err, ParseCategoryError("weather".to_string()));
        assert_eq!(err.to_string(), "unknown emoji category: \"weather\"");
    }

    #[test]
    fn display_is_name() {
        assert_eq!(Category::Symbols.to_string(), "symbols");
    }
}
