//! A single emoji entry.

use std::fmt;

use crate::category::Category;

/// Decode a dash-separated decimal code point sequence into a string.
///
/// Segments that don't parse or aren't valid scalar values are skipped,
/// so a malformed code degrades to a shorter (possibly empty) string
/// instead of failing.
#[must_use]
pub fn decode_display_code(code: &str) -> String {
    code.split('-')
        .filter_map(|part| part.trim().parse::<u32>().ok())
        .filter_map(char::from_u32)
        .collect()
}

/// One emoji in the catalog.
///
/// Records are immutable once loaded. `name` is the stable key (unique across
/// a catalog); `display_code` is the rendering payload as a dash-separated
/// decimal code point sequence: `"128054"` for 🐶, `"127482-127480"` for 🇺🇸.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmojiRecord {
    pub name: String,
    pub category: Category,
    pub display_code: String,
    pub sort_order: u32,
}

impl EmojiRecord {
    /// Create a record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: Category,
        display_code: impl Into<String>,
        sort_order: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            display_code: display_code.into(),
            sort_order,
        }
    }

    /// Decode `display_code` into the string to render.
    #[must_use]
    pub fn glyph(&self) -> String {
        decode_display_code(&self.display_code)
    }

    /// The `:name:` short form.
    #[must_use]
    pub fn shortname(&self) -> String {
        format!(":{}:", self.name)
    }
}

impl fmt::Display for EmojiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.shortname())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_single_scalar() {
        let r = EmojiRecord::new("dog", Category::Nature, "128054", 1);
        assert_eq!(r.glyph(), "\u{1F436}");
    }

    #[test]
    fn glyph_flag_sequence() {
        let r = EmojiRecord::new("flag_us", Category::Flags, "127482-127480", 1);
        assert_eq!(r.glyph(), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(r.glyph().chars().count(), 2);
    }

    #[test]
    fn glyph_skips_garbage() {
        // 55296 is a lone surrogate, not a scalar value.
        let r = EmojiRecord::new("odd", Category::Symbols, "abc-55296-10004", 1);
        assert_eq!(r.glyph(), "\u{2714}");
    }

    #[test]
    fn glyph_empty_code() {
        let r = EmojiRecord::new("blank", Category::Symbols, "", 1);
        assert_eq!(r.glyph(), "");
    }

    #[test]
    fn decode_without_record() {
        assert_eq!(decode_display_code("128054"), "\u{1F436}");
        assert_eq!(decode_display_code(" 127482 - 127480 "), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(decode_display_code("x-"), "");
    }

    #[test]
    fn shortname_and_display() {
        let r = EmojiRecord::new("grin", Category::People, "128513", 1);
        assert_eq!(r.shortname(), ":grin:");
        assert_eq!(r.to_string(), "\u{1F601} :grin:");
    }
}
