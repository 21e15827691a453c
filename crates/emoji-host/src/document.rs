//! Document — text plus atomic embeds.
//!
//! A `Document` wraps a [`ropey::Rope`]. Each embed occupies exactly one char
//! in the rope, the object replacement character `U+FFFC`, and its value
//! lives in a side table keyed by char index. Keeping embeds one char wide
//! means every index the host hands out (selection, bounds, insert position)
//! is a plain rope char index.
//!
//! # Design choices
//!
//! - **Indices clamp.** An insert past the end lands at the end; callers never
//!   have to bounds-check first.
//!
//! - **The side table shifts on insert.** Inserting `n` chars at `i` moves
//!   every embed at or after `i` by `n`. There are no deletes here; the
//!   palette only ever inserts.
//!
//! - **Placeholders are reserved.** `U+FFFC` in incoming text is dropped, so a
//!   placeholder in the rope always has a table entry.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use ropey::Rope;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthChar;

use emoji_palette::{EMBED_TAG, EmbedFormat, EmojiEmbed, PaletteError, Result};

/// The char that stands in for an embed inside the rope.
pub const EMBED_CHAR: char = '\u{FFFC}';

/// Display width of an embed, in terminal cells.
pub const EMBED_WIDTH: usize = 2;

// ---------------------------------------------------------------------------
// Delta ops
// ---------------------------------------------------------------------------

/// What a delta op inserts. An embed is a one-entry map from its format
/// tag to the value that format produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Map<String, Value>),
}

/// One insert op of a document export: `{"insert": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaOp {
    pub insert: Insert,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// Text with embedded emoji.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
    embeds: BTreeMap<usize, EmojiEmbed>,
}

impl Document {
    // -- Construction -------------------------------------------------------

    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding `text` (placeholder chars removed).
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let clean: String = text.chars().filter(|&c| c != EMBED_CHAR).collect();
        Self {
            rope: Rope::from_str(&clean),
            embeds: BTreeMap::new(),
        }
    }

    /// Rebuild a document from exported ops, decoding embeds with `format`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownFormat`] for an embed whose tag is not
    /// `format`'s (or any embed when `format` is `None`), and
    /// [`PaletteError::Serialization`] for a value `format` can't decode.
    pub fn from_ops(ops: &[DeltaOp], format: Option<EmbedFormat>) -> Result<Self> {
        let mut doc = Self::new();
        for op in ops {
            match &op.insert {
                Insert::Text(text) => {
                    doc.insert_text(doc.len_chars(), text);
                }
                Insert::Embed(map) => {
                    for (tag, value) in map {
                        let format = format
                            .filter(|f| f.tag == tag.as_str())
                            .ok_or_else(|| PaletteError::UnknownFormat(tag.clone()))?;
                        doc.insert_embed(doc.len_chars(), format.create(value)?);
                    }
                }
            }
        }
        Ok(doc)
    }

    // -- Access -------------------------------------------------------------

    /// Length in chars; each embed counts as one.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The embed at `index`, if that char is one.
    #[must_use]
    pub fn embed_at(&self, index: usize) -> Option<&EmojiEmbed> {
        self.embeds.get(&index)
    }

    /// All embeds in document order with their indices.
    pub fn embeds(&self) -> impl Iterator<Item = (usize, &EmojiEmbed)> {
        self.embeds.iter().map(|(&i, e)| (i, e))
    }

    /// Line and column (both 0-indexed, in chars) of `index`, clamped.
    #[must_use]
    pub fn line_col(&self, index: usize) -> (usize, usize) {
        let index = index.min(self.len_chars());
        let line = self.rope.char_to_line(index);
        (line, index - self.rope.line_to_char(line))
    }

    /// Display width, in cells, of the part of `index`'s line before it.
    #[must_use]
    pub fn width_before(&self, index: usize) -> usize {
        let index = index.min(self.len_chars());
        let (line, _) = self.line_col(index);
        let start = self.rope.line_to_char(line);
        self.rope
            .slice(start..index)
            .chars()
            .map(|c| {
                if c == EMBED_CHAR {
                    EMBED_WIDTH
                } else {
                    c.width().unwrap_or(0)
                }
            })
            .sum()
    }

    /// The document as plain text, with embeds rendered as their glyphs.
    #[must_use]
    pub fn text(&self) -> String {
        self.text_range(0..self.len_chars())
    }

    /// Like [`text`](Self::text), for a char range (clamped).
    #[must_use]
    pub fn text_range(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        let mut out = String::new();
        for (i, c) in self.rope.slice(start..end).chars().enumerate() {
            match (c, self.embeds.get(&(start + i))) {
                (EMBED_CHAR, Some(embed)) => out.push_str(&embed.glyph()),
                _ => out.push(c),
            }
        }
        out
    }

    /// Export as insert ops: runs of text and one op per embed, encoded
    /// with `format`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownFormat`] if the document holds an embed and
    /// `format` is `None`.
    pub fn ops(&self, format: Option<EmbedFormat>) -> Result<Vec<DeltaOp>> {
        let mut ops = Vec::new();
        let mut run = String::new();
        for (i, c) in self.rope.chars().enumerate() {
            if let (EMBED_CHAR, Some(embed)) = (c, self.embeds.get(&i)) {
                if !run.is_empty() {
                    ops.push(DeltaOp {
                        insert: Insert::Text(std::mem::take(&mut run)),
                    });
                }
                let format =
                    format.ok_or_else(|| PaletteError::UnknownFormat(EMBED_TAG.to_string()))?;
                let mut map = Map::new();
                map.insert(format.tag.to_string(), format.value(embed)?);
                ops.push(DeltaOp {
                    insert: Insert::Embed(map),
                });
            } else {
                run.push(c);
            }
        }
        if !run.is_empty() {
            ops.push(DeltaOp {
                insert: Insert::Text(run),
            });
        }
        Ok(ops)
    }

    /// Export as JSON.
    ///
    /// # Errors
    ///
    /// As [`ops`](Self::ops).
    pub fn to_json(&self, format: Option<EmbedFormat>) -> Result<String> {
        Ok(serde_json::to_string(&self.ops(format)?)?)
    }

    // -- Editing ------------------------------------------------------------

    /// Insert text at `index` (clamped). Returns the number of chars
    /// inserted.
    pub fn insert_text(&mut self, index: usize, text: &str) -> usize {
        let clean: String = text.chars().filter(|&c| c != EMBED_CHAR).collect();
        let len = clean.chars().count();
        if len == 0 {
            return 0;
        }
        let index = index.min(self.len_chars());
        self.shift_embeds(index, len);
        self.rope.insert(index, &clean);
        len
    }

    /// Insert an embed at `index` (clamped). Returns the index it landed at.
    pub fn insert_embed(&mut self, index: usize, embed: EmojiEmbed) -> usize {
        let index = index.min(self.len_chars());
        self.shift_embeds(index, 1);
        self.rope.insert_char(index, EMBED_CHAR);
        self.embeds.insert(index, embed);
        index
    }

    fn shift_embeds(&mut self, from: usize, by: usize) {
        let tail = self.embeds.split_off(&from);
        self.embeds
            .extend(tail.into_iter().map(|(i, e)| (i + by, e)));
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dog() -> EmojiEmbed {
        EmojiEmbed {
            name: "dog".into(),
            display_code: "128054".into(),
        }
    }

    fn cat() -> EmojiEmbed {
        EmojiEmbed {
            name: "cat".into(),
            display_code: "128049".into(),
        }
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_is_empty() {
        let d = Document::new();
        assert!(d.is_empty());
        assert_eq!(d.text(), "");
        assert!(d.ops(None).unwrap().is_empty());
    }

    #[test]
    fn text_range_expands_embeds() {
        let mut d = Document::from_text("abc");
        d.insert_embed(1, dog());
        assert_eq!(d.text_range(0..2), "a\u{1F436}");
        assert_eq!(d.text_range(2..99), "bc");
        assert_eq!(d.text_range(3..1), "");
    }

    #[test]
    fn from_text_drops_placeholders() {
        let d = Document::from_text("a\u{FFFC}b");
        assert_eq!(d.len_chars(), 2);
        assert_eq!(d.text(), "ab");
    }

    // -- Editing ------------------------------------------------------------

    #[test]
    fn insert_embed_is_one_char() {
        let mut d = Document::from_text("hi");
        assert_eq!(d.insert_embed(1, dog()), 1);
        assert_eq!(d.len_chars(), 3);
        assert_eq!(d.embed_at(1), Some(&dog()));
        assert_eq!(d.text(), "h\u{1F436}i");
    }

    #[test]
    fn insert_embed_clamps() {
        let mut d = Document::from_text("hi");
        assert_eq!(d.insert_embed(99, dog()), 2);
        assert_eq!(d.text(), "hi\u{1F436}");
    }

    #[test]
    fn embeds_shift_on_earlier_insert() {
        let mut d = Document::from_text("ab");
        d.insert_embed(1, dog());
        d.insert_embed(0, cat());
        let got: Vec<(usize, String)> = d.embeds().map(|(i, e)| (i, e.name.clone())).collect();
        assert_eq!(got, vec![(0, "cat".to_string()), (2, "dog".to_string())]);
        d.insert_text(1, "xyz");
        let got: Vec<usize> = d.embeds().map(|(i, _)| i).collect();
        assert_eq!(got, vec![0, 5]);
        assert_eq!(d.text(), "\u{1F431}xyza\u{1F436}b");
    }

    #[test]
    fn embed_after_insert_point_untouched() {
        let mut d = Document::from_text("ab");
        d.insert_embed(0, dog());
        d.insert_text(3, "c");
        assert_eq!(d.embed_at(0), Some(&dog()));
    }

    #[test]
    fn insert_empty_text_is_noop() {
        let mut d = Document::from_text("ab");
        assert_eq!(d.insert_text(1, ""), 0);
        assert_eq!(d.insert_text(1, "\u{FFFC}"), 0);
        assert_eq!(d.text(), "ab");
    }

    // -- Geometry -----------------------------------------------------------

    #[test]
    fn line_col_multiline() {
        let d = Document::from_text("ab\ncde");
        assert_eq!(d.line_col(0), (0, 0));
        assert_eq!(d.line_col(4), (1, 1));
        assert_eq!(d.line_col(99), (1, 3));
    }

    #[test]
    fn width_counts_wide_chars_and_embeds() {
        let mut d = Document::from_text("a\u{4E16}b");
        d.insert_embed(3, dog());
        d.insert_text(4, "c");
        // a(1) 世(2) b(1) embed(2)
        assert_eq!(d.width_before(4), 6);
        assert_eq!(d.width_before(0), 0);
    }

    #[test]
    fn width_resets_per_line() {
        let d = Document::from_text("long line\nab");
        assert_eq!(d.width_before(12), 2);
    }

    // -- Export -------------------------------------------------------------

    const EMOJI: Option<EmbedFormat> = Some(EmbedFormat::emoji());

    fn embed_op(tag: &str, value: Value) -> DeltaOp {
        let mut map = Map::new();
        map.insert(tag.to_string(), value);
        DeltaOp { insert: Insert::Embed(map) }
    }

    #[test]
    fn ops_split_text_and_embeds() {
        let mut d = Document::from_text("hi!");
        d.insert_embed(2, dog());
        assert_eq!(
            d.ops(EMOJI).unwrap(),
            vec![
                DeltaOp { insert: Insert::Text("hi".into()) },
                embed_op("emoji", serde_json::json!({"name": "dog", "display_code": "128054"})),
                DeltaOp { insert: Insert::Text("!".into()) },
            ]
        );
    }

    #[test]
    fn json_shape() {
        let mut d = Document::from_text("a");
        d.insert_embed(1, dog());
        assert_eq!(
            d.to_json(EMOJI).unwrap(),
            r#"[{"insert":"a"},{"insert":{"emoji":{"display_code":"128054","name":"dog"}}}]"#
        );
    }

    #[test]
    fn text_exports_without_format() {
        let d = Document::from_text("plain");
        assert_eq!(d.to_json(None).unwrap(), r#"[{"insert":"plain"}]"#);
    }

    #[test]
    fn embed_needs_format_to_export() {
        let mut d = Document::from_text("a");
        d.insert_embed(0, dog());
        assert!(matches!(d.ops(None), Err(PaletteError::UnknownFormat(tag)) if tag == "emoji"));
    }

    #[test]
    fn from_ops_rebuilds() {
        let mut d = Document::from_text("x");
        d.insert_embed(0, cat());
        let json = d.to_json(EMOJI).unwrap();
        let ops: Vec<DeltaOp> = serde_json::from_str(&json).unwrap();
        let back = Document::from_ops(&ops, EMOJI).unwrap();
        assert_eq!(back.text(), d.text());
        assert_eq!(back.embed_at(0), Some(&cat()));
    }

    #[test]
    fn from_ops_rejects_unknown_tag() {
        let ops = vec![embed_op("image", serde_json::json!("cat.png"))];
        let err = Document::from_ops(&ops, EMOJI).unwrap_err();
        assert!(matches!(err, PaletteError::UnknownFormat(tag) if tag == "image"));
        let ops = vec![embed_op("emoji", serde_json::json!({"name": "dog", "display_code": "1"}))];
        assert!(Document::from_ops(&ops, None).is_err());
    }

    #[test]
    fn from_ops_rejects_bad_value() {
        let ops = vec![embed_op("emoji", serde_json::json!({"name": "dog"}))];
        let err = Document::from_ops(&ops, EMOJI).unwrap_err();
        assert!(matches!(err, PaletteError::Serialization(_)));
    }
}
