//! The reference editor host.
//!
//! `EditorHost` implements [`HostEditor`] over a [`Document`]. It also plays
//! the part of the host's event loop for everything the palette relies on:
//!
//! - **Change events** are buffered as they happen and handed out with
//!   [`take_changes`](EditorHost::take_changes), so the caller can forward
//!   them to the module between turns.
//! - **Deferred tasks** wait in a [`DeferQueue`] until
//!   [`end_turn`](EditorHost::end_turn). Tasks queued while the queue drains
//!   run on the following turn, never the current one.
//!
//! # Layout
//!
//! Geometry is a fixed grid: `left` is the display width of the line prefix
//! times `cell_width`, `top` is the line number times `line_height`.
//!
//! # Formats
//!
//! The host only accepts embeds whose tag has a registered [`EmbedFormat`].
//! The same format encodes embeds on export and decodes them on load.

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use emoji_palette::host::DeferredTask;
use emoji_palette::{
    Bounds, EMBED_TAG, EmbedFormat, EmojiEmbed, HostEditor, Origin, Result, Selection,
};

use crate::document::{DeltaOp, Document};

// ---------------------------------------------------------------------------
// DeferQueue
// ---------------------------------------------------------------------------

/// FIFO queue of work scheduled for after the current turn.
pub struct DeferQueue<H> {
    tasks: VecDeque<DeferredTask<H>>,
}

impl<H> DeferQueue<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    pub fn push(&mut self, task: DeferredTask<H>) {
        self.tasks.push_back(task);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take every queued task, leaving the queue empty.
    pub fn take(&mut self) -> VecDeque<DeferredTask<H>> {
        std::mem::take(&mut self.tasks)
    }
}

impl<H> Default for DeferQueue<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> std::fmt::Debug for DeferQueue<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferQueue").field("len", &self.len()).finish()
    }
}

// ---------------------------------------------------------------------------
// Change events and metrics
// ---------------------------------------------------------------------------

/// A content change: `len` chars inserted at `index` by `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub origin: Origin,
    pub index: usize,
    pub len: usize,
}

/// Pixel metrics of the editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub cell_width: u32,
    pub line_height: u32,
    pub container_width: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            cell_width: 8,
            line_height: 18,
            container_width: 600,
        }
    }
}

// ---------------------------------------------------------------------------
// EditorHost
// ---------------------------------------------------------------------------

/// An editor instance the palette can drive.
#[derive(Debug, Default)]
pub struct EditorHost {
    doc: Document,
    selection: Option<usize>,
    changes: Vec<ChangeEvent>,
    deferred: DeferQueue<Self>,
    metrics: Metrics,
    formats: BTreeMap<&'static str, EmbedFormat>,
}

impl EditorHost {
    /// An empty, unfocused editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An unfocused editor holding `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            doc: Document::from_text(text),
            ..Self::default()
        }
    }

    /// Replace the layout metrics.
    #[must_use]
    pub const fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Accept embeds of `format` from now on. Builder form of
    /// [`register_format`](Self::register_format).
    #[must_use]
    pub fn with_format(mut self, format: EmbedFormat) -> Self {
        self.register_format(format);
        self
    }

    /// Accept embeds of `format`, replacing any format with the same tag.
    pub fn register_format(&mut self, format: EmbedFormat) {
        debug!(name = format.name, tag = format.tag, "host format registered");
        self.formats.insert(format.tag, format);
    }

    /// The format registered for embed tag `tag`.
    #[must_use]
    pub fn format(&self, tag: &str) -> Option<EmbedFormat> {
        self.formats.get(tag).copied()
    }

    // -- Access -------------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.doc
    }

    /// The caret index, or `None` when the editor is blurred.
    #[inline]
    #[must_use]
    pub const fn caret(&self) -> Option<usize> {
        self.selection
    }

    /// Number of tasks waiting for the end of the turn.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Take the change events recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.changes)
    }

    // -- User actions -------------------------------------------------------

    /// The user types `text` at the caret (focusing first if needed).
    pub fn type_text(&mut self, text: &str) {
        if self.selection.is_none() {
            self.focus();
        }
        let index = self.selection.unwrap_or(0);
        let len = self.doc.insert_text(index, text);
        if len == 0 {
            return;
        }
        self.selection = Some(index + len);
        self.record(Origin::User, index, len);
    }

    /// The editor loses focus.
    pub fn blur(&mut self) {
        self.selection = None;
    }

    // -- Import / export ----------------------------------------------------

    /// The document as JSON insert ops, embeds encoded by their format.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownFormat`](emoji_palette::PaletteError::UnknownFormat)
    /// if an embed's format is no longer registered.
    pub fn to_json(&self) -> Result<String> {
        self.doc.to_json(self.format(EMBED_TAG))
    }

    /// Replace the document with JSON insert ops. The editor is left
    /// blurred. Recorded as an `Api` change.
    ///
    /// # Errors
    ///
    /// Malformed JSON, an embed tag with no registered format, or an embed
    /// value its format rejects. The document is untouched on error.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let ops: Vec<DeltaOp> = serde_json::from_str(json)?;
        let doc = Document::from_ops(&ops, self.format(EMBED_TAG))?;
        let len = doc.len_chars();
        self.doc = doc;
        self.selection = None;
        self.record(Origin::Api, 0, len);
        Ok(())
    }

    // -- Turn ---------------------------------------------------------------

    /// Finish the current turn: run the deferred tasks queued so far.
    /// Returns how many ran.
    pub fn end_turn(&mut self) -> usize {
        let tasks = self.deferred.take();
        let count = tasks.len();
        for task in tasks {
            task(self);
        }
        count
    }

    fn record(&mut self, origin: Origin, index: usize, len: usize) {
        if origin == Origin::Silent {
            return;
        }
        self.changes.push(ChangeEvent { origin, index, len });
    }
}

impl HostEditor for EditorHost {
    fn selection(&self) -> Option<Selection> {
        self.selection.map(Selection::caret)
    }

    fn bounds(&self, index: usize) -> Bounds {
        let (line, _) = self.doc.line_col(index);
        let width = self.doc.width_before(index);
        let to_px = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Bounds {
            left: to_px(width).saturating_mul(self.metrics.cell_width),
            top: to_px(line).saturating_mul(self.metrics.line_height),
            height: self.metrics.line_height,
        }
    }

    fn container_width(&self) -> u32 {
        self.metrics.container_width
    }

    fn insert_embed(
        &mut self,
        index: usize,
        tag: &str,
        embed: &EmojiEmbed,
        origin: Origin,
    ) -> bool {
        if !self.formats.contains_key(tag) {
            debug!(tag, "no format registered for embed tag");
            return false;
        }
        let at = self.doc.insert_embed(index, embed.clone());
        // Keep a caret that sat after the insert point on the same char.
        if let Some(caret) = self.selection.filter(|&c| c > at) {
            self.selection = Some(caret + 1);
        }
        self.record(origin, at, 1);
        true
    }

    fn set_selection(&mut self, index: usize) {
        self.selection = Some(index.min(self.doc.len_chars()));
    }

    fn focus(&mut self) {
        if self.selection.is_none() {
            self.selection = Some(self.doc.len_chars());
        }
    }

    fn defer(&mut self, task: DeferredTask<Self>) {
        self.deferred.push(task);
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

    /// A host that accepts emoji embeds.
    fn emoji_host(text: &str) -> EditorHost {
        EditorHost::with_text(text).with_format(EmbedFormat::emoji())
    }

    #[test]
    fn starts_blurred() {
        let host = EditorHost::with_text("abc");
        assert_eq!(host.selection(), None);
    }

    #[test]
    fn focus_puts_caret_at_end() {
        let mut host = EditorHost::with_text("abc");
        host.focus();
        assert_eq!(host.caret(), Some(3));
        host.set_selection(1);
        host.focus();
        assert_eq!(host.caret(), Some(1));
    }

    #[test]
    fn typing_records_user_change() {
        let mut host = EditorHost::new();
        host.type_text("hey");
        assert_eq!(host.caret(), Some(3));
        assert_eq!(
            host.take_changes(),
            vec![ChangeEvent { origin: Origin::User, index: 0, len: 3 }]
        );
        assert!(host.take_changes().is_empty());
    }

    #[test]
    fn insert_embed_records_origin() {
        let mut host = emoji_host("ab");
        host.insert_embed(1, EMBED_TAG, &dog(), Origin::Api);
        host.insert_embed(0, EMBED_TAG, &dog(), Origin::Silent);
        let changes = host.take_changes();
        assert_eq!(changes, vec![ChangeEvent { origin: Origin::Api, index: 1, len: 1 }]);
        assert_eq!(host.document().len_chars(), 4);
    }

    #[test]
    fn insert_embed_wrong_tag_ignored() {
        let mut host = emoji_host("ab");
        assert!(!host.insert_embed(1, "image", &dog(), Origin::User));
        assert_eq!(host.document().len_chars(), 2);
        assert!(host.take_changes().is_empty());
    }

    #[test]
    fn unregistered_format_refuses_embed() {
        let mut host = EditorHost::with_text("ab");
        host.set_selection(2);
        assert_eq!(host.format(EMBED_TAG), None);
        assert!(!host.insert_embed(1, EMBED_TAG, &dog(), Origin::User));
        assert_eq!(host.document().text(), "ab");
        assert_eq!(host.caret(), Some(2));
        assert!(host.take_changes().is_empty());

        host.register_format(EmbedFormat::emoji());
        assert!(host.insert_embed(1, EMBED_TAG, &dog(), Origin::User));
        assert_eq!(host.document().text(), "a\u{1F436}b");
    }

    // -- Import / export ----------------------------------------------------

    #[test]
    fn json_round_trip_through_format() {
        let mut host = emoji_host("ab");
        host.insert_embed(1, EMBED_TAG, &dog(), Origin::Api);
        let json = host.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"insert":"a"},{"insert":{"emoji":{"display_code":"128054","name":"dog"}}},{"insert":"b"}]"#
        );

        let mut other = emoji_host("old");
        other.set_selection(1);
        other.load_json(&json).unwrap();
        assert_eq!(other.document().text(), "a\u{1F436}b");
        assert_eq!(other.document().embed_at(1), Some(&dog()));
        assert_eq!(other.caret(), None);
        assert_eq!(
            other.take_changes(),
            vec![ChangeEvent { origin: Origin::Api, index: 0, len: 3 }]
        );
    }

    #[test]
    fn load_without_format_keeps_document() {
        let mut host = EditorHost::with_text("keep");
        let json = r#"[{"insert":{"emoji":{"display_code":"128054","name":"dog"}}}]"#;
        assert!(matches!(
            host.load_json(json),
            Err(emoji_palette::PaletteError::UnknownFormat(_))
        ));
        assert_eq!(host.document().text(), "keep");
        assert!(host.load_json("not json").is_err());
        assert!(host.take_changes().is_empty());
    }

    #[test]
    fn caret_after_insert_point_shifts() {
        let mut host = emoji_host("abcd");
        host.set_selection(3);
        host.insert_embed(1, EMBED_TAG, &dog(), Origin::Api);
        assert_eq!(host.caret(), Some(4));
    }

    #[test]
    fn caret_at_insert_point_stays() {
        let mut host = emoji_host("abcd");
        host.set_selection(2);
        host.insert_embed(2, EMBED_TAG, &dog(), Origin::Api);
        assert_eq!(host.caret(), Some(2));
    }

    #[test]
    fn set_selection_clamps() {
        let mut host = EditorHost::with_text("ab");
        host.set_selection(50);
        assert_eq!(host.caret(), Some(2));
    }

    #[test]
    fn deferred_runs_at_end_of_turn() {
        let mut host = EditorHost::with_text("abc");
        host.defer(Box::new(|h: &mut EditorHost| h.set_selection(1)));
        assert_eq!(host.caret(), None);
        assert_eq!(host.pending(), 1);
        assert_eq!(host.end_turn(), 1);
        assert_eq!(host.caret(), Some(1));
        assert_eq!(host.pending(), 0);
    }

    #[test]
    fn deferred_runs_in_order() {
        let mut host = EditorHost::with_text("abcdef");
        host.defer(Box::new(|h: &mut EditorHost| h.set_selection(1)));
        host.defer(Box::new(|h: &mut EditorHost| h.set_selection(4)));
        host.end_turn();
        assert_eq!(host.caret(), Some(4));
    }

    #[test]
    fn task_queued_during_drain_waits_a_turn() {
        let mut host = EditorHost::with_text("abcdef");
        host.defer(Box::new(|h: &mut EditorHost| {
            h.set_selection(2);
            h.defer(Box::new(|h: &mut EditorHost| h.set_selection(5)));
        }));
        assert_eq!(host.end_turn(), 1);
        assert_eq!(host.caret(), Some(2));
        assert_eq!(host.pending(), 1);
        host.end_turn();
        assert_eq!(host.caret(), Some(5));
    }

    #[test]
    fn bounds_follow_grid() {
        let host = EditorHost::with_text("abc\nde");
        assert_eq!(host.bounds(2), Bounds { left: 16, top: 0, height: 18 });
        assert_eq!(host.bounds(5), Bounds { left: 8, top: 18, height: 18 });
    }

    #[test]
    fn custom_metrics() {
        let host = EditorHost::with_text("ab").with_metrics(Metrics {
            cell_width: 10,
            line_height: 20,
            container_width: 300,
        });
        assert_eq!(host.bounds(2), Bounds { left: 20, top: 0, height: 20 });
        assert_eq!(host.container_width(), 300);
    }
}
