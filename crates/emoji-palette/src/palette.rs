//! The palette controller — state transitions, rendering, insertion.
//!
//! # Transitions
//!
//! | Call                   | From           | To                            |
//! |------------------------|----------------|-------------------------------|
//! | `toggle`               | `Closed`       | `OpenCategory(default)`       |
//! | `toggle`               | open           | `Closed`                      |
//! | `open`                 | `Closed`       | `OpenCategory(default)`       |
//! | `open`                 | open           | (no-op)                       |
//! | `close`                | any            | `Closed`                      |
//! | `select_category(c)`   | open           | `OpenCategory(c)`             |
//! | `set_search_query("")` | open           | `OpenCategory(default)`       |
//! | `set_search_query(q)`  | open           | `OpenSearch(q)`               |
//! | `select_emoji(r)`      | open           | `Closed` (+ one insertion)    |
//! | `on_text_change(User)` | open           | `Closed`                      |
//!
//! Everything that requires an open palette is a no-op while `Closed` and
//! returns `false` / `None`. Every transition that changes something
//! rebuilds the [`PaletteView`] from scratch.

use tracing::debug;

use emoji_catalog::{Category, DEFAULT_CATEGORY, EmojiCatalog, EmojiRecord};

use crate::config::PaletteOptions;
use crate::host::{EMBED_TAG, EmojiEmbed, HostEditor, Origin};
use crate::state::PaletteState;
use crate::view::{Intent, PaletteView, Placement};

/// An embed insertion handed to the host. Produced once per selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionRequest {
    pub target_index: usize,
    pub emoji: EmojiRecord,
}

/// The emoji palette attached to one editor.
#[derive(Debug)]
pub struct EmojiPalette<'c> {
    catalog: &'c EmojiCatalog,
    options: PaletteOptions,
    state: PaletteState,
    placement: Placement,
    view: Option<PaletteView>,
}

impl<'c> EmojiPalette<'c> {
    /// Create a closed palette over `catalog`.
    #[must_use]
    pub fn new(catalog: &'c EmojiCatalog, options: PaletteOptions) -> Self {
        Self {
            catalog,
            options,
            state: PaletteState::Closed,
            placement: Placement::default(),
            view: None,
        }
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &PaletteState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The current render description. `None` while closed.
    #[inline]
    #[must_use]
    pub const fn view(&self) -> Option<&PaletteView> {
        self.view.as_ref()
    }

    /// The emoji currently shown, resolved from the state.
    #[must_use]
    pub fn visible(&self) -> Vec<&'c EmojiRecord> {
        self.state.visible(self.catalog)
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &PaletteOptions {
        &self.options
    }

    // -- Open / close -------------------------------------------------------

    /// Open if closed, close if open. Returns `true` (a toggle always
    /// changes state).
    pub fn toggle<H: HostEditor>(&mut self, host: &mut H) -> bool {
        if !self.close() {
            self.open(host);
        }
        true
    }

    /// Open on the default category. Returns `false` if already open.
    ///
    /// Focuses the editor first when it has no selection, so that an
    /// insertion point exists before anything can be picked.
    pub fn open<H: HostEditor>(&mut self, host: &mut H) -> bool {
        if self.is_open() {
            debug!(state = %self.state, "palette already open");
            return false;
        }
        if host.selection().is_none() {
            host.focus();
        }
        let index = host.selection().map_or(0, |s| s.index);
        self.placement = Placement::below(
            host.bounds(index),
            host.container_width(),
            self.options.palette_width,
            self.options.vertical_offset,
        );
        self.transition(PaletteState::OpenCategory(DEFAULT_CATEGORY));
        true
    }

    /// Close the palette. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.transition(PaletteState::Closed);
        true
    }

    // -- Filtering ----------------------------------------------------------

    /// Switch to a category tab. Ignored while closed.
    pub fn select_category(&mut self, category: Category) -> bool {
        if !self.is_open() {
            debug!(category = %category, "category ignored: palette closed");
            return false;
        }
        self.transition(PaletteState::OpenCategory(category));
        true
    }

    /// Update the search text. An empty query returns to the default
    /// category. Ignored while closed.
    pub fn set_search_query(&mut self, query: &str) -> bool {
        if !self.is_open() {
            debug!(query, "search ignored: palette closed");
            return false;
        }
        let next = if query.is_empty() {
            PaletteState::OpenCategory(DEFAULT_CATEGORY)
        } else {
            PaletteState::OpenSearch(query.to_string())
        };
        self.transition(next);
        true
    }

    // -- Selection ----------------------------------------------------------

    /// Insert `record` at the host's cursor and close.
    ///
    /// The embed goes in at the selection index; the caret move past it is
    /// deferred until the host has finished the insertion. If the host has
    /// no selection, or refuses the embed, nothing is inserted and the
    /// palette stays open.
    pub fn select_emoji<H: HostEditor + 'static>(
        &mut self,
        host: &mut H,
        record: &EmojiRecord,
    ) -> Option<InsertionRequest> {
        if !self.is_open() {
            debug!(emoji = %record.name, "selection ignored: palette closed");
            return None;
        }
        let Some(selection) = host.selection() else {
            debug!(emoji = %record.name, "selection ignored: host has no cursor");
            return None;
        };

        let request = InsertionRequest {
            target_index: selection.index,
            emoji: record.clone(),
        };
        let inserted = host.insert_embed(
            request.target_index,
            EMBED_TAG,
            &EmojiEmbed::from(record),
            Origin::User,
        );
        if !inserted {
            debug!(emoji = %record.name, tag = EMBED_TAG, "selection ignored: host refused embed");
            return None;
        }
        let after = request.target_index + 1;
        host.defer(Box::new(move |h: &mut H| h.set_selection(after)));

        debug!(emoji = %record.name, index = request.target_index, "emoji inserted");
        self.close();
        Some(request)
    }

    /// Run an intent from the current view.
    pub fn dispatch<H: HostEditor + 'static>(
        &mut self,
        host: &mut H,
        intent: Intent,
    ) -> Option<InsertionRequest> {
        match intent {
            Intent::SelectEmoji(record) => self.select_emoji(host, &record),
            Intent::SelectCategory(category) => {
                self.select_category(category);
                None
            }
            Intent::Close => {
                self.close();
                None
            }
        }
    }

    /// React to a document change. User edits close the palette.
    pub fn on_text_change(&mut self, origin: Origin) -> bool {
        if origin != Origin::User {
            return false;
        }
        self.close()
    }

    // -- Internal -----------------------------------------------------------

    fn transition(&mut self, next: PaletteState) {
        self.state = next;
        let visible = self.state.visible(self.catalog);
        debug!(state = %self.state, visible = visible.len(), "palette transition");
        self.view = PaletteView::build(&self.state, &visible, self.placement);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
