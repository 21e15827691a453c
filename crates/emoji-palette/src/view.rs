//! Render descriptions — what the palette wants on screen.
//!
//! The palette never touches UI elements. After each transition it builds a
//! fresh [`PaletteView`] and the host's adapter draws it. The view replaces
//! the previous one wholesale; nothing is diffed or patched.
//!
//! Interactive elements carry an [`Intent`], a plain value naming what
//! activation should do. Each item's intent holds its own record, bound at
//! render time, so two items can never share or swap their actions. The
//! adapter hands the intent back through
//! [`EmojiPalette::dispatch`](crate::EmojiPalette::dispatch).
//!
//! ```text
//! ┌─ placement (top, left) ──────────┐
//! │ [😀] 🐶  🍎  ❤  ⚽  🚗  💡  🏁      │  tabs
//! │ > query                           │  search field
//! │ 😀 😃 😄 😁 😆 😅 😂 🤣 ...        │  items
//! └──────────────────────────────────┘
//!   everything outside: overlay → Intent::Close
//! ```

use emoji_catalog::{Category, EmojiRecord};

use crate::host::Bounds;
use crate::state::PaletteState;

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// The action bound to an interactive element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Insert this emoji and close.
    SelectEmoji(EmojiRecord),
    /// Switch to this category tab.
    SelectCategory(Category),
    /// Dismiss the palette (overlay click).
    Close,
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Top-left corner of the palette, relative to the editor container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub top: u32,
    pub left: u32,
}

impl Placement {
    /// Place the palette under the cursor line.
    ///
    /// The palette hangs `offset` below the line. It opens rightward from
    /// the cursor unless that would overflow the container, in which case
    /// it opens leftward.
    #[must_use]
    pub const fn below(bounds: Bounds, container_width: u32, width: u32, offset: u32) -> Self {
        let top = bounds.top.saturating_add(bounds.height).saturating_add(offset);
        let left = if bounds.left.saturating_add(width) > container_width {
            bounds.left.saturating_sub(width)
        } else {
            bounds.left
        };
        Self { top, left }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// A category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub category: Category,
    pub label: &'static str,
    pub active: bool,
    pub intent: Intent,
}

/// One emoji button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    /// The record name, unique within a view.
    pub key: String,
    /// The rendered glyph.
    pub label: String,
    pub intent: Intent,
}

/// Everything the adapter needs to draw an open palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView {
    pub placement: Placement,
    pub tabs: Vec<TabItem>,
    pub query: String,
    pub items: Vec<PaletteItem>,
    /// Intent for clicks outside the palette.
    pub overlay: Intent,
}

impl PaletteView {
    /// Build the view for an open state. Returns `None` for `Closed`.
    #[must_use]
    pub fn build(state: &PaletteState, visible: &[&EmojiRecord], placement: Placement) -> Option<Self> {
        if !state.is_open() {
            return None;
        }
        let active = state.active_category();
        let tabs = Category::ALL
            .into_iter()
            .map(|category| TabItem {
                category,
                label: category.icon(),
                active: active == Some(category),
                intent: Intent::SelectCategory(category),
            })
            .collect();
        let items = visible
            .iter()
            .map(|&record| PaletteItem {
                key: record.name.clone(),
                label: record.glyph(),
                intent: Intent::SelectEmoji(record.clone()),
            })
            .collect();
        Some(Self {
            placement,
            tabs,
            query: state.query().to_string(),
            items,
            overlay: Intent::Close,
        })
    }

    /// Find an item by key.
    #[must_use]
    pub fn item(&self, key: &str) -> Option<&PaletteItem> {
        self.items.iter().find(|i| i.key == key)
    }

    /// The active tab, if any (none while searching).
    #[must_use]
    pub fn active_tab(&self) -> Option<&TabItem> {
        self.tabs.iter().find(|t| t.active)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
