//! Host capabilities — what the palette needs from the editor around it.
//!
//! The palette never owns the editor. Every operation that touches the
//! document borrows the host for the duration of the call, through the
//! [`HostEditor`] trait. The toolbar is a separate, optional capability
//! ([`Toolbar`]) because a host may run without one.
//!
//! # Deferred work
//!
//! [`HostEditor::defer`] schedules a task to run after the host finishes its
//! current turn. The palette uses it to move the cursor past a freshly
//! inserted embed: the move must see the document *after* the host has
//! processed the insertion, so it can never run inline.

use std::fmt;

use serde::{Deserialize, Serialize};

use emoji_catalog::{EmojiRecord, decode_display_code};

/// Content-type tag of the emoji embed.
pub const EMBED_TAG: &str = "emoji";

// ---------------------------------------------------------------------------
// Geometry and selection
// ---------------------------------------------------------------------------

/// The editor's current selection. `length` is zero for a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub index: usize,
    pub length: usize,
}

impl Selection {
    /// A caret at `index`.
    #[must_use]
    pub const fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }
}

/// Pixel bounds of a document position, relative to the editor container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub height: u32,
}

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// Who caused a content change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Typing, pasting, clicking: anything the user did directly.
    User,
    /// Programmatic edits through the editor API.
    Api,
    /// Programmatic edits that should not emit change notifications.
    Silent,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Api => "api",
            Self::Silent => "silent",
        })
    }
}

// ---------------------------------------------------------------------------
// Embed value
// ---------------------------------------------------------------------------

/// The serialized form of an inserted emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiEmbed {
    pub name: String,
    pub display_code: String,
}

impl EmojiEmbed {
    /// Decode the display code into the rendered glyph.
    #[must_use]
    pub fn glyph(&self) -> String {
        decode_display_code(&self.display_code)
    }
}

impl From<&EmojiRecord> for EmojiEmbed {
    fn from(record: &EmojiRecord) -> Self {
        Self {
            name: record.name.clone(),
            display_code: record.display_code.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A task queued with [`HostEditor::defer`].
pub type DeferredTask<H> = Box<dyn FnOnce(&mut H)>;

/// The editor capabilities the palette drives.
pub trait HostEditor {
    /// The current selection, or `None` when the editor has no focus.
    fn selection(&self) -> Option<Selection>;

    /// Pixel bounds of the character at `index`.
    fn bounds(&self, index: usize) -> Bounds;

    /// Width of the editor container, for palette placement.
    fn container_width(&self) -> u32;

    /// Insert an embed of type `tag` at `index`. Returns `false` if the host
    /// refused it (no format registered for `tag`).
    fn insert_embed(&mut self, index: usize, tag: &str, embed: &EmojiEmbed, origin: Origin) -> bool;

    /// Place a caret at `index`.
    fn set_selection(&mut self, index: usize);

    /// Give the editor keyboard focus (establishing a selection if needed).
    fn focus(&mut self);

    /// Run `task` after the current turn completes.
    fn defer(&mut self, task: DeferredTask<Self>)
    where
        Self: Sized;
}

/// A toolbar that routes named button clicks to handlers.
pub trait Toolbar {
    /// Route clicks on the button named `name` to the module.
    fn add_handler(&mut self, name: &str);

    /// Replace the icon markup of the button named `name`. Returns `false`
    /// if the toolbar has no such button.
    fn set_button_icon(&mut self, name: &str, markup: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoji_catalog::Category;

    #[test]
    fn embed_from_record() {
        let r = EmojiRecord::new("dog", Category::Nature, "128054", 7);
        let e = EmojiEmbed::from(&r);
        assert_eq!(e.name, "dog");
        assert_eq!(e.display_code, "128054");
        assert_eq!(e.glyph(), "\u{1F436}");
    }

    #[test]
    fn embed_json_shape() {
        let e = EmojiEmbed {
            name: "dog".to_string(),
            display_code: "128054".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"name":"dog","display_code":"128054"}"#);
        let back: EmojiEmbed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn origin_display() {
        assert_eq!(Origin::User.to_string(), "user");
        assert_eq!(Origin::Api.to_string(), "api");
    }

    #[test]
    fn caret_has_no_length() {
        assert_eq!(Selection::caret(4), Selection { index: 4, length: 0 });
    }
}
