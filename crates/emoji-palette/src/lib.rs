//! # emoji-palette — the emoji palette core
//!
//! A toolbar-triggered palette for browsing emoji by category, searching them
//! by name, and inserting the chosen one into the host editor as an embed.
//!
//! - **[`state`]** — `PaletteState` (closed / category / search)
//! - **[`palette`]** — `EmojiPalette`, the state machine and insertion logic
//! - **[`view`]** — declarative render descriptions with bound intents
//! - **[`host`]** — capability traits the host editor and toolbar implement
//! - **[`module`]** — `EmojiModule`, the per-editor attachment
//! - **[`registry`]** — format/module registration, done once at startup
//! - **[`config`]** — `PaletteOptions` (TOML)
//! - **[`error`]** — `PaletteError`
//!
//! Everything here is synchronous and UI-free. The host's adapter draws each
//! [`PaletteView`] and feeds clicks back as [`Intent`]s.

pub mod config;
pub mod error;
pub mod host;
pub mod module;
pub mod palette;
pub mod registry;
pub mod state;
pub mod view;

pub use config::PaletteOptions;
pub use error::{PaletteError, Result};
pub use host::{Bounds, EMBED_TAG, EmojiEmbed, HostEditor, Origin, Selection, Toolbar};
pub use module::{EMOJI_BUTTON, EmojiModule};
pub use palette::{EmojiPalette, InsertionRequest};
pub use registry::{EmbedFormat, ModuleDefinition, Registry, register};
pub use state::PaletteState;
pub use view::{Intent, PaletteItem, PaletteView, Placement, TabItem};
