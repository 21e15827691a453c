//! The editor module — wires a palette to a toolbar and routes host events.
//!
//! The host builds the module once per editor through its module registry
//! (see [`crate::registry`]). Without a toolbar there is nothing to click,
//! so the module declines to attach and the host simply never sees it.

use tracing::{debug, info};

use emoji_catalog::EmojiCatalog;

use crate::config::PaletteOptions;
use crate::host::{HostEditor, Origin, Toolbar};
use crate::palette::{EmojiPalette, InsertionRequest};
use crate::view::Intent;

/// Toolbar button name the module handles.
pub const EMOJI_BUTTON: &str = "emoji";

/// An emoji palette attached to one editor's toolbar.
#[derive(Debug)]
pub struct EmojiModule<'c> {
    palette: EmojiPalette<'c>,
}

impl EmojiModule<'static> {
    /// Attach with the built-in catalog. This is the registry entry point.
    #[must_use]
    pub fn attach(toolbar: Option<&mut dyn Toolbar>, options: PaletteOptions) -> Option<Self> {
        Self::attach_with_catalog(EmojiCatalog::builtin(), toolbar, options)
    }
}

impl<'c> EmojiModule<'c> {
    /// Attach over a specific catalog.
    ///
    /// Registers the button handler and swaps in the configured icon.
    /// Returns `None` when there is no toolbar.
    #[must_use]
    pub fn attach_with_catalog(
        catalog: &'c EmojiCatalog,
        toolbar: Option<&mut dyn Toolbar>,
        options: PaletteOptions,
    ) -> Option<Self> {
        let Some(toolbar) = toolbar else {
            debug!("no toolbar: emoji module not attached");
            return None;
        };
        toolbar.add_handler(EMOJI_BUTTON);
        if !toolbar.set_button_icon(EMOJI_BUTTON, &options.button_icon) {
            debug!(button = EMOJI_BUTTON, "toolbar has no emoji button; icon left as is");
        }
        info!(emoji = catalog.len(), "emoji module attached");
        Some(Self {
            palette: EmojiPalette::new(catalog, options),
        })
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &EmojiPalette<'c> {
        &self.palette
    }

    #[inline]
    pub const fn palette_mut(&mut self) -> &mut EmojiPalette<'c> {
        &mut self.palette
    }

    /// A toolbar button was clicked. Returns `true` if it was ours.
    pub fn on_toolbar<H: HostEditor>(&mut self, name: &str, host: &mut H) -> bool {
        if name != EMOJI_BUTTON {
            return false;
        }
        self.palette.toggle(host)
    }

    /// The document changed.
    pub fn on_text_change(&mut self, origin: Origin) -> bool {
        self.palette.on_text_change(origin)
    }

    /// Run an intent from the palette view.
    pub fn dispatch<H: HostEditor + 'static>(
        &mut self,
        host: &mut H,
        intent: Intent,
    ) -> Option<InsertionRequest> {
        self.palette.dispatch(host, intent)
    }
}
