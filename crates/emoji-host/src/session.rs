//! Session — one editor, its toolbar, and the attached emoji module.
//!
//! Each public action is one host turn:
//!
//! ```text
//! action → module / palette transition
//!        → forward buffered change events to the module
//!        → host.end_turn()   (deferred tasks run here)
//! ```
//!
//! Interaction goes through the current [`PaletteView`] the way a UI adapter
//! would: a pick looks the item up by key and dispatches the intent bound to
//! it, so nothing here can reach an emoji that isn't on screen.

use tracing::debug;

use emoji_catalog::{Category, EmojiCatalog};
use emoji_palette::{
    EmojiModule, EmojiPalette, HostEditor, InsertionRequest, Intent, ModuleDefinition,
    PaletteOptions, PaletteView, Result, Toolbar,
};

use crate::editor::EditorHost;
use crate::registry::MemoryRegistry;
use crate::toolbar::SimpleToolbar;

/// A running editor with the emoji palette wired in (when a module was
/// available for it).
#[derive(Debug)]
pub struct Session<'c> {
    host: EditorHost,
    toolbar: SimpleToolbar,
    module: Option<EmojiModule<'c>>,
    insertions: Vec<InsertionRequest>,
}

impl Session<'static> {
    /// Build the module through `registry`, the way a host instantiates
    /// registered modules, and hand the registered formats to the host.
    /// No registered module → no palette. No registered format → embeds
    /// are refused.
    #[must_use]
    pub fn from_registry(
        registry: &MemoryRegistry,
        mut host: EditorHost,
        mut toolbar: SimpleToolbar,
        options: PaletteOptions,
    ) -> Self {
        for format in registry.formats() {
            host.register_format(format);
        }
        let module = registry
            .module(ModuleDefinition::emoji().name)
            .and_then(|def| (def.create)(Some(&mut toolbar as &mut dyn Toolbar), options));
        Self::assemble(host, toolbar, module)
    }
}

impl<'c> Session<'c> {
    /// Attach directly over `catalog`, bypassing the registry.
    #[must_use]
    pub fn with_catalog(
        catalog: &'c EmojiCatalog,
        host: EditorHost,
        mut toolbar: SimpleToolbar,
        options: PaletteOptions,
    ) -> Self {
        let module = EmojiModule::attach_with_catalog(
            catalog,
            Some(&mut toolbar as &mut dyn Toolbar),
            options,
        );
        Self::assemble(host, toolbar, module)
    }

    fn assemble(
        host: EditorHost,
        toolbar: SimpleToolbar,
        module: Option<EmojiModule<'c>>,
    ) -> Self {
        Self {
            host,
            toolbar,
            module,
            insertions: Vec::new(),
        }
    }

    // -- Access -------------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn host(&self) -> &EditorHost {
        &self.host
    }

    #[inline]
    #[must_use]
    pub const fn toolbar(&self) -> &SimpleToolbar {
        &self.toolbar
    }

    /// The palette, if the module attached.
    #[must_use]
    pub fn palette(&self) -> Option<&EmojiPalette<'c>> {
        self.module.as_ref().map(EmojiModule::palette)
    }

    /// The current render description, if the palette is open.
    #[must_use]
    pub fn view(&self) -> Option<&PaletteView> {
        self.palette().and_then(EmojiPalette::view)
    }

    /// Every insertion made so far, oldest first.
    #[must_use]
    pub fn insertions(&self) -> &[InsertionRequest] {
        &self.insertions
    }

    // -- Actions ------------------------------------------------------------

    /// Click a toolbar button. Returns `true` if a handler took it.
    pub fn click(&mut self, button: &str) -> bool {
        let handled = self.toolbar.handles(button)
            && self
                .module
                .as_mut()
                .is_some_and(|m| m.on_toolbar(button, &mut self.host));
        self.finish_turn();
        handled
    }

    /// The user types into the document.
    pub fn type_text(&mut self, text: &str) {
        self.host.type_text(text);
        self.finish_turn();
    }

    /// Move the caret without typing.
    pub fn move_caret(&mut self, index: usize) {
        self.host.set_selection(index);
        self.finish_turn();
    }

    /// Blur the editor.
    pub fn blur(&mut self) {
        self.host.blur();
        self.finish_turn();
    }

    /// Replace the document with exported JSON ops.
    ///
    /// # Errors
    ///
    /// As [`EditorHost::load_json`].
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let loaded = self.host.load_json(json);
        self.finish_turn();
        loaded
    }

    /// Click a category tab. Ignored unless the tab is on screen.
    pub fn select_tab(&mut self, category: Category) -> bool {
        let intent = self
            .view()
            .and_then(|v| v.tabs.iter().find(|t| t.category == category))
            .map(|t| t.intent.clone());
        let Some(intent) = intent else {
            debug!(category = %category, "tab not on screen");
            self.finish_turn();
            return false;
        };
        self.dispatch(intent);
        self.finish_turn();
        true
    }

    /// Type into the palette's search field.
    pub fn search(&mut self, query: &str) -> bool {
        let changed = self
            .module
            .as_mut()
            .is_some_and(|m| m.palette_mut().set_search_query(query));
        self.finish_turn();
        changed
    }

    /// Click the emoji whose key is `key`. Ignored unless it's on screen.
    pub fn pick(&mut self, key: &str) -> Option<InsertionRequest> {
        let intent = self.view().and_then(|v| v.item(key)).map(|i| i.intent.clone());
        let request = match intent {
            Some(intent) => self.dispatch(intent),
            None => {
                debug!(key, "emoji not on screen");
                None
            }
        };
        self.finish_turn();
        request
    }

    /// Click outside the palette.
    pub fn click_outside(&mut self) {
        if let Some(overlay) = self.view().map(|v| v.overlay.clone()) {
            self.dispatch(overlay);
        }
        self.finish_turn();
    }

    // -- Internal -----------------------------------------------------------

    fn dispatch(&mut self, intent: Intent) -> Option<InsertionRequest> {
        let request = self.module.as_mut()?.dispatch(&mut self.host, intent)?;
        self.insertions.push(request.clone());
        Some(request)
    }

    fn finish_turn(&mut self) {
        let changes = self.host.take_changes();
        if let Some(module) = self.module.as_mut() {
            for change in changes {
                module.on_text_change(change.origin);
            }
        }
        self.host.end_turn();
    }
}
