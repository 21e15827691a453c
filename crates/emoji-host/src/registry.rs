//! In-memory format/module registry.

use std::collections::BTreeMap;

use tracing::debug;

use emoji_palette::registry::{EmbedFormat, ModuleDefinition, Registry};
use emoji_palette::{PaletteError, Result};

/// Registered formats and modules, by name.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    formats: BTreeMap<&'static str, EmbedFormat>,
    modules: BTreeMap<&'static str, ModuleDefinition>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registered format, by name.
    pub fn formats(&self) -> impl Iterator<Item = EmbedFormat> + '_ {
        self.formats.values().copied()
    }

    #[must_use]
    pub fn module(&self, name: &str) -> Option<ModuleDefinition> {
        self.modules.get(name).copied()
    }
}

impl Registry for MemoryRegistry {
    fn register_embed(&mut self, format: EmbedFormat, overwrite: bool) -> Result<()> {
        if !overwrite && self.formats.contains_key(format.name) {
            return Err(PaletteError::AlreadyRegistered {
                kind: "format",
                name: format.name.to_string(),
            });
        }
        debug!(name = format.name, tag = format.tag, "format registered");
        self.formats.insert(format.name, format);
        Ok(())
    }

    fn register_module(&mut self, module: ModuleDefinition, overwrite: bool) -> Result<()> {
        if !overwrite && self.modules.contains_key(module.name) {
            return Err(PaletteError::AlreadyRegistered {
                kind: "module",
                name: module.name.to_string(),
            });
        }
        debug!(name = module.name, "module registered");
        self.modules.insert(module.name, module);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoji_palette::register;

    #[test]
    fn lookups_after_register() {
        let mut reg = MemoryRegistry::new();
        register(&mut reg, EmbedFormat::emoji(), ModuleDefinition::emoji(), false).unwrap();
        assert_eq!(reg.formats().collect::<Vec<_>>(), vec![EmbedFormat::emoji()]);
        assert!(reg.module("modules/emoji-ar").is_some());
        assert!(reg.module("modules/other").is_none());
    }

    #[test]
    fn format_duplicate_rejected() {
        let mut reg = MemoryRegistry::new();
        reg.register_embed(EmbedFormat::emoji(), false).unwrap();
        let err = reg.register_embed(EmbedFormat::emoji(), false).unwrap_err();
        assert_eq!(err.to_string(), "format already registered: formats/emoji");
        assert_eq!(reg.formats().count(), 1);
    }

    #[test]
    fn module_duplicate_rejected() {
        let mut reg = MemoryRegistry::new();
        reg.register_module(ModuleDefinition::emoji(), false).unwrap();
        let err = reg.register_module(ModuleDefinition::emoji(), false).unwrap_err();
        assert_eq!(err.to_string(), "module already registered: modules/emoji-ar");
        assert!(reg.register_module(ModuleDefinition::emoji(), true).is_ok());
    }
}
