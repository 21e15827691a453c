//! Registration with the host's format/module registry.
//!
//! The application calls [`register`] once at startup, handing over its
//! registry. The palette crates keep no global state of their own.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::config::PaletteOptions;
use crate::error::Result;
use crate::host::{EMBED_TAG, EmojiEmbed, Toolbar};
use crate::module::EmojiModule;

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// An embeddable content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedFormat {
    /// Registry path, e.g. `formats/emoji`.
    pub name: &'static str,
    /// Tag the host stores on inserted embeds.
    pub tag: &'static str,
}

impl EmbedFormat {
    /// The emoji embed format.
    #[must_use]
    pub const fn emoji() -> Self {
        Self {
            name: "formats/emoji",
            tag: EMBED_TAG,
        }
    }

    /// Serialize an embed to the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Serialization`](crate::PaletteError::Serialization)
    /// if the value cannot be produced.
    pub fn value(self, embed: &EmojiEmbed) -> Result<Value> {
        Ok(serde_json::to_value(embed)?)
    }

    /// Rebuild an embed from its stored value.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Serialization`](crate::PaletteError::Serialization)
    /// if the value lacks `name` or `display_code`.
    pub fn create(self, value: &Value) -> Result<EmojiEmbed> {
        Ok(EmojiEmbed::deserialize(value)?)
    }
}

/// Constructor the host calls to instantiate a module for one editor.
pub type ModuleFactory =
    fn(Option<&mut dyn Toolbar>, PaletteOptions) -> Option<EmojiModule<'static>>;

/// A module entry point.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDefinition {
    /// Registry path, e.g. `modules/emoji-ar`.
    pub name: &'static str,
    pub create: ModuleFactory,
}

impl ModuleDefinition {
    /// The emoji palette module.
    #[must_use]
    pub fn emoji() -> Self {
        Self {
            name: "modules/emoji-ar",
            create: EmojiModule::attach,
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The host's registry of formats and modules.
pub trait Registry {
    /// Register an embed format. Fails on a duplicate name unless
    /// `overwrite` is set.
    ///
    /// # Errors
    ///
    /// [`PaletteError::AlreadyRegistered`](crate::PaletteError::AlreadyRegistered).
    fn register_embed(&mut self, format: EmbedFormat, overwrite: bool) -> Result<()>;

    /// Register a module entry point. Same duplicate rule.
    ///
    /// # Errors
    ///
    /// [`PaletteError::AlreadyRegistered`](crate::PaletteError::AlreadyRegistered).
    fn register_module(&mut self, module: ModuleDefinition, overwrite: bool) -> Result<()>;
}

/// Register the emoji format and module with `registry`.
///
/// # Errors
///
/// Propagates the registry's duplicate error.
pub fn register<R: Registry + ?Sized>(
    registry: &mut R,
    format: EmbedFormat,
    module: ModuleDefinition,
    overwrite: bool,
) -> Result<()> {
    registry.register_embed(format, overwrite)?;
    registry.register_module(module, overwrite)?;
    info!(format = format.name, module = module.name, "emoji palette registered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use serde_json::json;

    #[derive(Default)]
    struct VecRegistry {
        formats: Vec<&'static str>,
        modules: Vec<&'static str>,
    }

    impl Registry for VecRegistry {
        fn register_embed(&mut self, format: EmbedFormat, overwrite: bool) -> Result<()> {
            if self.formats.contains(&format.name) && !overwrite {
                return Err(PaletteError::AlreadyRegistered {
                    kind: "format",
                    name: format.name.to_string(),
                });
            }
            self.formats.push(format.name);
            Ok(())
        }

        fn register_module(&mut self, module: ModuleDefinition, overwrite: bool) -> Result<()> {
            if self.modules.contains(&module.name) && !overwrite {
                return Err(PaletteError::AlreadyRegistered {
                    kind: "module",
                    name: module.name.to_string(),
                });
            }
            self.modules.push(module.name);
            Ok(())
        }
    }

    #[test]
    fn register_both() {
        let mut reg = VecRegistry::default();
        register(&mut reg, EmbedFormat::emoji(), ModuleDefinition::emoji(), false).unwrap();
        assert_eq!(reg.formats, vec!["formats/emoji"]);
        assert_eq!(reg.modules, vec!["modules/emoji-ar"]);
    }

    #[test]
    fn duplicate_without_overwrite_fails() {
        let mut reg = VecRegistry::default();
        register(&mut reg, EmbedFormat::emoji(), ModuleDefinition::emoji(), false).unwrap();
        let err = register(&mut reg, EmbedFormat::emoji(), ModuleDefinition::emoji(), false);
        assert!(matches!(err, Err(PaletteError::AlreadyRegistered { kind: "format", .. })));
    }

    #[test]
    fn duplicate_with_overwrite_succeeds() {
        let mut reg = VecRegistry::default();
        register(&mut reg, EmbedFormat::emoji(), ModuleDefinition::emoji(), true).unwrap();
        register(&mut reg, EmbedFormat::emoji(), ModuleDefinition::emoji(), true).unwrap();
    }

    #[test]
    fn embed_value_round_trip() {
        let format = EmbedFormat::emoji();
        let embed = EmojiEmbed {
            name: "dog".into(),
            display_code: "128054".into(),
        };
        let value = format.value(&embed).unwrap();
        assert_eq!(value, json!({"name": "dog", "display_code": "128054"}));
        assert_eq!(format.create(&value).unwrap(), embed);
    }

    #[test]
    fn create_rejects_bad_value() {
        let err = EmbedFormat::emoji().create(&json!({"name": "dog"})).unwrap_err();
        assert!(matches!(err, PaletteError::Serialization(_)));
    }

    #[test]
    fn module_factory_needs_toolbar() {
        let def = ModuleDefinition::emoji();
        assert!((def.create)(None, PaletteOptions::default()).is_none());
    }
}
