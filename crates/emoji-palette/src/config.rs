//! Palette options.
//!
//! ```toml
//! button_icon = "<svg>...</svg>"
//! palette_width = 250
//! vertical_offset = 10
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Default toolbar icon: a smiley face in the host toolbar's stroke/fill
/// classes.
pub const DEFAULT_BUTTON_ICON: &str = concat!(
    r#"<svg viewbox="0 0 18 18">"#,
    r#"<circle class="ql-fill" cx="7" cy="7" r="1"></circle>"#,
    r#"<circle class="ql-fill" cx="11" cy="7" r="1"></circle>"#,
    r#"<path class="ql-stroke" d="M7,10a2,2,0,0,0,4,0H7Z"></path>"#,
    r#"<circle class="ql-stroke" cx="9" cy="9" r="6"></circle>"#,
    "</svg>",
);

/// Options the host passes when instantiating the emoji module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// Markup placed inside the toolbar button.
    pub button_icon: String,
    /// Palette width, used to flip placement near the container's right edge.
    pub palette_width: u32,
    /// Gap between the cursor line and the palette's top edge.
    pub vertical_offset: u32,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            button_icon: DEFAULT_BUTTON_ICON.to_string(),
            palette_width: 250,
            vertical_offset: 10,
        }
    }
}

impl PaletteOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Config`](crate::PaletteError::Config) if the
    /// text is not valid TOML or a key has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "palette options loaded");
        Ok(options)
    }

    /// Load options, falling back to defaults if the file is missing or bad.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(options) => options,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default palette options");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let o = PaletteOptions::default();
        assert_eq!(o.palette_width, 250);
        assert_eq!(o.vertical_offset, 10);
        assert!(o.button_icon.starts_with("<svg"));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(PaletteOptions::from_toml_str("").unwrap(), PaletteOptions::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let o = PaletteOptions::from_toml_str("palette_width = 320\n").unwrap();
        assert_eq!(o.palette_width, 320);
        assert_eq!(o.vertical_offset, 10);
        assert_eq!(o.button_icon, DEFAULT_BUTTON_ICON);
    }

    #[test]
    fn custom_icon() {
        let o = PaletteOptions::from_toml_str(r#"button_icon = "<b>:)</b>""#).unwrap();
        assert_eq!(o.button_icon, "<b>:)</b>");
    }

    #[test]
    fn wrong_type_is_config_error() {
        let err = PaletteOptions::from_toml_str(r#"palette_width = "wide""#).unwrap_err();
        assert!(matches!(err, PaletteError::Config(_)));
    }

    #[test]
    fn missing_file_falls_back() {
        let path = Path::new("/nonexistent/emoji-palette/options.toml");
        assert!(matches!(PaletteOptions::load(path), Err(PaletteError::Io(_))));
        assert_eq!(PaletteOptions::load_or_default(path), PaletteOptions::default());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "emoji-palette-options-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "vertical_offset = 4\n").unwrap();
        let o = PaletteOptions::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(o.vertical_offset, 4);
    }
}
