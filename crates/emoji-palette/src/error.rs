//! Errors from palette setup and embed serialization.

use thiserror::Error;

/// Error type for the emoji palette.
///
/// Interactive misses (no toolbar, no selection, unknown tab code) are not
/// errors; they are logged and ignored. This type covers the setup paths:
/// configuration loading, registration, and embed (de)serialization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaletteError {
    #[error("no embed format registered for tag {0:?}")]
    UnknownFormat(String),

    #[error("{kind} already registered: {name}")]
    AlreadyRegistered { kind: &'static str, name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PaletteError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience alias used throughout the palette crates.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_registered_message() {
        let err = PaletteError::AlreadyRegistered {
            kind: "module",
            name: "modules/emoji-ar".to_string(),
        };
        assert_eq!(err.to_string(), "module already registered: modules/emoji-ar");
    }

    #[test]
    fn unknown_format_message() {
        let err = PaletteError::UnknownFormat("image".to_string());
        assert_eq!(err.to_string(), "no embed format registered for tag \"image\"");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let err: PaletteError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, PaletteError::Config(_)));
    }
}
