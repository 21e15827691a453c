//! # emoji-catalog — the emoji set behind the palette
//!
//! A static, read-only list of emoji records, each tagged with a category:
//!
//! - **[`category`]** — the closed `Category` set with tab codes and icons
//! - **[`record`]** — `EmojiRecord` and glyph decoding
//! - **[`catalog`]** — `EmojiCatalog` with category and substring lookup
//!
//! Lookups are pure and total. The built-in catalog is loaded on first use
//! and shared for the life of the process.

pub mod catalog;
pub mod category;
mod data;
pub mod record;

pub use catalog::EmojiCatalog;
pub use category::{Category, DEFAULT_CATEGORY, ParseCategoryError};
pub use record::{EmojiRecord, decode_display_code};
