//! # emoji-host — a reference host for the emoji palette
//!
//! Implements the palette's host capabilities over an in-memory editor so the
//! whole flow runs without a UI surface:
//!
//! - **[`document`]** — rope-backed text with one-char embeds
//! - **[`editor`]** — `EditorHost` (selection, focus, change events, deferred
//!   tasks, grid geometry)
//! - **[`toolbar`]** — `SimpleToolbar` of named buttons
//! - **[`registry`]** — `MemoryRegistry` of formats and modules
//! - **[`session`]** — `Session`, one editor + toolbar + module driven turn
//!   by turn

pub mod document;
pub mod editor;
pub mod registry;
pub mod session;
pub mod toolbar;

pub use document::{DeltaOp, Document, Insert};
pub use editor::{ChangeEvent, DeferQueue, EditorHost, Metrics};
pub use registry::MemoryRegistry;
pub use session::Session;
pub use toolbar::SimpleToolbar;
