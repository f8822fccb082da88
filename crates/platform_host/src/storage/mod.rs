//! Storage contracts, persisted record types, and the well-known keys used by the desktop.

pub mod kv;
pub mod records;

/// Session-scoped key holding the in-progress Notes editor text.
pub const NOTES_DRAFT_KEY: &str = "notes-content";
/// Durable key holding the JSON array of notes saved to the Desktop.
pub const SAVED_NOTES_KEY: &str = "saved-notes";
/// Durable key holding the JSON array of user-uploaded wallpapers.
pub const CUSTOM_WALLPAPERS_KEY: &str = "customWallpapers";
