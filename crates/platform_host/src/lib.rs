//! Typed host-domain contracts and shared models used across the desktop runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the string key-value
//! storage contract with in-memory implementations, the persisted record types exchanged through
//! it, the read-only mock filesystem consumed by the file-browsing apps, the built-in wallpaper
//! catalog, and time/random helpers.
//! Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fs;
pub mod storage;
pub mod time;
pub mod wallpaper;

pub use fs::path::{join_virtual_path, normalize_virtual_path, parent_virtual_path};
pub use fs::tree::{default_filesystem, graft_desktop_files, DESKTOP_DIR_PATH, HOME_DIR_PATH};
pub use fs::types::{FsEntry, FsLookupError, FsNode, MockFilesystem};
pub use storage::kv::{
    load_collection_with, load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore,
    NoopKeyValueStore,
};
pub use storage::records::{CustomWallpaperRecord, DesktopFile};
pub use storage::{CUSTOM_WALLPAPERS_KEY, NOTES_DRAFT_KEY, SAVED_NOTES_KEY};
pub use time::{
    local_clock_at, local_clock_now, next_monotonic_timestamp_ms, random_unit, unix_time_ms_now,
    LocalClock,
};
pub use wallpaper::{
    is_custom_wallpaper, is_solid_color, preset_by_path, WallpaperCategory, WallpaperPreset,
    DYNAMIC_WALLPAPER,
};
