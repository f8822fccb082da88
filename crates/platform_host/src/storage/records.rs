//! Record types persisted as JSON arrays through the storage contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A note saved to the Desktop by the Notes app.
pub struct DesktopFile {
    /// Creation-timestamp derived identifier.
    pub id: String,
    /// File name shown under the desktop icon.
    pub name: String,
    /// Full text content.
    pub content: String,
}

impl DesktopFile {
    /// Human-readable size in the mock filesystem's `"<n>B"` style.
    pub fn display_size(&self) -> String {
        format!("{}B", self.content.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A user-uploaded wallpaper. `path` is an object URL or any non-catalog image reference.
pub struct CustomWallpaperRecord {
    /// `custom-<timestamp>` identifier.
    pub id: String,
    /// Display name chosen at upload time.
    pub name: String,
    /// Image reference.
    pub path: String,
}
