//! Sidebar sections, the custom wallpaper library, and the upload draft.

use desktop_app_contract::{WallpaperSelection, DEFAULT_WALLPAPER};
use platform_host::{
    load_collection_with, save_json_with, CustomWallpaperRecord, KeyValueStore,
    WallpaperCategory, CUSTOM_WALLPAPERS_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A sidebar entry: one bundled category or the user's uploads.
pub enum PickerSection {
    /// Bundled presets of one category.
    Catalog(WallpaperCategory),
    /// User uploads.
    Custom,
}

impl PickerSection {
    /// Sections in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Catalog(WallpaperCategory::Featured),
        Self::Catalog(WallpaperCategory::Landscapes),
        Self::Catalog(WallpaperCategory::Abstract),
        Self::Catalog(WallpaperCategory::SolidColors),
        Self::Custom,
    ];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catalog(category) => category.label(),
            Self::Custom => "My Wallpapers",
        }
    }

    /// Whether the dynamic wallpaper entry is listed above this section.
    pub const fn shows_dynamic(self) -> bool {
        matches!(self, Self::Catalog(WallpaperCategory::Featured))
    }
}

/// Whether a static tile for `path` should carry the selection ring.
pub fn is_static_selected(current: &WallpaperSelection, path: &str) -> bool {
    !current.is_dynamic && current.value == path
}

/// Reads the custom library from durable storage.
///
/// # Errors
///
/// Returns the decode error for a corrupt stored value.
pub fn load_custom_wallpapers(
    store: &dyn KeyValueStore,
) -> Result<Vec<CustomWallpaperRecord>, String> {
    load_collection_with(store, CUSTOM_WALLPAPERS_KEY)
}

/// Writes the custom library to durable storage.
///
/// # Errors
///
/// Returns the storage backend error.
pub fn save_custom_wallpapers(
    store: &dyn KeyValueStore,
    records: &[CustomWallpaperRecord],
) -> Result<(), String> {
    save_json_with(store, CUSTOM_WALLPAPERS_KEY, records)
}

/// Suggested display name for an uploaded file: everything before the first `.`.
pub fn default_upload_name(file_name: &str) -> String {
    file_name.split('.').next().unwrap_or_default().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// State of the upload dialog.
pub struct UploadDraft {
    /// Object URL of the picked image.
    pub preview_url: Option<String>,
    /// Name typed by the user.
    pub name: String,
}

impl UploadDraft {
    /// Records a freshly picked file, returning the preview URL it replaces.
    pub fn pick(&mut self, file_name: &str, url: String) -> Option<String> {
        self.name = default_upload_name(file_name);
        self.preview_url.replace(url)
    }

    /// Drops the picked file, returning its preview URL.
    pub fn clear_file(&mut self) -> Option<String> {
        self.preview_url.take()
    }

    /// Whether both a file and a non-blank name are present.
    pub fn can_upload(&self) -> bool {
        self.preview_url.is_some() && !self.name.trim().is_empty()
    }

    /// Consumes the draft into a library record stamped with `timestamp_ms`.
    pub fn into_record(self, timestamp_ms: u64) -> Option<CustomWallpaperRecord> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        let path = self.preview_url?;
        Some(CustomWallpaperRecord {
            id: format!("custom-{timestamp_ms}"),
            name,
            path,
        })
    }
}

/// Removes the record with `id` from the library, returning it.
pub fn remove_custom(
    records: &mut Vec<CustomWallpaperRecord>,
    id: &str,
) -> Option<CustomWallpaperRecord> {
    let index = records.iter().position(|record| record.id == id)?;
    Some(records.remove(index))
}

/// Selection to apply after deleting `removed`: the default image when it was current.
pub fn fallback_after_delete(
    current: &WallpaperSelection,
    removed: &CustomWallpaperRecord,
) -> Option<WallpaperSelection> {
    (current.value == removed.path).then(|| WallpaperSelection::fixed(DEFAULT_WALLPAPER))
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(id: &str, path: &str) -> CustomWallpaperRecord {
        CustomWallpaperRecord {
            id: id.to_string(),
            name: id.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn upload_name_strips_everything_after_first_dot() {
        assert_eq!(default_upload_name("beach.day.png"), "beach");
        assert_eq!(default_upload_name("sunset"), "sunset");
    }

    #[test]
    fn draft_requires_file_and_name() {
        let mut draft = UploadDraft::default();
        assert!(!draft.can_upload());
        assert_eq!(draft.pick("photo.jpg", "blob:a".to_string()), None);
        assert!(draft.can_upload());
        draft.name = "   ".to_string();
        assert!(!draft.can_upload());
        assert_eq!(draft.clone().into_record(1), None);
        draft.name = " Trip ".to_string();
        assert_eq!(
            draft.into_record(1_700_000_000_000),
            Some(CustomWallpaperRecord {
                id: "custom-1700000000000".to_string(),
                name: "Trip".to_string(),
                path: "blob:a".to_string(),
            })
        );
    }

    #[test]
    fn picking_again_hands_back_previous_preview() {
        let mut draft = UploadDraft::default();
        draft.pick("a.png", "blob:a".to_string());
        assert_eq!(draft.pick("b.png", "blob:b".to_string()), Some("blob:a".to_string()));
        assert_eq!(draft.name, "b");
        assert_eq!(draft.clear_file(), Some("blob:b".to_string()));
        assert!(!draft.can_upload());
    }

    #[test]
    fn deleting_current_custom_resets_to_default() {
        let mut records = vec![record("custom-1", "blob:1"), record("custom-2", "blob:2")];
        let removed = remove_custom(&mut records, "custom-1").expect("present");
        assert_eq!(records, vec![record("custom-2", "blob:2")]);
        assert_eq!(
            fallback_after_delete(&WallpaperSelection::fixed("blob:1"), &removed),
            Some(WallpaperSelection::fixed(DEFAULT_WALLPAPER))
        );
        assert_eq!(
            fallback_after_delete(&WallpaperSelection::fixed("#121212"), &removed),
            None
        );
        assert_eq!(remove_custom(&mut records, "missing"), None);
    }

    #[test]
    fn library_persists_under_custom_wallpapers_key() {
        let store = MemoryKeyValueStore::default();
        assert!(load_custom_wallpapers(&store).expect("empty").is_empty());
        let records = vec![record("custom-9", "blob:9")];
        save_custom_wallpapers(&store, &records).expect("save");
        assert_eq!(load_custom_wallpapers(&store).expect("load"), records);
        assert!(store
            .get(CUSTOM_WALLPAPERS_KEY)
            .expect("raw")
            .contains("\"custom-9\""));
    }

    #[test]
    fn dynamic_selection_rings_no_static_tile() {
        let dynamic = WallpaperSelection {
            value: DEFAULT_WALLPAPER.to_string(),
            is_dynamic: true,
        };
        assert!(!is_static_selected(&dynamic, DEFAULT_WALLPAPER));
        assert!(is_static_selected(
            &WallpaperSelection::fixed(DEFAULT_WALLPAPER),
            DEFAULT_WALLPAPER
        ));
        assert_eq!(PickerSection::ALL[4].label(), "My Wallpapers");
        assert!(PickerSection::ALL[0].shows_dynamic());
    }
}
