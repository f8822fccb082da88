//! Desktop runtime persistence for saved desktop files.

use leptos::logging;
use platform_host::{load_collection_with, save_json_with, DesktopFile, KeyValueStore, SAVED_NOTES_KEY};

/// Loads saved desktop files; malformed data is logged and treated as empty.
pub fn load_desktop_files(store: &dyn KeyValueStore) -> Vec<DesktopFile> {
    match load_collection_with::<_, DesktopFile>(store, SAVED_NOTES_KEY) {
        Ok(files) => files,
        Err(err) => {
            logging::warn!("discarding saved desktop files: {err}");
            Vec::new()
        }
    }
}

/// Writes the full desktop file collection.
pub fn persist_desktop_files(store: &dyn KeyValueStore, files: &[DesktopFile]) {
    if let Err(err) = save_json_with(store, SAVED_NOTES_KEY, files) {
        logging::warn!("persist desktop files failed: {err}");
    }
}
