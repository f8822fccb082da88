//! Editor bookkeeping that does not need a browser: counts, file names, the session draft, and
//! which handed-over document the editor has already loaded.

use std::cell::Cell;

use desktop_app_contract::OpenedDocument;
use platform_host::{KeyValueStore, NOTES_DRAFT_KEY};

/// File name proposed by the save dialog.
pub const DEFAULT_FILE_NAME: &str = "untitled.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Status-bar counts for the editor text.
pub struct NoteStats {
    /// Characters (Unicode scalar values).
    pub characters: usize,
    /// Whitespace-separated words.
    pub words: usize,
}

impl NoteStats {
    /// Counts `text`.
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }

    /// Status-bar label, for example `12 characters | 3 words`.
    pub fn label(&self) -> String {
        format!("{} characters | {} words", self.characters, self.words)
    }
}

/// Name used for a save: the trimmed input, or [`DEFAULT_FILE_NAME`] when blank.
pub fn save_file_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Restores the editor draft from tab-scoped storage.
pub fn load_draft(store: &dyn KeyValueStore) -> String {
    store.get(NOTES_DRAFT_KEY).unwrap_or_default()
}

/// Writes the editor draft to tab-scoped storage.
///
/// # Errors
///
/// Returns the storage backend error.
pub fn save_draft(store: &dyn KeyValueStore, text: &str) -> Result<(), String> {
    store.set(NOTES_DRAFT_KEY, text)
}

thread_local! {
    static LOADED_REVISION: Cell<u64> = const { Cell::new(0) };
}

/// Returns the document's text the first time a given revision is seen.
///
/// Revisions only grow within a page session, so a remounted editor does not reload a document
/// it already consumed and overwrite edits made since.
pub fn take_unloaded(document: Option<&OpenedDocument>) -> Option<String> {
    let document = document?;
    LOADED_REVISION.with(|loaded| {
        if document.revision > loaded.get() {
            loaded.set(document.revision);
            Some(document.content.clone())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn document(revision: u64, content: &str) -> OpenedDocument {
        OpenedDocument {
            name: "todo.md".to_string(),
            content: content.to_string(),
            revision,
        }
    }

    #[test]
    fn stats_count_characters_and_words() {
        assert_eq!(NoteStats::of(""), NoteStats::default());
        assert_eq!(
            NoteStats::of("  hello   wide\nworld  "),
            NoteStats {
                characters: 22,
                words: 3,
            }
        );
        assert_eq!(NoteStats::of("héllo").label(), "5 characters | 1 words");
    }

    #[test]
    fn blank_save_name_falls_back_to_default() {
        assert_eq!(save_file_name("   "), "untitled.txt");
        assert_eq!(save_file_name(" plan.txt "), "plan.txt");
    }

    #[test]
    fn draft_round_trips_through_session_store() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(load_draft(&store), "");
        save_draft(&store, "draft text").expect("save");
        assert_eq!(load_draft(&store), "draft text");
    }

    #[test]
    fn each_document_revision_loads_once() {
        assert_eq!(take_unloaded(None), None);
        assert_eq!(take_unloaded(Some(&document(1, "a"))), Some("a".to_string()));
        assert_eq!(take_unloaded(Some(&document(1, "a"))), None);
        assert_eq!(take_unloaded(Some(&document(2, "b"))), Some("b".to_string()));
    }
}
