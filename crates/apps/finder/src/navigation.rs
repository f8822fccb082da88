//! Folder navigation shared by the Finder and Files windows.

use platform_host::{join_virtual_path, normalize_virtual_path, FsEntry, MockFilesystem};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Back/forward history over visited directories.
pub struct FolderHistory {
    visited: Vec<String>,
    position: usize,
}

impl FolderHistory {
    /// Starts at `start`.
    pub fn new(start: &str) -> Self {
        Self {
            visited: vec![normalize_virtual_path(start)],
            position: 0,
        }
    }

    /// Directory currently shown.
    pub fn current(&self) -> &str {
        &self.visited[self.position]
    }

    /// Visits `path`, dropping any forward entries. Revisiting the current path is a no-op.
    pub fn visit(&mut self, path: &str) {
        let path = normalize_virtual_path(path);
        if path == self.current() {
            return;
        }
        self.visited.truncate(self.position + 1);
        self.visited.push(path);
        self.position += 1;
    }

    /// Whether [`Self::back`] would move.
    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    /// Whether [`Self::forward`] would move.
    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.visited.len()
    }

    /// Steps back; returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Steps forward; returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.position += 1;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One clickable segment of the path bar.
pub struct Breadcrumb {
    /// Display label.
    pub label: String,
    /// Absolute directory path.
    pub path: String,
}

/// Splits `path` into breadcrumbs, starting with the root.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let normalized = normalize_virtual_path(path);
    let mut crumbs = vec![Breadcrumb {
        label: "Root".to_string(),
        path: "/".to_string(),
    }];
    let mut current = String::new();
    for segment in normalized.split('/').filter(|segment| !segment.is_empty()) {
        current.push('/');
        current.push_str(segment);
        crumbs.push(Breadcrumb {
            label: segment.to_string(),
            path: current.clone(),
        });
    }
    crumbs
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Directory entry resolved for display.
pub struct FolderItem {
    /// Absolute path.
    pub path: String,
    /// Entry name.
    pub name: String,
    /// `Folder`, or the upper-cased file extension.
    pub kind: String,
    /// Display size, `-` for folders.
    pub size: String,
    /// Display modification date.
    pub modified: String,
    /// Whether the entry is a directory.
    pub is_folder: bool,
}

impl FolderItem {
    fn from_entry(parent: &str, entry: &FsEntry) -> Self {
        let is_folder = entry.is_directory();
        Self {
            path: join_virtual_path(parent, &entry.name),
            name: entry.name.clone(),
            kind: item_kind(&entry.name, is_folder),
            size: if is_folder {
                "-".to_string()
            } else {
                entry.display_size().to_string()
            },
            modified: entry.modified.clone(),
            is_folder,
        }
    }

    /// Emoji glyph for grid and list views.
    pub fn glyph(&self) -> &'static str {
        if self.is_folder {
            "📁"
        } else {
            "📄"
        }
    }
}

/// Type column text: `Folder`, the upper-cased extension, or `File`.
pub fn item_kind(name: &str, is_folder: bool) -> String {
    if is_folder {
        return "Folder".to_string();
    }
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
        _ => "File".to_string(),
    }
}

/// Entries of the directory at `path`; missing directories list as empty.
pub fn folder_items(fs: &MockFilesystem, path: &str) -> Vec<FolderItem> {
    let parent = normalize_virtual_path(path);
    fs.list_dir(&parent)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| FolderItem::from_entry(&parent, entry))
                .collect()
        })
        .unwrap_or_default()
}

/// Sub-directories of `path` for the folder tree.
pub fn subfolders(fs: &MockFilesystem, path: &str) -> Vec<FolderItem> {
    folder_items(fs, path)
        .into_iter()
        .filter(|item| item.is_folder)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of activating (double-clicking) an item.
pub enum ItemActivation {
    /// Navigate into the folder.
    OpenFolder(String),
    /// Hand the file to Notes.
    OpenFile {
        /// File name.
        name: String,
        /// File text.
        content: String,
    },
}

/// Resolves what activating the entry at `path` does.
pub fn activate_item(fs: &MockFilesystem, path: &str) -> Option<ItemActivation> {
    let entry = fs.entry(path)?;
    if entry.is_directory() {
        return Some(ItemActivation::OpenFolder(normalize_virtual_path(path)));
    }
    fs.read_file(path)
        .ok()
        .map(|content| ItemActivation::OpenFile {
            name: entry.name.clone(),
            content: content.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use platform_host::{default_filesystem, graft_desktop_files, DesktopFile};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn history_visits_back_and_forward() {
        let mut history = FolderHistory::new("/home/user");
        assert!(!history.can_go_back());
        history.visit("/home/user/Documents");
        history.visit("/home/user/Documents/");
        history.visit("/home/user/Documents/Work");
        assert!(history.back());
        assert_eq!(history.current(), "/home/user/Documents");
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.current(), "/home/user");
        assert!(history.forward());
        assert_eq!(history.current(), "/home/user/Documents");
    }

    #[test]
    fn visiting_after_back_drops_forward_entries() {
        let mut history = FolderHistory::new("/home/user");
        history.visit("/etc");
        history.back();
        history.visit("/usr");
        assert!(!history.can_go_forward());
        assert!(history.back());
        assert_eq!(history.current(), "/home/user");
    }

    #[test]
    fn breadcrumbs_accumulate_paths() {
        assert_eq!(
            breadcrumbs("/home/user"),
            vec![
                Breadcrumb {
                    label: "Root".to_string(),
                    path: "/".to_string(),
                },
                Breadcrumb {
                    label: "home".to_string(),
                    path: "/home".to_string(),
                },
                Breadcrumb {
                    label: "user".to_string(),
                    path: "/home/user".to_string(),
                },
            ]
        );
        assert_eq!(breadcrumbs("/").len(), 1);
    }

    #[test]
    fn item_kind_uses_extension() {
        assert_eq!(item_kind("resume.pdf", false), "PDF");
        assert_eq!(item_kind("Makefile", false), "File");
        assert_eq!(item_kind("Work", true), "Folder");
    }

    #[test]
    fn folder_items_resolve_paths_and_sizes() {
        let fs = default_filesystem();
        let usr = folder_items(&fs, "/usr");
        assert_eq!(
            usr.iter().map(|item| item.path.as_str()).collect::<Vec<_>>(),
            vec!["/usr/bin", "/usr/lib"]
        );
        assert_eq!(usr[0].size, "-");
        let etc = folder_items(&fs, "/etc");
        assert_eq!(etc[0].size, "32B");
        assert!(folder_items(&fs, "/missing").is_empty());
        assert!(subfolders(&fs, "/etc").is_empty());
    }

    #[test]
    fn desktop_folder_lists_saved_notes_and_opens_them() {
        let mut fs = default_filesystem();
        graft_desktop_files(
            &mut fs,
            &[DesktopFile {
                id: "file-1".to_string(),
                name: "todo.txt".to_string(),
                content: "milk".to_string(),
            }],
        );
        let desktop = folder_items(&fs, "/home/user/Desktop");
        assert!(desktop.iter().any(|item| item.name == "todo.txt"));
        assert_eq!(
            activate_item(&fs, "/home/user/Desktop/todo.txt"),
            Some(ItemActivation::OpenFile {
                name: "todo.txt".to_string(),
                content: "milk".to_string(),
            })
        );
        assert_eq!(
            activate_item(&fs, "/home/user/Desktop"),
            Some(ItemActivation::OpenFolder("/home/user/Desktop".to_string()))
        );
        assert_eq!(activate_item(&fs, "/nope"), None);
    }
}
