//! Mock filesystem node types and read-only lookups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::path::normalize_virtual_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// File or directory payload of a mock filesystem entry.
pub enum FsNode {
    /// Leaf file with inline text content.
    File {
        /// File text.
        content: String,
        /// Display size (for example `"32B"` or `"1.2MB"`).
        size: String,
    },
    /// Directory with ordered children.
    Directory {
        /// Child entries in display order.
        children: Vec<FsEntry>,
    },
}

impl FsNode {
    /// Returns `true` for directories.
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Named entry within a directory.
pub struct FsEntry {
    /// Entry name (no separators).
    pub name: String,
    /// Display modification date.
    pub modified: String,
    /// Entry payload.
    pub node: FsNode,
}

impl FsEntry {
    /// Builds a file entry.
    pub fn file(name: &str, modified: &str, size: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            modified: modified.to_string(),
            node: FsNode::File {
                content: content.to_string(),
                size: size.to_string(),
            },
        }
    }

    /// Builds a directory entry.
    pub fn directory(name: &str, modified: &str, children: Vec<FsEntry>) -> Self {
        Self {
            name: name.to_string(),
            modified: modified.to_string(),
            node: FsNode::Directory { children },
        }
    }

    /// Returns `true` for directory entries.
    pub fn is_directory(&self) -> bool {
        self.node.is_directory()
    }

    /// Display size for files, `"--"` for directories.
    pub fn display_size(&self) -> &str {
        match &self.node {
            FsNode::File { size, .. } => size,
            FsNode::Directory { .. } => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Lookup failures reported with conventional command-style wording.
pub enum FsLookupError {
    /// No entry exists at the path.
    #[error("No such file or directory")]
    NotFound,
    /// A directory was required.
    #[error("Not a directory")]
    NotADirectory,
    /// A file was required.
    #[error("Is a directory")]
    IsADirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rooted mock filesystem tree.
pub struct MockFilesystem {
    root: Vec<FsEntry>,
}

impl MockFilesystem {
    /// Builds a filesystem whose root directory contains `root`.
    pub fn new(root: Vec<FsEntry>) -> Self {
        Self { root }
    }

    /// Looks up the entry at `path`. The root has no entry of its own; use [`Self::list_dir`].
    pub fn entry(&self, path: &str) -> Option<&FsEntry> {
        let normalized = normalize_virtual_path(path);
        let mut children = &self.root;
        let mut found: Option<&FsEntry> = None;
        for segment in normalized.split('/').filter(|s| !s.is_empty()) {
            if let Some(entry) = found {
                match &entry.node {
                    FsNode::Directory { children: nested } => children = nested,
                    FsNode::File { .. } => return None,
                }
            }
            found = Some(children.iter().find(|child| child.name == segment)?);
        }
        found
    }

    /// Returns `true` when `path` names a directory (the root included).
    pub fn is_directory(&self, path: &str) -> bool {
        normalize_virtual_path(path) == "/" || self.entry(path).is_some_and(FsEntry::is_directory)
    }

    /// Lists the children of the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsLookupError::NotFound`] or [`FsLookupError::NotADirectory`].
    pub fn list_dir(&self, path: &str) -> Result<&[FsEntry], FsLookupError> {
        if normalize_virtual_path(path) == "/" {
            return Ok(&self.root);
        }
        match self.entry(path) {
            None => Err(FsLookupError::NotFound),
            Some(FsEntry {
                node: FsNode::Directory { children },
                ..
            }) => Ok(children),
            Some(_) => Err(FsLookupError::NotADirectory),
        }
    }

    /// Reads the text of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FsLookupError::NotFound`] or [`FsLookupError::IsADirectory`].
    pub fn read_file(&self, path: &str) -> Result<&str, FsLookupError> {
        if normalize_virtual_path(path) == "/" {
            return Err(FsLookupError::IsADirectory);
        }
        match self.entry(path) {
            None => Err(FsLookupError::NotFound),
            Some(FsEntry {
                node: FsNode::File { content, .. },
                ..
            }) => Ok(content),
            Some(_) => Err(FsLookupError::IsADirectory),
        }
    }

    /// Mutable access to a directory's children, used only for load-time grafting.
    pub(crate) fn children_mut(&mut self, path: &str) -> Option<&mut Vec<FsEntry>> {
        let normalized = normalize_virtual_path(path);
        let mut children = &mut self.root;
        for segment in normalized.split('/').filter(|s| !s.is_empty()) {
            let entry = children.iter_mut().find(|child| child.name == segment)?;
            match &mut entry.node {
                FsNode::Directory { children: nested } => children = nested,
                FsNode::File { .. } => return None,
            }
        }
        Some(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MockFilesystem {
        MockFilesystem::new(vec![
            FsEntry::directory(
                "home",
                "2023-01-01",
                vec![FsEntry::file("a.txt", "2023-01-02", "3B", "abc")],
            ),
            FsEntry::file("hosts", "2023-01-01", "9B", "127.0.0.1"),
        ])
    }

    #[test]
    fn list_dir_resolves_root_and_nested_directories() {
        let fs = sample();
        assert_eq!(fs.list_dir("/").expect("root").len(), 2);
        assert_eq!(fs.list_dir("/home").expect("home")[0].name, "a.txt");
        assert_eq!(fs.list_dir("/hosts"), Err(FsLookupError::NotADirectory));
        assert_eq!(fs.list_dir("/missing"), Err(FsLookupError::NotFound));
    }

    #[test]
    fn read_file_reports_directory_and_missing_paths() {
        let fs = sample();
        assert_eq!(fs.read_file("/home/a.txt"), Ok("abc"));
        assert_eq!(fs.read_file("/home"), Err(FsLookupError::IsADirectory));
        assert_eq!(fs.read_file("/home/a.txt/x"), Err(FsLookupError::NotFound));
        assert_eq!(FsLookupError::NotFound.to_string(), "No such file or directory");
    }

    #[test]
    fn is_directory_includes_root() {
        let fs = sample();
        assert!(fs.is_directory("/"));
        assert!(fs.is_directory("/home/"));
        assert!(!fs.is_directory("/hosts"));
    }
}
