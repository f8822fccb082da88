//! Seeded mock filesystem shared by Terminal, Finder, and the Files explorer.

use super::types::{FsEntry, MockFilesystem};
use crate::storage::records::DesktopFile;

/// Home directory of the single mock user.
pub const HOME_DIR_PATH: &str = "/home/user";
/// Directory that receives notes saved to the Desktop.
pub const DESKTOP_DIR_PATH: &str = "/home/user/Desktop";

const SAVED_FILE_MODIFIED: &str = "Today";

/// Builds the static seed tree.
pub fn default_filesystem() -> MockFilesystem {
    let documents = FsEntry::directory(
        "Documents",
        "Apr 15, 2023",
        vec![
            FsEntry::directory("Work", "Apr 14, 2023", Vec::new()),
            FsEntry::directory("Personal", "Apr 12, 2023", Vec::new()),
            FsEntry::file(
                "notes.txt",
                "Apr 15, 2023",
                "32B",
                "Important notes for the project",
            ),
            FsEntry::file(
                "todo.md",
                "Apr 18, 2023",
                "64B",
                "# Todo List\n- Finish WebOS project\n- Add more features\n- Fix bugs",
            ),
            FsEntry::file(
                "resume.pdf",
                "Apr 10, 2023",
                "245 KB",
                "Resume content would be here",
            ),
        ],
    );
    let downloads = FsEntry::directory(
        "Downloads",
        "Apr 18, 2023",
        vec![
            FsEntry::file("image.jpg", "Apr 10, 2023", "1.2MB", "[binary data]"),
            FsEntry::file(
                "software.dmg",
                "Apr 8, 2023",
                "1.2 GB",
                "Software installation file",
            ),
        ],
    );
    let pictures = FsEntry::directory(
        "Pictures",
        "Apr 10, 2023",
        vec![
            FsEntry::directory("Vacation", "Mar 20, 2023", Vec::new()),
            FsEntry::directory("Family", "Feb 15, 2023", Vec::new()),
            FsEntry::file("profile.jpg", "Apr 2, 2023", "1.2 MB", "Profile picture data"),
            FsEntry::file("background.png", "Mar 28, 2023", "2.4 MB", "[binary data]"),
        ],
    );
    let desktop = FsEntry::directory(
        "Desktop",
        "Apr 5, 2023",
        vec![FsEntry::file(
            "shortcut.lnk",
            "Apr 5, 2023",
            "1KB",
            "[link to application]",
        )],
    );
    let user = FsEntry::directory(
        "user",
        "Apr 19, 2023",
        vec![
            documents,
            downloads,
            pictures,
            FsEntry::directory("Music", "Mar 25, 2023", Vec::new()),
            FsEntry::directory("Videos", "Feb 12, 2023", Vec::new()),
            desktop,
            FsEntry::file(
                "readme.txt",
                "Apr 19, 2023",
                "2 KB",
                "Welcome to WebOS!\n\nThis is a web-based operating system interface.",
            ),
            FsEntry::file(
                ".bashrc",
                "Mar 20, 2023",
                "128B",
                "# Bash configuration file\nalias ll='ls -la'\nalias cls='clear'",
            ),
        ],
    );

    MockFilesystem::new(vec![
        FsEntry::directory("home", "Jan 1, 2023", vec![user]),
        FsEntry::directory(
            "Applications",
            "Jan 1, 2023",
            vec![
                FsEntry::file("Web Browser.app", "Jan 1, 2023", "45 MB", "Browser application"),
                FsEntry::file("Notes.app", "Jan 1, 2023", "15 MB", "Notes application"),
                FsEntry::file("Terminal.app", "Jan 1, 2023", "8 MB", "Terminal application"),
            ],
        ),
        FsEntry::directory(
            "System",
            "Jan 1, 2023",
            vec![FsEntry::directory("Library", "Jan 1, 2023", Vec::new())],
        ),
        FsEntry::directory(
            "usr",
            "Jan 1, 2023",
            vec![
                FsEntry::directory("bin", "Jan 1, 2023", Vec::new()),
                FsEntry::directory("lib", "Jan 1, 2023", Vec::new()),
            ],
        ),
        FsEntry::directory(
            "etc",
            "Jan 1, 2023",
            vec![FsEntry::file(
                "hosts",
                "Jan 1, 2023",
                "32B",
                "127.0.0.1 localhost\n::1 localhost",
            )],
        ),
    ])
}

/// Appends saved desktop files to the Desktop directory, skipping names already present.
///
/// Returns the number of files grafted.
pub fn graft_desktop_files(fs: &mut MockFilesystem, files: &[DesktopFile]) -> usize {
    let Some(children) = fs.children_mut(DESKTOP_DIR_PATH) else {
        return 0;
    };
    let mut grafted = 0;
    for file in files {
        if children.iter().any(|entry| entry.name == file.name) {
            continue;
        }
        children.push(FsEntry::file(
            &file.name,
            SAVED_FILE_MODIFIED,
            &file.display_size(),
            &file.content,
        ));
        grafted += 1;
    }
    grafted
}
