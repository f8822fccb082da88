//! Shared contract types between the desktop session runtime and the mock applications.
//!
//! Apps never touch desktop state directly. They receive an [`AppMountContext`] whose
//! [`AppServices`] expose read-only reactive views of the session (theme, desktop files,
//! wallpaper, the document handed over by Finder) and send [`AppCommand`] values back to the
//! runtime, which turns them into reducer actions.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, SignalGet, SignalGetUntracked, View};
use platform_host::{DesktopFile, KeyValueStore};
use serde::{Deserialize, Serialize};

/// Catalog image shown on first boot and after the current custom wallpaper is deleted.
pub const DEFAULT_WALLPAPER: &str = "/wallpapers/mojave-day.jpg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Desktop color scheme.
pub enum Theme {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Theme {
    /// Returns `true` for [`Theme::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns the opposite theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase token used in notifications and CSS classes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Current wallpaper choice: an image reference or a `#rrggbb` color.
pub struct WallpaperSelection {
    /// Image URL/path or hex color.
    pub value: String,
    /// Whether the catalog image follows the time of day.
    pub is_dynamic: bool,
}

impl WallpaperSelection {
    /// Builds a static (non-dynamic) selection.
    pub fn fixed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_dynamic: false,
        }
    }
}

impl Default for WallpaperSelection {
    fn default() -> Self {
        Self::fixed(DEFAULT_WALLPAPER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file handed to Notes by Finder or a desktop icon.
pub struct OpenedDocument {
    /// File name.
    pub name: String,
    /// Full text content.
    pub content: String,
    /// Increments on every hand-over so reopening the same file still reloads the editor.
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Requests an app sends to the desktop runtime.
pub enum AppCommand {
    /// Post a notification.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        message: String,
    },
    /// Save text as a new file on the Desktop.
    SaveToDesktop {
        /// File name.
        name: String,
        /// File content.
        content: String,
    },
    /// Delete a saved desktop file by id.
    DeleteDesktopFile {
        /// Desktop file id.
        id: String,
    },
    /// Open a file in Notes.
    OpenFile {
        /// File name.
        name: String,
        /// File content.
        content: String,
    },
    /// Change the wallpaper.
    SetWallpaper(WallpaperSelection),
    /// Open a URL in a new browsing context.
    OpenExternalUrl {
        /// Absolute URL.
        url: String,
    },
}

#[derive(Clone, Copy)]
/// Notification service routed through the session controller.
pub struct NotificationService {
    sender: Callback<AppCommand>,
}

impl NotificationService {
    /// Posts a notification.
    pub fn notify(&self, title: impl Into<String>, message: impl Into<String>) {
        self.sender.call(AppCommand::Notify {
            title: title.into(),
            message: message.into(),
        });
    }
}

#[derive(Clone, Copy)]
/// Saved desktop files and the operations apps may perform on them.
pub struct DesktopFilesService {
    sender: Callback<AppCommand>,
    /// Reactive list of saved desktop files in save order.
    pub files: Signal<Vec<DesktopFile>>,
}

impl DesktopFilesService {
    /// Saves `content` to the Desktop under `name`.
    pub fn save(&self, name: impl Into<String>, content: impl Into<String>) {
        self.sender.call(AppCommand::SaveToDesktop {
            name: name.into(),
            content: content.into(),
        });
    }

    /// Deletes the desktop file with `id`.
    pub fn delete(&self, id: impl Into<String>) {
        self.sender
            .call(AppCommand::DeleteDesktopFile { id: id.into() });
    }

    /// Opens a file in Notes.
    pub fn open(&self, name: impl Into<String>, content: impl Into<String>) {
        self.sender.call(AppCommand::OpenFile {
            name: name.into(),
            content: content.into(),
        });
    }

    /// Returns a snapshot of the saved files without tracking.
    pub fn snapshot(&self) -> Vec<DesktopFile> {
        self.files.get_untracked()
    }
}

#[derive(Clone, Copy)]
/// Wallpaper query and selection service.
pub struct WallpaperService {
    sender: Callback<AppCommand>,
    /// Reactive current selection.
    pub current: Signal<WallpaperSelection>,
}

impl WallpaperService {
    /// Applies a new selection.
    pub fn set(&self, selection: WallpaperSelection) {
        self.sender.call(AppCommand::SetWallpaper(selection));
    }

    /// Returns `true` when `value` is the current wallpaper.
    pub fn is_current(&self, value: &str) -> bool {
        self.current.get().value == value
    }
}

#[derive(Clone, Copy)]
/// External navigation service.
pub struct ExternalUrlService {
    sender: Callback<AppCommand>,
}

impl ExternalUrlService {
    /// Opens `url` in a new tab.
    pub fn open(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenExternalUrl { url: url.into() });
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Notification service.
    pub notifications: NotificationService,
    /// Desktop files service.
    pub desktop_files: DesktopFilesService,
    /// Wallpaper service.
    pub wallpaper: WallpaperService,
    /// External URL service.
    pub external_urls: ExternalUrlService,
    /// Reactive desktop theme.
    pub theme: Signal<Theme>,
    /// Last document handed to Notes.
    pub opened_document: Signal<Option<OpenedDocument>>,
    /// Durable browser storage.
    pub local_store: Rc<dyn KeyValueStore>,
    /// Tab-scoped browser storage.
    pub session_store: Rc<dyn KeyValueStore>,
}

/// Reactive inputs the runtime exposes to every app.
pub struct AppServiceSignals {
    /// Desktop theme.
    pub theme: Signal<Theme>,
    /// Saved desktop files.
    pub desktop_files: Signal<Vec<DesktopFile>>,
    /// Current wallpaper.
    pub wallpaper: Signal<WallpaperSelection>,
    /// Last document handed to Notes.
    pub opened_document: Signal<Option<OpenedDocument>>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(
        sender: Callback<AppCommand>,
        signals: AppServiceSignals,
        local_store: Rc<dyn KeyValueStore>,
        session_store: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            notifications: NotificationService { sender },
            desktop_files: DesktopFilesService {
                sender,
                files: signals.desktop_files,
            },
            wallpaper: WallpaperService {
                sender,
                current: signals.wallpaper,
            },
            external_urls: ExternalUrlService { sender },
            theme: signals.theme,
            opened_document: signals.opened_document,
            local_store,
            session_store,
        }
    }

    /// Returns `true` while the dark theme is active (tracked).
    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window.
pub struct AppMountContext {
    /// Catalog token of the mounted app (for example `"notes"`).
    pub app_id: &'static str,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_toggles_and_serializes_lowercase() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(
            serde_json::to_string(&Theme::Light).expect("serialize"),
            "\"light\""
        );
    }

    #[test]
    fn default_wallpaper_is_static_mojave_day() {
        assert_eq!(
            WallpaperSelection::default(),
            WallpaperSelection {
                value: "/wallpapers/mojave-day.jpg".to_string(),
                is_dynamic: false,
            }
        );
    }
}
