use desktop_app_contract::{OpenedDocument, Theme, WallpaperSelection};
use platform_host::DesktopFile;
use serde::{Deserialize, Serialize};

pub const MENU_BAR_HEIGHT_PX: i32 = 32;
pub const NOTIFICATION_TTL_MS: u64 = 5_000;
pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 200;
pub const DARK_MODE_BACKGROUND: &str = "#1a1a2e";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Finder,
    Files,
    Terminal,
    Notes,
    Calculator,
    Clock,
    Weather,
    #[serde(rename = "vscode")]
    VsCode,
    Wallpaper,
}

impl AppId {
    pub const ALL: [AppId; 9] = [
        Self::Finder,
        Self::Files,
        Self::Terminal,
        Self::Notes,
        Self::Calculator,
        Self::Clock,
        Self::Weather,
        Self::VsCode,
        Self::Wallpaper,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Files => "files",
            Self::Terminal => "terminal",
            Self::Notes => "notes",
            Self::Calculator => "calculator",
            Self::Clock => "clock",
            Self::Weather => "weather",
            Self::VsCode => "vscode",
            Self::Wallpaper => "wallpaper",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.token() == token)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInstance {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub created_at_ms: u64,
}

impl Notification {
    pub fn expires_at_ms(&self) -> u64 {
        self.created_at_ms.saturating_add(NOTIFICATION_TTL_MS)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    pub spotlight: bool,
    pub mission_control: bool,
    pub notification_center: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn delta_from(self, origin: PointerPosition) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Browser inner size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Rectangle a maximized window occupies: full width, height minus the menu bar.
    pub fn maximized_rect(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width,
            h: (self.height - MENU_BAR_HEIGHT_PX).max(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub open_apps: Vec<AppInstance>,
    pub active_app: Option<AppId>,
    /// Newest first.
    pub notifications: Vec<Notification>,
    pub last_notification_id: u64,
    pub theme: Theme,
    pub wallpaper: WallpaperSelection,
    /// Local hour (0..=23) of the last clock tick; drives dynamic wallpapers.
    pub current_hour: u32,
    pub overlays: OverlayState,
    pub desktop_files: Vec<DesktopFile>,
    pub opened_document: Option<OpenedDocument>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            open_apps: Vec::new(),
            active_app: None,
            notifications: Vec::new(),
            last_notification_id: 0,
            theme: Theme::Light,
            wallpaper: WallpaperSelection::default(),
            current_hour: 9,
            overlays: OverlayState::default(),
            desktop_files: Vec::new(),
            opened_document: None,
        }
    }
}

impl DesktopState {
    pub fn instance(&self, id: AppId) -> Option<&AppInstance> {
        self.open_apps.iter().find(|app| app.id == id)
    }

    pub fn is_open(&self, id: AppId) -> bool {
        self.instance(id).is_some()
    }

    pub fn is_active(&self, id: AppId) -> bool {
        self.active_app == Some(id)
    }

    /// Open instances that are not minimized, in open order.
    pub fn visible_apps(&self) -> Vec<AppInstance> {
        self.open_apps
            .iter()
            .filter(|app| !app.minimized)
            .cloned()
            .collect()
    }

    pub(crate) fn first_visible_app(&self) -> Option<AppId> {
        self.open_apps
            .iter()
            .find(|app| !app.minimized)
            .map(|app| app.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_id_tokens_round_trip_through_serde() {
        for id in AppId::ALL {
            let json = serde_json::to_string(&id).expect("serialize");
            assert_eq!(json, format!("\"{}\"", id.token()));
            assert_eq!(AppId::from_token(id.token()), Some(id));
        }
        assert_eq!(AppId::from_token("paint"), None);
    }

    #[test]
    fn maximized_rect_reserves_menu_bar() {
        let viewport = Viewport {
            width: 1280,
            height: 800,
        };
        assert_eq!(
            viewport.maximized_rect(),
            WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 768,
            }
        );
    }

    #[test]
    fn notification_expires_at_ttl_boundary() {
        let notification = Notification {
            id: NotificationId(1_000),
            title: "System".to_string(),
            message: "hi".to_string(),
            created_at_ms: 1_000,
        };
        assert!(!notification.is_expired(5_999));
        assert!(notification.is_expired(6_000));
    }
}
