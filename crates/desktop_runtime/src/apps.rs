//! Application catalog and the mount registry that renders app window contents.

use std::sync::OnceLock;

use desktop_app_contract::{AppModule, AppMountContext};
use leptos::View;
use serde::Deserialize;

use crate::{model::AppId, reducer::DesktopAction};

mod clock;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Default size of a freshly opened window.
pub struct WindowDefaults {
    /// Width in CSS pixels.
    pub width: i32,
    /// Height in CSS pixels.
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One launchable application.
pub struct CatalogEntry {
    /// Application id.
    pub id: AppId,
    /// Window and dock title.
    pub title: String,
    /// Emoji glyph shown in the dock, title bar, and Spotlight.
    pub icon: String,
    /// Extra Spotlight search terms.
    pub keywords: Vec<String>,
}

impl CatalogEntry {
    /// Case-insensitive substring match on the title or any keyword.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&needle))
    }

    /// Builds the reducer action that opens this app.
    pub fn open_action(&self) -> DesktopAction {
        DesktopAction::OpenApp {
            id: self.id,
            title: self.title.clone(),
            icon: self.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppCatalog {
    window_defaults: WindowDefaults,
    apps: Vec<CatalogEntry>,
}

fn catalog() -> &'static AppCatalog {
    static CATALOG: OnceLock<AppCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_CATALOG_JSON).expect("generated app catalog should parse")
    })
}

/// Catalog entries in dock order.
pub fn catalog_entries() -> &'static [CatalogEntry] {
    &catalog().apps
}

/// Returns the catalog entry for `id`.
///
/// # Panics
///
/// Panics only if the build-validated catalog lacks `id`.
pub fn catalog_entry(id: AppId) -> &'static CatalogEntry {
    catalog_entries()
        .iter()
        .find(|entry| entry.id == id)
        .expect("catalog entry exists")
}

/// Default window size from the catalog.
pub fn window_defaults() -> &'static WindowDefaults {
    &catalog().window_defaults
}

/// Returns the mount descriptor for an app's window contents.
pub fn app_module(id: AppId) -> AppModule {
    match id {
        AppId::Finder => AppModule::new(desktop_app_finder::mount_finder),
        AppId::Files => AppModule::new(desktop_app_finder::mount_files),
        AppId::Terminal => AppModule::new(desktop_app_terminal::mount),
        AppId::Notes => AppModule::new(desktop_app_notes::mount),
        AppId::Calculator => AppModule::new(desktop_app_calculator::mount),
        AppId::Clock => AppModule::new(clock::mount),
        AppId::Weather => AppModule::new(desktop_app_weather::mount),
        AppId::VsCode => AppModule::new(desktop_app_code_viewer::mount),
        AppId::Wallpaper => AppModule::new(desktop_app_wallpaper_picker::mount),
    }
}

/// Mounts the window contents for `context.app_id`.
pub fn render_app(id: AppId, context: AppMountContext) -> View {
    app_module(id).mount(context)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_lists_every_app_in_dock_order() {
        let ids: Vec<AppId> = catalog_entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
        assert_eq!(
            *window_defaults(),
            WindowDefaults {
                width: 600,
                height: 400,
            }
        );
    }

    #[test]
    fn entries_match_title_and_keywords_case_insensitively() {
        let terminal = catalog_entry(AppId::Terminal);
        assert!(terminal.matches("TERM"));
        assert!(terminal.matches("bash"));
        assert!(terminal.matches("   "));
        assert!(!terminal.matches("wallpaper"));
    }

    #[test]
    fn open_action_carries_catalog_title_and_icon() {
        let notes = catalog_entry(AppId::Notes);
        assert_eq!(
            notes.open_action(),
            DesktopAction::OpenApp {
                id: AppId::Notes,
                title: "Notes".to_string(),
                icon: notes.icon.clone(),
            }
        );
    }
}
