//! Reducer actions, side-effect intents, and transition logic for the desktop session.

mod appearance;

use desktop_app_contract::{OpenedDocument, Theme, WallpaperSelection};
use platform_host::DesktopFile;
use thiserror::Error;

use crate::model::{
    AppId, AppInstance, DesktopState, Notification, NotificationId, NOTIFICATION_TTL_MS,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or un-minimize it when already open, and make it active.
    OpenApp {
        /// App to open.
        id: AppId,
        /// Window title.
        title: String,
        /// Dock/title-bar glyph.
        icon: String,
    },
    /// Close an open app.
    CloseApp {
        /// App to close.
        id: AppId,
    },
    /// Minimize an open app.
    MinimizeApp {
        /// App to minimize.
        id: AppId,
    },
    /// Make an open, non-minimized app active.
    ActivateApp {
        /// App to activate.
        id: AppId,
    },
    /// Post a notification.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        message: String,
        /// Creation time (unix ms).
        at_ms: u64,
    },
    /// Remove a notification whose lifetime elapsed.
    ExpireNotification {
        /// Notification to remove.
        id: NotificationId,
    },
    /// One-second clock tick: prunes expired notifications and refreshes the hour.
    ClockTick {
        /// Current time (unix ms).
        now_ms: u64,
        /// Current local hour.
        hour: u32,
    },
    /// Flip between light and dark themes.
    ToggleTheme {
        /// Time used for the confirmation notification.
        at_ms: u64,
    },
    /// Change the wallpaper.
    SetWallpaper {
        /// New selection.
        selection: WallpaperSelection,
        /// Time used for the confirmation notification.
        at_ms: u64,
    },
    /// Toggle Spotlight.
    ToggleSpotlight,
    /// Hide Spotlight.
    CloseSpotlight,
    /// Toggle Mission Control.
    ToggleMissionControl,
    /// Hide Mission Control.
    CloseMissionControl,
    /// Toggle the notification center panel.
    ToggleNotificationCenter,
    /// Hide the notification center panel.
    CloseNotificationCenter,
    /// Hide Spotlight and Mission Control (Escape).
    CloseTransientOverlays,
    /// Save text as a new desktop file.
    SaveNoteToDesktop {
        /// File name.
        name: String,
        /// File content.
        content: String,
        /// Creation time (unix ms); also the file id.
        at_ms: u64,
    },
    /// Delete a desktop file by id.
    DeleteDesktopFile {
        /// File id.
        id: String,
    },
    /// Open a file in Notes.
    OpenFile {
        /// File name.
        name: String,
        /// File content.
        content: String,
        /// Time used for the confirmation notification.
        at_ms: u64,
    },
    /// Open a URL outside the simulated desktop.
    OpenExternalUrl {
        /// Absolute URL.
        url: String,
    },
    /// Replace desktop files with the persisted collection at boot.
    HydrateDesktopFiles {
        /// Persisted files.
        files: Vec<DesktopFile>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Remove the notification after `delay_ms`.
    ScheduleNotificationExpiry {
        /// Notification to expire.
        id: NotificationId,
        /// Delay before expiry.
        delay_ms: u64,
    },
    /// Write the desktop file collection to durable storage.
    PersistDesktopFiles,
    /// Mirror the theme onto the document root.
    ApplyThemeClass(Theme),
    /// Open a URL in a new browsing context.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that would break session invariants.
pub enum ReducerError {
    /// The target app has no open instance.
    #[error("app `{0}` is not open")]
    AppNotOpen(AppId),
    /// The target app is minimized and cannot become active.
    #[error("app `{0}` is minimized")]
    AppMinimized(AppId),
    /// No desktop file has the given id.
    #[error("desktop file `{0}` not found")]
    DesktopFileNotFound(String),
}

/// Applies a [`DesktopAction`] to the session state and collects resulting side effects.
///
/// On error the state is left untouched.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references an app that is not open, activates a
/// minimized app, or deletes an unknown desktop file.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if appearance::reduce_appearance_action(state, &action, &mut effects)? {
        return Ok(effects);
    }

    match action {
        DesktopAction::OpenApp { id, title, icon } => open_app(state, id, title, icon),
        DesktopAction::CloseApp { id } => {
            let index = instance_index(state, id)?;
            state.open_apps.remove(index);
            if state.active_app == Some(id) {
                state.active_app = state.first_visible_app();
            }
        }
        DesktopAction::MinimizeApp { id } => {
            let index = instance_index(state, id)?;
            state.open_apps[index].minimized = true;
            if state.active_app == Some(id) {
                state.active_app = state.first_visible_app();
            }
        }
        DesktopAction::ActivateApp { id } => {
            let index = instance_index(state, id)?;
            if state.open_apps[index].minimized {
                return Err(ReducerError::AppMinimized(id));
            }
            state.active_app = Some(id);
        }
        DesktopAction::Notify {
            title,
            message,
            at_ms,
        } => effects.push(push_notification(state, title, message, at_ms)),
        DesktopAction::ExpireNotification { id } => {
            state.notifications.retain(|n| n.id != id);
        }
        DesktopAction::ToggleSpotlight => {
            state.overlays.spotlight = !state.overlays.spotlight;
        }
        DesktopAction::CloseSpotlight => state.overlays.spotlight = false,
        DesktopAction::ToggleMissionControl => {
            state.overlays.mission_control = !state.overlays.mission_control;
        }
        DesktopAction::CloseMissionControl => state.overlays.mission_control = false,
        DesktopAction::ToggleNotificationCenter => {
            state.overlays.notification_center = !state.overlays.notification_center;
        }
        DesktopAction::CloseNotificationCenter => state.overlays.notification_center = false,
        DesktopAction::CloseTransientOverlays => {
            state.overlays.spotlight = false;
            state.overlays.mission_control = false;
        }
        DesktopAction::SaveNoteToDesktop {
            name,
            content,
            at_ms,
        } => {
            let id = unique_file_id(&state.desktop_files, at_ms);
            let message = format!("Saved {name} to Desktop");
            state.desktop_files.push(DesktopFile { id, name, content });
            effects.push(RuntimeEffect::PersistDesktopFiles);
            effects.push(push_notification(state, "Notes".to_string(), message, at_ms));
        }
        DesktopAction::DeleteDesktopFile { id } => {
            let before = state.desktop_files.len();
            state.desktop_files.retain(|file| file.id != id);
            if state.desktop_files.len() == before {
                return Err(ReducerError::DesktopFileNotFound(id));
            }
            effects.push(RuntimeEffect::PersistDesktopFiles);
        }
        DesktopAction::OpenFile {
            name,
            content,
            at_ms,
        } => {
            let revision = state
                .opened_document
                .as_ref()
                .map_or(1, |doc| doc.revision + 1);
            let message = format!("Opened {name}");
            state.opened_document = Some(OpenedDocument {
                name,
                content,
                revision,
            });
            let notes = crate::apps::catalog_entry(AppId::Notes);
            open_app(
                state,
                AppId::Notes,
                notes.title.clone(),
                notes.icon.clone(),
            );
            effects.push(push_notification(
                state,
                "Finder".to_string(),
                message,
                at_ms,
            ));
        }
        DesktopAction::OpenExternalUrl { url } => effects.push(RuntimeEffect::OpenExternalUrl(url)),
        DesktopAction::HydrateDesktopFiles { files } => {
            state.desktop_files = files;
        }
        DesktopAction::ClockTick { .. }
        | DesktopAction::ToggleTheme { .. }
        | DesktopAction::SetWallpaper { .. } => {}
    }

    Ok(effects)
}

fn open_app(state: &mut DesktopState, id: AppId, title: String, icon: String) {
    match state.open_apps.iter_mut().find(|app| app.id == id) {
        Some(existing) => existing.minimized = false,
        None => state.open_apps.push(AppInstance {
            id,
            title,
            icon,
            minimized: false,
        }),
    }
    state.active_app = Some(id);
}

fn instance_index(state: &DesktopState, id: AppId) -> Result<usize, ReducerError> {
    state
        .open_apps
        .iter()
        .position(|app| app.id == id)
        .ok_or(ReducerError::AppNotOpen(id))
}

/// Prepends a notification with a fresh id and returns its expiry effect.
pub(crate) fn push_notification(
    state: &mut DesktopState,
    title: String,
    message: String,
    at_ms: u64,
) -> RuntimeEffect {
    let id = at_ms.max(state.last_notification_id.saturating_add(1));
    state.last_notification_id = id;
    let id = NotificationId(id);
    state.notifications.insert(
        0,
        Notification {
            id,
            title,
            message,
            created_at_ms: at_ms,
        },
    );
    RuntimeEffect::ScheduleNotificationExpiry {
        id,
        delay_ms: NOTIFICATION_TTL_MS,
    }
}

fn unique_file_id(files: &[DesktopFile], at_ms: u64) -> String {
    let mut candidate = at_ms;
    while files.iter().any(|file| file.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open(state: &mut DesktopState, id: AppId) {
        reduce_desktop(
            state,
            DesktopAction::OpenApp {
                id,
                title: id.token().to_string(),
                icon: "*".to_string(),
            },
        )
        .expect("open app");
    }

    fn ids(state: &DesktopState) -> Vec<AppId> {
        state.open_apps.iter().map(|app| app.id).collect()
    }

    #[test]
    fn opening_same_app_twice_keeps_one_instance() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Notes);
        open(&mut state, AppId::Notes);

        assert_eq!(ids(&state), vec![AppId::Notes]);
        assert_eq!(state.active_app, Some(AppId::Notes));
    }

    #[test]
    fn reopening_minimized_app_restores_and_activates_it() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Notes);
        open(&mut state, AppId::Terminal);
        reduce_desktop(&mut state, DesktopAction::MinimizeApp { id: AppId::Notes })
            .expect("minimize");
        open(&mut state, AppId::Notes);

        assert!(!state.instance(AppId::Notes).expect("notes").minimized);
        assert_eq!(state.active_app, Some(AppId::Notes));
        assert_eq!(ids(&state), vec![AppId::Notes, AppId::Terminal]);
    }

    #[test]
    fn closing_only_instance_clears_active_pointer() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Clock);
        reduce_desktop(&mut state, DesktopAction::CloseApp { id: AppId::Clock }).expect("close");

        assert!(state.open_apps.is_empty());
        assert_eq!(state.active_app, None);
    }

    #[test]
    fn closing_active_app_moves_pointer_to_first_visible_instance() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Finder);
        open(&mut state, AppId::Notes);
        open(&mut state, AppId::Weather);
        reduce_desktop(&mut state, DesktopAction::MinimizeApp { id: AppId::Finder })
            .expect("minimize");
        reduce_desktop(&mut state, DesktopAction::ActivateApp { id: AppId::Weather })
            .expect("activate");
        reduce_desktop(&mut state, DesktopAction::CloseApp { id: AppId::Weather })
            .expect("close");

        assert_eq!(state.active_app, Some(AppId::Notes));
    }

    #[test]
    fn closing_inactive_app_keeps_pointer() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Finder);
        open(&mut state, AppId::Notes);
        reduce_desktop(&mut state, DesktopAction::CloseApp { id: AppId::Finder }).expect("close");

        assert_eq!(state.active_app, Some(AppId::Notes));
    }

    #[test]
    fn minimizing_active_app_never_leaves_pointer_on_minimized_instance() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Finder);
        open(&mut state, AppId::Notes);
        reduce_desktop(&mut state, DesktopAction::MinimizeApp { id: AppId::Finder })
            .expect("minimize finder");
        reduce_desktop(&mut state, DesktopAction::MinimizeApp { id: AppId::Notes })
            .expect("minimize notes");
        assert_eq!(state.active_app, None);

        open(&mut state, AppId::Terminal);
        open(&mut state, AppId::Clock);
        reduce_desktop(&mut state, DesktopAction::MinimizeApp { id: AppId::Clock })
            .expect("minimize clock");
        assert_eq!(state.active_app, Some(AppId::Terminal));
    }

    #[test]
    fn lifecycle_actions_on_unknown_or_minimized_apps_fail_without_mutation() {
        let mut state = DesktopState::default();
        open(&mut state, AppId::Notes);
        reduce_desktop(&mut state, DesktopAction::MinimizeApp { id: AppId::Notes })
            .expect("minimize");
        let before = state.clone();

        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::CloseApp { id: AppId::Clock }),
            Err(ReducerError::AppNotOpen(AppId::Clock))
        );
        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::ActivateApp { id: AppId::Notes }),
            Err(ReducerError::AppMinimized(AppId::Notes))
        );
        assert_eq!(state, before);
        assert_eq!(
            ReducerError::AppNotOpen(AppId::VsCode).to_string(),
            "app `vscode` is not open"
        );
    }

    #[test]
    fn notifications_are_prepended_with_unique_ids_and_expiry_effects() {
        let mut state = DesktopState::default();
        let first = reduce_desktop(
            &mut state,
            DesktopAction::Notify {
                title: "A".to_string(),
                message: "one".to_string(),
                at_ms: 1_000,
            },
        )
        .expect("notify");
        reduce_desktop(
            &mut state,
            DesktopAction::Notify {
                title: "B".to_string(),
                message: "two".to_string(),
                at_ms: 1_000,
            },
        )
        .expect("notify");

        assert_eq!(
            first,
            vec![RuntimeEffect::ScheduleNotificationExpiry {
                id: NotificationId(1_000),
                delay_ms: 5_000,
            }]
        );
        let titles: Vec<&str> = state.notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(state.notifications[0].id, NotificationId(1_001));
    }

    #[test]
    fn notification_lives_four_seconds_and_is_gone_by_six() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::Notify {
                title: "System".to_string(),
                message: "hello".to_string(),
                at_ms: 10_000,
            },
        )
        .expect("notify");

        reduce_desktop(
            &mut state,
            DesktopAction::ClockTick {
                now_ms: 14_000,
                hour: 9,
            },
        )
        .expect("tick");
        assert_eq!(state.notifications.len(), 1);

        reduce_desktop(
            &mut state,
            DesktopAction::ClockTick {
                now_ms: 16_000,
                hour: 9,
            },
        )
        .expect("tick");
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn expire_notification_removes_only_that_entry() {
        let mut state = DesktopState::default();
        for at_ms in [1, 2] {
            reduce_desktop(
                &mut state,
                DesktopAction::Notify {
                    title: "T".to_string(),
                    message: "m".to_string(),
                    at_ms,
                },
            )
            .expect("notify");
        }
        reduce_desktop(
            &mut state,
            DesktopAction::ExpireNotification {
                id: NotificationId(1),
            },
        )
        .expect("expire");

        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, NotificationId(2));
    }

    #[test]
    fn notification_center_toggle_does_not_touch_notifications() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::Notify {
                title: "T".to_string(),
                message: "m".to_string(),
                at_ms: 5,
            },
        )
        .expect("notify");
        reduce_desktop(&mut state, DesktopAction::ToggleNotificationCenter).expect("toggle");
        assert!(state.overlays.notification_center);
        reduce_desktop(&mut state, DesktopAction::CloseNotificationCenter).expect("close");

        assert!(!state.overlays.notification_center);
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn escape_closes_spotlight_and_mission_control_only() {
        let mut state = DesktopState::default();
        reduce_desktop(&mut state, DesktopAction::ToggleSpotlight).expect("spotlight");
        reduce_desktop(&mut state, DesktopAction::ToggleMissionControl).expect("mission");
        reduce_desktop(&mut state, DesktopAction::ToggleNotificationCenter).expect("center");
        reduce_desktop(&mut state, DesktopAction::CloseTransientOverlays).expect("escape");

        assert!(!state.overlays.spotlight);
        assert!(!state.overlays.mission_control);
        assert!(state.overlays.notification_center);
    }

    #[test]
    fn saving_note_appends_file_persists_and_notifies() {
        let mut state = DesktopState::default();
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::SaveNoteToDesktop {
                name: "todo.txt".to_string(),
                content: "milk".to_string(),
                at_ms: 42,
            },
        )
        .expect("save");

        assert_eq!(
            state.desktop_files,
            vec![DesktopFile {
                id: "42".to_string(),
                name: "todo.txt".to_string(),
                content: "milk".to_string(),
            }]
        );
        assert_eq!(effects[0], RuntimeEffect::PersistDesktopFiles);
        assert_eq!(state.notifications[0].title, "Notes");
        assert_eq!(state.notifications[0].message, "Saved todo.txt to Desktop");
    }

    #[test]
    fn saved_file_ids_stay_unique_within_one_millisecond() {
        let mut state = DesktopState::default();
        for name in ["a.txt", "b.txt"] {
            reduce_desktop(
                &mut state,
                DesktopAction::SaveNoteToDesktop {
                    name: name.to_string(),
                    content: String::new(),
                    at_ms: 7,
                },
            )
            .expect("save");
        }
        let ids: Vec<&str> = state.desktop_files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8"]);
    }

    #[test]
    fn deleting_unknown_desktop_file_is_an_error() {
        let mut state = DesktopState::default();
        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::DeleteDesktopFile {
                    id: "missing".to_string()
                }
            ),
            Err(ReducerError::DesktopFileNotFound("missing".to_string()))
        );
    }

    #[test]
    fn opening_file_hands_document_to_notes_and_notifies() {
        let mut state = DesktopState::default();
        for _ in 0..2 {
            reduce_desktop(
                &mut state,
                DesktopAction::OpenFile {
                    name: "readme.txt".to_string(),
                    content: "Welcome".to_string(),
                    at_ms: 100,
                },
            )
            .expect("open file");
        }

        assert_eq!(ids(&state), vec![AppId::Notes]);
        assert_eq!(state.active_app, Some(AppId::Notes));
        let doc = state.opened_document.as_ref().expect("document");
        assert_eq!(doc.content, "Welcome");
        assert_eq!(doc.revision, 2);
        assert_eq!(state.notifications[0].title, "Finder");
        assert_eq!(state.notifications[0].message, "Opened readme.txt");
    }

    #[test]
    fn external_url_is_forwarded_as_effect_only() {
        let mut state = DesktopState::default();
        let effects = reduce_desktop(
            &mut state,
            DesktopAction::OpenExternalUrl {
                url: "https://www.google.com/search?q=rust".to_string(),
            },
        )
        .expect("open url");

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://www.google.com/search?q=rust".to_string()
            )]
        );
        assert_eq!(state, DesktopState::default());
    }
}
