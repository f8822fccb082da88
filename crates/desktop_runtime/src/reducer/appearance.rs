//! Reducer helpers for theme, wallpaper, and clock-tick transitions.

use crate::{
    model::DesktopState,
    reducer::{push_notification, DesktopAction, ReducerError, RuntimeEffect},
};

pub(super) fn reduce_appearance_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, ReducerError> {
    match action {
        DesktopAction::ToggleTheme { at_ms } => {
            state.theme = state.theme.toggled();
            effects.push(RuntimeEffect::ApplyThemeClass(state.theme));
            let message = format!("Switched to {} mode", state.theme.as_str());
            effects.push(push_notification(
                state,
                "System".to_string(),
                message,
                *at_ms,
            ));
        }
        DesktopAction::SetWallpaper { selection, at_ms } => {
            state.wallpaper = selection.clone();
            effects.push(push_notification(
                state,
                "System".to_string(),
                "Wallpaper changed successfully".to_string(),
                *at_ms,
            ));
        }
        DesktopAction::ClockTick { now_ms, hour } => {
            state.current_hour = (*hour).min(23);
            state.notifications.retain(|n| !n.is_expired(*now_ms));
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{Theme, WallpaperSelection};
    use pretty_assertions::assert_eq;

    use crate::reducer::reduce_desktop;

    use super::*;

    #[test]
    fn toggle_theme_flips_and_announces_new_mode() {
        let mut state = DesktopState::default();
        let effects =
            reduce_desktop(&mut state, DesktopAction::ToggleTheme { at_ms: 1 }).expect("toggle");

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(effects[0], RuntimeEffect::ApplyThemeClass(Theme::Dark));
        assert_eq!(state.notifications[0].title, "System");
        assert_eq!(state.notifications[0].message, "Switched to dark mode");

        reduce_desktop(&mut state, DesktopAction::ToggleTheme { at_ms: 2 }).expect("toggle");
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.notifications[0].message, "Switched to light mode");
    }

    #[test]
    fn set_wallpaper_stores_selection_and_notifies() {
        let mut state = DesktopState::default();
        let selection = WallpaperSelection {
            value: "#121212".to_string(),
            is_dynamic: false,
        };
        reduce_desktop(
            &mut state,
            DesktopAction::SetWallpaper {
                selection: selection.clone(),
                at_ms: 3,
            },
        )
        .expect("set wallpaper");

        assert_eq!(state.wallpaper, selection);
        assert_eq!(
            state.notifications[0].message,
            "Wallpaper changed successfully"
        );
    }

    #[test]
    fn clock_tick_records_hour() {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::ClockTick {
                now_ms: 0,
                hour: 19,
            },
        )
        .expect("tick");
        assert_eq!(state.current_hour, 19);
    }
}
