//! Global keyboard shortcuts.

use crate::reducer::DesktopAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Key event fields the shortcut table inspects.
pub struct KeyChord<'a> {
    /// `KeyboardEvent.key`.
    pub key: &'a str,
    /// `KeyboardEvent.code`.
    pub code: &'a str,
    /// Control held.
    pub ctrl: bool,
    /// Meta/Command held.
    pub meta: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// A matched shortcut.
pub struct ShortcutMatch {
    /// Action to dispatch.
    pub action: DesktopAction,
    /// Whether the browser default must be suppressed.
    pub prevent_default: bool,
}

/// Maps a key chord to a shell action.
///
/// Ctrl/⌘+Space toggles Spotlight, F3 or Ctrl/⌘+ArrowUp toggles Mission Control, and Escape
/// closes both overlays.
pub fn match_shortcut(chord: KeyChord<'_>) -> Option<ShortcutMatch> {
    let command = chord.ctrl || chord.meta;
    if command && chord.code == "Space" {
        return Some(ShortcutMatch {
            action: DesktopAction::ToggleSpotlight,
            prevent_default: true,
        });
    }
    if chord.key == "F3" || (command && chord.key == "ArrowUp") {
        return Some(ShortcutMatch {
            action: DesktopAction::ToggleMissionControl,
            prevent_default: true,
        });
    }
    if chord.key == "Escape" {
        return Some(ShortcutMatch {
            action: DesktopAction::CloseTransientOverlays,
            prevent_default: false,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn action(chord: KeyChord<'_>) -> Option<DesktopAction> {
        match_shortcut(chord).map(|m| m.action)
    }

    #[test]
    fn spotlight_needs_modifier_and_space() {
        let chord = KeyChord {
            key: " ",
            code: "Space",
            ctrl: true,
            ..KeyChord::default()
        };
        assert_eq!(action(chord), Some(DesktopAction::ToggleSpotlight));
        assert_eq!(
            action(KeyChord {
                meta: true,
                ctrl: false,
                ..chord
            }),
            Some(DesktopAction::ToggleSpotlight)
        );
        assert_eq!(
            action(KeyChord {
                ctrl: false,
                ..chord
            }),
            None
        );
    }

    #[test]
    fn mission_control_via_f3_or_modifier_arrow_up() {
        assert_eq!(
            action(KeyChord {
                key: "F3",
                code: "F3",
                ..KeyChord::default()
            }),
            Some(DesktopAction::ToggleMissionControl)
        );
        assert_eq!(
            action(KeyChord {
                key: "ArrowUp",
                code: "ArrowUp",
                meta: true,
                ..KeyChord::default()
            }),
            Some(DesktopAction::ToggleMissionControl)
        );
        assert_eq!(
            action(KeyChord {
                key: "ArrowUp",
                code: "ArrowUp",
                ..KeyChord::default()
            }),
            None
        );
    }

    #[test]
    fn escape_closes_overlays_without_preventing_default() {
        let matched = match_shortcut(KeyChord {
            key: "Escape",
            code: "Escape",
            ..KeyChord::default()
        })
        .expect("escape matches");
        assert_eq!(matched.action, DesktopAction::CloseTransientOverlays);
        assert!(!matched.prevent_default);
    }
}
