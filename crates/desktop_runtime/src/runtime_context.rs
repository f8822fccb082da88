//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the shared clock
//! signal, and the bridge that turns app commands into reducer actions. UI composition stays in
//! [`crate::components`].

use desktop_app_contract::{AppCommand, AppServiceSignals, AppServices};
use leptos::*;
use platform_host::{local_clock_now, next_monotonic_timestamp_ms, LocalClock};

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Wall clock refreshed every second.
    pub clock: RwSignal<LocalClock>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Builds the service bundle handed to mounted apps.
    pub fn app_services(&self) -> AppServices {
        let runtime = *self;
        let state = self.state;
        let sender = Callback::new(move |command: AppCommand| {
            runtime.dispatch_action(command_action(command, next_monotonic_timestamp_ms()));
        });
        let host = self.host.get_value();
        AppServices::new(
            sender,
            AppServiceSignals {
                theme: Signal::derive(move || state.with(|s| s.theme)),
                desktop_files: Signal::derive(move || state.with(|s| s.desktop_files.clone())),
                wallpaper: Signal::derive(move || state.with(|s| s.wallpaper.clone())),
                opened_document: Signal::derive(move || {
                    state.with(|s| s.opened_document.clone())
                }),
            },
            host.local_store(),
            host.session_store(),
        )
    }
}

/// Maps an app request to the reducer action that fulfils it.
pub fn command_action(command: AppCommand, at_ms: u64) -> DesktopAction {
    match command {
        AppCommand::Notify { title, message } => DesktopAction::Notify {
            title,
            message,
            at_ms,
        },
        AppCommand::SaveToDesktop { name, content } => DesktopAction::SaveNoteToDesktop {
            name,
            content,
            at_ms,
        },
        AppCommand::DeleteDesktopFile { id } => DesktopAction::DeleteDesktopFile { id },
        AppCommand::OpenFile { name, content } => DesktopAction::OpenFile {
            name,
            content,
            at_ms,
        },
        AppCommand::SetWallpaper(selection) => DesktopAction::SetWallpaper { selection, at_ms },
        AppCommand::OpenExternalUrl { url } => DesktopAction::OpenExternalUrl { url },
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Host bundle assembled by the entry layer; defaults to browser storage.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host.unwrap_or_default());
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let clock = create_rw_signal(local_clock_now());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        clock,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    runtime.host.get_value().install_boot_hydration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::WallpaperSelection;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_commands_map_to_timestamped_actions() {
        assert_eq!(
            command_action(
                AppCommand::SaveToDesktop {
                    name: "a.txt".to_string(),
                    content: "x".to_string(),
                },
                42,
            ),
            DesktopAction::SaveNoteToDesktop {
                name: "a.txt".to_string(),
                content: "x".to_string(),
                at_ms: 42,
            }
        );
        assert_eq!(
            command_action(
                AppCommand::SetWallpaper(WallpaperSelection::fixed("#121212")),
                7,
            ),
            DesktopAction::SetWallpaper {
                selection: WallpaperSelection::fixed("#121212"),
                at_ms: 7,
            }
        );
        assert_eq!(
            command_action(
                AppCommand::DeleteDesktopFile {
                    id: "9".to_string()
                },
                1
            ),
            DesktopAction::DeleteDesktopFile {
                id: "9".to_string()
            }
        );
    }
}
