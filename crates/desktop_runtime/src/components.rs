//! Desktop shell UI composition and interaction surfaces.

mod desktop;
mod dock;
mod menubar;
mod overlays;
mod spotlight;
mod window;

use leptos::*;

use self::{
    desktop::DesktopSurface,
    dock::Dock,
    menubar::MenuBar,
    overlays::{MissionControl, NotificationCenter},
    spotlight::Spotlight,
    window::DesktopWindow,
};

use crate::{
    model::{AppId, PointerPosition},
    reducer::DesktopAction,
    shortcuts::{match_shortcut, KeyChord},
    wallpaper::resolve_background,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn toggle_theme(runtime: DesktopRuntimeContext) {
    runtime.dispatch_action(DesktopAction::ToggleTheme {
        at_ms: platform_host::next_monotonic_timestamp_ms(),
    });
}

#[component]
/// Renders the full desktop shell: menu bar, desktop surface, windows, dock, and overlays.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = runtime.clock;

    let background = Signal::derive(move || {
        let hour = clock.get().hour;
        state.with(|desktop| resolve_background(&desktop.wallpaper, desktop.theme, hour).css())
    });
    let is_dark = Signal::derive(move || state.with(|desktop| desktop.theme.is_dark()));
    let visible_windows = move || -> Vec<AppId> {
        state.with(|desktop| desktop.visible_apps().into_iter().map(|app| app.id).collect())
    };

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        let code = ev.code();
        let chord = KeyChord {
            key: &key,
            code: &code,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        };
        if let Some(shortcut) = match_shortcut(chord) {
            if shortcut.prevent_default {
                ev.prevent_default();
            }
            runtime.dispatch_action(shortcut.action);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:dark=is_dark
            style=background
        >
            <MenuBar />

            <DesktopSurface>
                <For each=visible_windows key=|id| *id let:id>
                    <DesktopWindow id=id />
                </For>
            </DesktopSurface>

            <Show when=move || state.with(|desktop| desktop.overlays.notification_center) fallback=|| ()>
                <NotificationCenter />
            </Show>
            <Show when=move || state.with(|desktop| desktop.overlays.spotlight) fallback=|| ()>
                <Spotlight />
            </Show>
            <Show when=move || state.with(|desktop| desktop.overlays.mission_control) fallback=|| ()>
                <MissionControl />
            </Show>

            <Dock />

            <button
                type="button"
                class="quick-theme-toggle"
                aria-label="Toggle theme"
                on:click=move |_| toggle_theme(runtime)
            >
                {move || if is_dark.get() { "☀️" } else { "🌙" }}
            </button>
        </div>
    }
}
