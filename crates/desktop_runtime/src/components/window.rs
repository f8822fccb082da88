use desktop_app_contract::AppMountContext;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use platform_host::random_unit;

use super::*;
use crate::{
    apps,
    window_manager::{ListenerIntent, WindowFrame, WindowInput},
};

const ACTIVE_Z_INDEX: u32 = 10;
const INACTIVE_Z_INDEX: u32 = 5;

/// Geometry signal plus the document pointer listeners held during a gesture.
#[derive(Clone, Copy)]
struct WindowGeometry {
    frame: RwSignal<WindowFrame>,
    listeners: StoredValue<Vec<WindowListenerHandle>>,
}

impl WindowGeometry {
    fn new() -> Self {
        let defaults = apps::window_defaults();
        Self {
            frame: create_rw_signal(WindowFrame::with_random_offset(
                defaults.width,
                defaults.height,
                random_unit(),
                random_unit(),
            )),
            listeners: store_value(Vec::new()),
        }
    }

    fn apply(self, input: WindowInput) {
        let Some(outcome) = self.frame.try_update(|frame| frame.apply(input)) else {
            return;
        };
        match outcome.listeners {
            ListenerIntent::Acquire => self.acquire_listeners(),
            ListenerIntent::Release => self.release_listeners(),
            ListenerIntent::Keep => {}
        }
    }

    fn acquire_listeners(self) {
        self.release_listeners();
        let on_move = window_event_listener(ev::pointermove, move |ev| {
            self.apply(WindowInput::PointerMove(pointer_from_pointer_event(&ev)));
        });
        let on_up = window_event_listener(ev::pointerup, move |_| {
            self.apply(WindowInput::PointerUp);
        });
        self.listeners.update_value(|held| {
            held.push(on_move);
            held.push(on_up);
        });
    }

    fn release_listeners(self) {
        self.listeners.try_update_value(|held| {
            for handle in held.drain(..) {
                handle.remove();
            }
        });
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    ev.button() == 0 && ev.is_primary()
}

fn pressed_on_control(ev: &web_sys::PointerEvent) -> bool {
    event_target::<web_sys::Element>(ev)
        .closest(".window-control")
        .ok()
        .flatten()
        .is_some()
}

#[component]
pub(super) fn DesktopWindow(id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let geometry = WindowGeometry::new();
    let frame = geometry.frame;

    on_cleanup(move || geometry.apply(WindowInput::Unmount));

    let instance = Signal::derive(move || state.with(|desktop| desktop.instance(id).cloned()));
    let is_active = Signal::derive(move || state.with(|desktop| desktop.is_active(id)));
    let title = move || instance.get().map(|app| app.title).unwrap_or_default();
    let icon = move || instance.get().map(|app| app.icon).unwrap_or_default();

    let toggle_maximize = move || {
        let viewport = runtime.host.get_value().viewport();
        geometry.apply(WindowInput::ToggleMaximize(viewport));
    };

    let contents = apps::render_app(
        id,
        AppMountContext {
            app_id: id.token(),
            services: runtime.app_services(),
        },
    );

    view! {
        <section
            class="desktop-window"
            class:active=is_active
            class:maximized=move || frame.with(|f| f.maximized)
            style=move || {
                let z_index = if is_active.get() { ACTIVE_Z_INDEX } else { INACTIVE_Z_INDEX };
                frame.with(|f| f.style(z_index))
            }
            role="dialog"
            aria-label=title
            on:pointerdown=move |_| {
                if !is_active.get_untracked() {
                    runtime.dispatch_action(DesktopAction::ActivateApp { id });
                }
            }
        >
            <header
                class="titlebar"
                on:pointerdown=move |ev: web_sys::PointerEvent| {
                    if !is_primary_press(&ev) {
                        return;
                    }
                    let on_control = pressed_on_control(&ev);
                    if !on_control {
                        ev.prevent_default();
                    }
                    geometry.apply(WindowInput::TitleBarDown {
                        pointer: pointer_from_pointer_event(&ev),
                        on_control,
                    });
                }
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-controls">
                    <WindowControl
                        class="close"
                        label="Close window"
                        on_press=Callback::new(move |_| runtime.dispatch_action(DesktopAction::CloseApp { id }))
                    />
                    <WindowControl
                        class="minimize"
                        label="Minimize window"
                        on_press=Callback::new(move |_| runtime.dispatch_action(DesktopAction::MinimizeApp { id }))
                    />
                    <WindowControl
                        class="maximize"
                        label="Maximize window"
                        on_press=Callback::new(move |_| toggle_maximize())
                    />
                </div>
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">{icon}</span>
                    <span>{title}</span>
                </div>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=move || frame.with(|f| f.resize_handle_visible()) fallback=|| ()>
                <div
                    class="window-resize-handle"
                    aria-hidden="true"
                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                        if !is_primary_press(&ev) {
                            return;
                        }
                        ev.prevent_default();
                        ev.stop_propagation();
                        if !is_active.get_untracked() {
                            runtime.dispatch_action(DesktopAction::ActivateApp { id });
                        }
                        geometry.apply(WindowInput::ResizeHandleDown(pointer_from_pointer_event(&ev)));
                    }
                />
            </Show>
        </section>
    }
}

/// Traffic-light button. The press still bubbles to the window so it activates it.
#[component]
fn WindowControl(class: &'static str, label: &'static str, on_press: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("window-control {class}")
            aria-label=label
            on:dblclick=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                on_press.call(());
            }
        />
    }
}
