use platform_host::local_clock_at;

use super::*;

#[component]
pub(super) fn MissionControl() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let tiles = move || runtime.state.with(|desktop| desktop.visible_apps());
    let close = move || runtime.dispatch_action(DesktopAction::CloseMissionControl);

    view! {
        <div class="mission-control" on:click=move |_| close()>
            <button
                type="button"
                class="mission-control-close"
                aria-label="Close Mission Control"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                "✕"
            </button>
            <div class="mission-control-header">
                <h2>"Mission Control"</h2>
                <p>"All open applications"</p>
            </div>
            <Show
                when=move || !tiles().is_empty()
                fallback=|| view! { <p class="mission-control-empty">"No open applications"</p> }
            >
                <div class="mission-control-grid">
                    <For each=tiles key=|app| app.id let:app>
                        {{
                            let id = app.id;
                            view! {
                                <div
                                    class="mission-control-tile"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        runtime.dispatch_action(DesktopAction::ActivateApp { id });
                                        close();
                                    }
                                >
                                    <div class="mission-control-tile-bar">
                                        <span aria-hidden="true">{app.icon.clone()}</span>
                                        <span>{app.title.clone()}</span>
                                    </div>
                                    <div class="mission-control-tile-preview">
                                        <div class="mission-control-tile-icon">{app.icon}</div>
                                        <div>{app.title}</div>
                                    </div>
                                </div>
                            }
                        }}
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn NotificationCenter() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let notifications = move || runtime.state.with(|desktop| desktop.notifications.clone());

    view! {
        <aside
            class="notification-center"
            aria-label="Notifications"
            on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
        >
            <div class="notification-center-header">
                <h2>"Notifications"</h2>
                <button
                    type="button"
                    aria-label="Close notifications"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::CloseNotificationCenter)
                >
                    "✕"
                </button>
            </div>
            <Show
                when=move || runtime.state.with(|desktop| !desktop.notifications.is_empty())
                fallback=|| view! { <p class="notification-center-empty">"No notifications"</p> }
            >
                <ul class="notification-list">
                    <For each=notifications key=|notification| notification.id let:notification>
                        <li class="notification-card">
                            <div class="notification-card-header">
                                <h3>{notification.title}</h3>
                                <span class="notification-time">
                                    {local_clock_at(notification.created_at_ms).hh_mm()}
                                </span>
                            </div>
                            <p>{notification.message}</p>
                        </li>
                    </For>
                </ul>
            </Show>
        </aside>
    }
}
