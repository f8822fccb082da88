use platform_host::next_monotonic_timestamp_ms;

use super::*;

struct DesktopIcon {
    id: &'static str,
    name: &'static str,
    glyph: &'static str,
}

const DESKTOP_ICONS: [DesktopIcon; 4] = [
    DesktopIcon {
        id: "documents",
        name: "Documents",
        glyph: "📄",
    },
    DesktopIcon {
        id: "pictures",
        name: "Pictures",
        glyph: "🖼️",
    },
    DesktopIcon {
        id: "downloads",
        name: "Downloads",
        glyph: "📥",
    },
    DesktopIcon {
        id: "trash",
        name: "Trash",
        glyph: "🗑️",
    },
];

const CONTEXT_MENU_ITEMS: [&str; 4] = ["New Folder", "New File", "Change Background", "Sort Icons"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContextMenuPosition {
    x: i32,
    y: i32,
}

/// Icons, widgets, and the context menu behind the window layer.
#[component]
pub(super) fn DesktopSurface(children: Children) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = create_rw_signal(None::<String>);
    let context_menu = create_rw_signal(None::<ContextMenuPosition>);
    let files = move || runtime.state.with(|desktop| desktop.desktop_files.clone());

    let select = move |id: String| selected.set(Some(id));
    let is_selected = move |id: &str| selected.with(|current| current.as_deref() == Some(id));

    view! {
        <main
            class="desktop-surface"
            on:click=move |_| {
                selected.set(None);
                context_menu.set(None);
            }
            on:contextmenu=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                context_menu.set(Some(ContextMenuPosition {
                    x: ev.client_x(),
                    y: ev.client_y(),
                }));
            }
        >
            <div class="desktop-icons">
                {DESKTOP_ICONS
                    .iter()
                    .map(|icon| {
                        let id = icon.id;
                        view! {
                            <div
                                class="desktop-icon"
                                class:selected=move || is_selected(id)
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    select(id.to_string());
                                }
                                on:dblclick=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                            >
                                <div class="desktop-icon-glyph">{icon.glyph}</div>
                                <div class="desktop-icon-label">{icon.name}</div>
                            </div>
                        }
                    })
                    .collect_view()}
                <For each=files key=|file| file.id.clone() let:file>
                    {{
                        let id = file.id.clone();
                        let click_id = file.id.clone();
                        let name = file.name.clone();
                        view! {
                            <div
                                class="desktop-icon desktop-file"
                                class:selected=move || is_selected(&id)
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    select(click_id.clone());
                                }
                                on:dblclick=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::OpenFile {
                                        name: file.name.clone(),
                                        content: file.content.clone(),
                                        at_ms: next_monotonic_timestamp_ms(),
                                    });
                                }
                            >
                                <div class="desktop-icon-glyph">"🗒️"</div>
                                <div class="desktop-icon-label">{name}</div>
                            </div>
                        }
                    }}
                </For>
            </div>

            <div class="desktop-widgets">
                <DesktopWidget title="Weather">
                    <div class="widget-weather">
                        <div class="widget-weather-glyph">"🌤️"</div>
                        <div>
                            <div class="widget-weather-temp">"72°F"</div>
                            <div>"Sunny"</div>
                        </div>
                    </div>
                </DesktopWidget>
                <DesktopWidget title="Calendar">
                    <div class="widget-calendar">
                        <div class="widget-calendar-weekday">{move || runtime.clock.get().weekday_name()}</div>
                        <div class="widget-calendar-day">{move || runtime.clock.get().day}</div>
                        <div>
                            {move || {
                                let clock = runtime.clock.get();
                                format!("{} {}", clock.month_name(), clock.year)
                            }}
                        </div>
                    </div>
                </DesktopWidget>
            </div>

            {move || {
                context_menu
                    .get()
                    .map(|position| {
                        view! {
                            <div
                                class="desktop-context-menu"
                                role="menu"
                                style=format!("left:{}px;top:{}px;", position.x, position.y)
                            >
                                {CONTEXT_MENU_ITEMS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, label)| {
                                        view! {
                                            {(index == 2).then(|| view! { <hr /> })}
                                            <button type="button" role="menuitem">{*label}</button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}

            {children()}
        </main>
    }
}

#[component]
fn DesktopWidget(title: &'static str, children: Children) -> impl IntoView {
    let collapsed = create_rw_signal(false);
    let body = children();

    view! {
        <section class="desktop-widget">
            <header class="desktop-widget-header" on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                collapsed.update(|value| *value = !*value);
            }>
                <h3>{title}</h3>
                <span aria-hidden="true">{move || if collapsed.get() { "▾" } else { "▴" }}</span>
            </header>
            <div class="desktop-widget-body" class:hidden=move || collapsed.get()>{body}</div>
        </section>
    }
}
