use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::{DESKTOP_DIR_PATH, HOME_DIR_PATH};

use crate::navigation::{breadcrumbs, folder_items, FolderHistory, FolderItem};
use crate::{activate_path, filesystem_memo, FolderContents, ViewMode, ViewModeToggle};

struct Place {
    label: &'static str,
    glyph: &'static str,
    path: &'static str,
}

static FAVORITES: [Place; 4] = [
    Place {
        label: "Documents",
        glyph: "📁",
        path: "/home/user/Documents",
    },
    Place {
        label: "Desktop",
        glyph: "🖥️",
        path: DESKTOP_DIR_PATH,
    },
    Place {
        label: "Downloads",
        glyph: "📥",
        path: "/home/user/Downloads",
    },
    Place {
        label: "Pictures",
        glyph: "🖼️",
        path: "/home/user/Pictures",
    },
];

static LOCATIONS: [Place; 2] = [
    Place {
        label: "Applications",
        glyph: "🗂️",
        path: "/Applications",
    },
    Place {
        label: "System",
        glyph: "⚙️",
        path: "/System",
    },
];

fn place_links(places: &'static [Place], go: Callback<String>) -> impl IntoView {
    places
        .iter()
        .map(|place| {
            view! {
                <button type="button" class="finder-place" on:click=move |_| go.call(place.path.to_string())>
                    <span aria-hidden="true">{place.glyph}</span>
                    <span>{place.label}</span>
                </button>
            }
        })
        .collect_view()
}

#[component]
/// Single-pane browser with breadcrumbs, back/forward history, and grid or list views.
pub fn FinderApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let desktop_files = services.desktop_files;
    let fs = filesystem_memo(desktop_files);

    let history = create_rw_signal(FolderHistory::new(HOME_DIR_PATH));
    let view_mode = create_rw_signal(ViewMode::List);
    let selected = create_rw_signal(None::<String>);

    let current = move || history.with(|history| history.current().to_string());
    let items = create_memo(move |_| {
        let path = current();
        fs.with(|fs| folder_items(fs, &path))
    });

    let go = Callback::new(move |path: String| {
        history.update(|history| history.visit(&path));
        selected.set(None);
    });
    let step = move |forward: bool| {
        let moved = history
            .try_update(|history| if forward { history.forward() } else { history.back() })
            .unwrap_or(false);
        if moved {
            selected.set(None);
        }
    };

    view! {
        <div class="app-shell app-finder-shell" class:dark=move || services.is_dark()>
            <div class="app-toolbar">
                <button
                    type="button"
                    class="app-action"
                    title="Back"
                    disabled=move || history.with(|history| !history.can_go_back())
                    on:click=move |_| step(false)
                >
                    "←"
                </button>
                <button
                    type="button"
                    class="app-action"
                    title="Forward"
                    disabled=move || history.with(|history| !history.can_go_forward())
                    on:click=move |_| step(true)
                >
                    "→"
                </button>
                <button type="button" class="app-action" title="Home" on:click=move |_| go.call(HOME_DIR_PATH.to_string())>
                    "🏠"
                </button>

                <nav class="finder-breadcrumbs" aria-label="Path">
                    {move || {
                        let crumbs = breadcrumbs(&current());
                        let last = crumbs.len() - 1;
                        crumbs
                            .into_iter()
                            .enumerate()
                            .map(|(index, crumb)| {
                                let path = crumb.path.clone();
                                let is_current = index == last;
                                view! {
                                    {(index > 0).then(|| view! { <span class="finder-crumb-sep">"›"</span> })}
                                    <button
                                        type="button"
                                        class="finder-crumb"
                                        class:current=is_current
                                        on:click=move |_| go.call(path.clone())
                                    >
                                        {crumb.label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <ViewModeToggle view_mode=view_mode />
            </div>

            <div class="finder-body">
                <aside class="finder-sidebar">
                    <button type="button" class="finder-place" on:click=move |_| go.call(HOME_DIR_PATH.to_string())>
                        <span aria-hidden="true">"🏠"</span>
                        <span>"Home"</span>
                    </button>
                    <h4>"Favorites"</h4>
                    {place_links(&FAVORITES, go)}
                    <h4>"Locations"</h4>
                    {place_links(&LOCATIONS, go)}
                </aside>

                <section class="finder-content">
                    <FolderContents
                        items=items
                        view_mode=view_mode
                        selected=selected
                        on_click=move |item: FolderItem| selected.set(Some(item.path))
                        on_activate=move |path: String| {
                            activate_path(fs, desktop_files, |folder| go.call(folder), &path)
                        }
                    />
                </section>
            </div>

            <div class="app-statusbar">
                <span>{move || format!("{} items", items.with(Vec::len))}</span>
                <span>{move || if selected.with(Option::is_some) { "1 item selected" } else { "" }}</span>
            </div>
        </div>
    }
}
