//! Finder and Files windows over the read-only mock filesystem.
//!
//! Both windows rebuild their filesystem view whenever the saved desktop files change, so notes
//! saved from Notes show up in `/home/user/Desktop`. Opening a file hands it to Notes through
//! [`desktop_app_contract::DesktopFilesService::open`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod files;
mod finder;
pub mod navigation;

use desktop_app_contract::{AppMountContext, DesktopFilesService};
use leptos::*;
use platform_host::{default_filesystem, graft_desktop_files, MockFilesystem};

use crate::navigation::{activate_item, FolderItem, ItemActivation};

pub use files::FilesApp;
pub use finder::FinderApp;

/// Mounts the Finder window contents.
pub fn mount_finder(context: AppMountContext) -> View {
    view! { <FinderApp context=context /> }.into_view()
}

/// Mounts the Files (two-pane explorer) window contents.
pub fn mount_files(context: AppMountContext) -> View {
    view! { <FilesApp context=context /> }.into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

fn filesystem_memo(desktop_files: DesktopFilesService) -> Memo<MockFilesystem> {
    create_memo(move |_| {
        desktop_files.files.with(|files| {
            let mut fs = default_filesystem();
            graft_desktop_files(&mut fs, files);
            fs
        })
    })
}

fn activate_path(
    fs: Memo<MockFilesystem>,
    desktop_files: DesktopFilesService,
    open_folder: impl Fn(String),
    path: &str,
) {
    match fs.with_untracked(|fs| activate_item(fs, path)) {
        Some(ItemActivation::OpenFolder(folder)) => open_folder(folder),
        Some(ItemActivation::OpenFile { name, content }) => desktop_files.open(name, content),
        None => {}
    }
}

#[component]
fn ViewModeToggle(view_mode: RwSignal<ViewMode>) -> impl IntoView {
    view! {
        <div class="app-view-toggle" role="group" aria-label="View mode">
            <button
                type="button"
                class="app-action"
                class:active=move || view_mode.get() == ViewMode::Grid
                title="Icon view"
                on:click=move |_| view_mode.set(ViewMode::Grid)
            >
                "▦"
            </button>
            <button
                type="button"
                class="app-action"
                class:active=move || view_mode.get() == ViewMode::List
                title="List view"
                on:click=move |_| view_mode.set(ViewMode::List)
            >
                "☰"
            </button>
        </div>
    }
}

#[component]
fn FolderContents(
    items: Memo<Vec<FolderItem>>,
    view_mode: RwSignal<ViewMode>,
    selected: RwSignal<Option<String>>,
    #[prop(into)] on_click: Callback<FolderItem>,
    #[prop(into)] on_activate: Callback<String>,
) -> impl IntoView {
    let is_selected = move |path: &str| selected.with(|current| current.as_deref() == Some(path));

    view! {
        <Show
            when=move || view_mode.get() == ViewMode::Grid
            fallback=move || {
                view! {
                    <table class="explorer-list" role="grid" aria-label="Folder contents">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Size"</th>
                                <th>"Modified"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || items.get() key=|item| item.path.clone() let:item>
                                {{
                                    let path = item.path.clone();
                                    let open_path = item.path.clone();
                                    let clicked = item.clone();
                                    view! {
                                        <tr
                                            class:selected=move || is_selected(&path)
                                            on:click=move |_| on_click.call(clicked.clone())
                                            on:dblclick=move |_| on_activate.call(open_path.clone())
                                        >
                                            <td>
                                                <span class="explorer-glyph" aria-hidden="true">{item.glyph()}</span>
                                                {item.name}
                                            </td>
                                            <td>{item.kind}</td>
                                            <td>{item.size}</td>
                                            <td>{item.modified}</td>
                                        </tr>
                                    }
                                }}
                            </For>
                        </tbody>
                    </table>
                }
            }
        >
            <div class="explorer-grid">
                <For each=move || items.get() key=|item| item.path.clone() let:item>
                    {{
                        let path = item.path.clone();
                        let open_path = item.path.clone();
                        let clicked = item.clone();
                        view! {
                            <div
                                class="explorer-grid-item"
                                class:selected=move || is_selected(&path)
                                on:click=move |_| on_click.call(clicked.clone())
                                on:dblclick=move |_| on_activate.call(open_path.clone())
                            >
                                <div class="explorer-grid-glyph" aria-hidden="true">{item.glyph()}</div>
                                <div class="explorer-grid-name">{item.name}</div>
                            </div>
                        }
                    }}
                </For>
            </div>
        </Show>
    }
}
