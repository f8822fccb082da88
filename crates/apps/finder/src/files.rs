use std::collections::BTreeSet;

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::{normalize_virtual_path, parent_virtual_path, MockFilesystem, HOME_DIR_PATH};

use crate::navigation::{folder_items, subfolders, FolderHistory, FolderItem};
use crate::{activate_path, filesystem_memo, FolderContents, ViewMode, ViewModeToggle};

/// Ancestors of `path` (itself included), so the tree opens down to the current folder.
fn expanded_chain(path: &str) -> Vec<String> {
    let mut chain = vec!["/".to_string()];
    let mut current = String::new();
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        current.push('/');
        current.push_str(segment);
        chain.push(current.clone());
    }
    chain
}

fn tree_branch(
    fs: Memo<MockFilesystem>,
    folder: FolderItem,
    depth: usize,
    expanded: RwSignal<BTreeSet<String>>,
    current: Signal<String>,
    go: Callback<String>,
) -> View {
    let path = folder.path.clone();
    let toggle_path = folder.path.clone();
    let selected_path = folder.path.clone();
    let open_path = folder.path.clone();
    let children_path = folder.path.clone();
    let is_open = Signal::derive(move || expanded.with(|set| set.contains(&path)));
    let indent = format!("padding-left: {}px;", 8 + depth * 14);

    view! {
        <li>
            <div class="tree-node" class:selected=move || current.get() == selected_path style=indent>
                <button
                    type="button"
                    class="tree-glyph"
                    aria-label="Toggle folder"
                    on:click=move |_| {
                        expanded.update(|set| {
                            if !set.remove(&toggle_path) {
                                set.insert(toggle_path.clone());
                            }
                        })
                    }
                >
                    {move || if is_open.get() { "▾" } else { "▸" }}
                </button>
                <button type="button" class="tree-label" on:click=move |_| go.call(open_path.clone())>
                    "📁 " {folder.name}
                </button>
            </div>
            <Show when=move || is_open.get() fallback=|| ()>
                <ul class="tree-list">
                    {
                        let children_path = children_path.clone();
                        move || {
                            fs.with(|fs| subfolders(fs, &children_path))
                                .into_iter()
                                .map(|child| tree_branch(fs, child, depth + 1, expanded, current, go))
                                .collect_view()
                        }
                    }
                </ul>
            </Show>
        </li>
    }
    .into_view()
}

#[component]
/// Two-pane explorer: folder tree on the left, contents on the right, editable path bar on top.
pub fn FilesApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let desktop_files = services.desktop_files;
    let fs = filesystem_memo(desktop_files);

    let history = create_rw_signal(FolderHistory::new(HOME_DIR_PATH));
    let view_mode = create_rw_signal(ViewMode::List);
    let selected = create_rw_signal(None::<String>);
    let expanded = create_rw_signal(
        expanded_chain(HOME_DIR_PATH)
            .into_iter()
            .collect::<BTreeSet<_>>(),
    );
    let path_input = create_rw_signal(HOME_DIR_PATH.to_string());
    let path_error = create_rw_signal(None::<String>);

    let current = Signal::derive(move || history.with(|history| history.current().to_string()));
    let items = create_memo(move |_| {
        let path = current.get();
        fs.with(|fs| folder_items(fs, &path))
    });

    create_effect(move |_| {
        let path = current.get();
        path_input.set(path.clone());
        expanded.update(|set| set.extend(expanded_chain(&path)));
    });

    let go = Callback::new(move |path: String| {
        history.update(|history| history.visit(&path));
        selected.set(None);
        path_error.set(None);
    });
    let step = move |forward: bool| {
        history.update(|history| {
            if forward {
                history.forward();
            } else {
                history.back();
            }
        });
        selected.set(None);
    };
    let submit_path = move || {
        let target = normalize_virtual_path(&path_input.get_untracked());
        if fs.with_untracked(|fs| fs.is_directory(&target)) {
            go.call(target);
        } else {
            path_error.set(Some(format!("{target}: No such directory")));
        }
    };

    let root = FolderItem {
        path: "/".to_string(),
        name: "Root".to_string(),
        kind: "Folder".to_string(),
        size: "-".to_string(),
        modified: String::new(),
        is_folder: true,
    };

    view! {
        <div class="app-shell app-explorer-shell" class:dark=move || services.is_dark()>
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
                <button
                    type="button"
                    class="app-action"
                    title="Up"
                    on:click=move |_| go.call(parent_virtual_path(&current.get_untracked()))
                >
                    "↑"
                </button>
                <button type="button" class="app-action" title="Home" on:click=move |_| go.call(HOME_DIR_PATH.to_string())>
                    "🏠"
                </button>
                <input
                    type="text"
                    class="app-field explorer-path"
                    aria-label="Path"
                    prop:value=move || path_input.get()
                    on:input=move |ev| path_input.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit_path();
                        }
                    }
                />
                <ViewModeToggle view_mode=view_mode />
            </div>

            <div class="explorer-workspace">
                <aside class="explorer-tree" aria-label="Folder tree">
                    <div class="tree-header">"Folders"</div>
                    <ul class="tree-list">{tree_branch(fs, root, 0, expanded, current, go)}</ul>
                </aside>

                <section class="explorer-pane">
                    <FolderContents
                        items=items
                        view_mode=view_mode
                        selected=selected
                        on_click=move |item: FolderItem| {
                            if item.is_folder {
                                go.call(item.path);
                            } else {
                                selected.set(Some(item.path));
                            }
                        }
                        on_activate=move |path: String| {
                            activate_path(fs, desktop_files, |folder| go.call(folder), &path)
                        }
                    />
                </section>
            </div>

            <div class="app-statusbar">
                <span>{move || format!("{} item(s)", items.with(Vec::len))}</span>
                <span>
                    {move || {
                        path_error
                            .get()
                            .or_else(|| selected.get().map(|path| format!("Selected: {path}")))
                            .unwrap_or_else(|| "Ready".to_string())
                    }}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expanded_chain_lists_every_ancestor() {
        assert_eq!(
            expanded_chain("/home/user/Desktop"),
            vec!["/", "/home", "/home/user", "/home/user/Desktop"]
        );
        assert_eq!(expanded_chain("/"), vec!["/"]);
    }
}
