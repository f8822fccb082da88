//! VS Code look-alike: a read-only viewer over a small bundled sample project.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod editor;
pub mod project;

use std::collections::BTreeSet;

use desktop_app_contract::AppMountContext;
use leptos::*;

use crate::editor::{tokenize_line, EditorTabs, OpenFile};
use crate::project::{initially_expanded, ProjectNode, PROJECT_TREE};

/// Mounts the VS Code window contents.
pub fn mount(context: AppMountContext) -> View {
    view! { <CodeViewerApp context=context /> }.into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SidebarTab {
    Explorer,
    Search,
    SourceControl,
    RunAndDebug,
    Extensions,
}

impl SidebarTab {
    const ALL: [Self; 5] = [
        Self::Explorer,
        Self::Search,
        Self::SourceControl,
        Self::RunAndDebug,
        Self::Extensions,
    ];

    const fn title(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::Search => "Search",
            Self::SourceControl => "Source Control",
            Self::RunAndDebug => "Run and Debug",
            Self::Extensions => "Extensions",
        }
    }

    const fn glyph(self) -> &'static str {
        match self {
            Self::Explorer => "📄",
            Self::Search => "🔍",
            Self::SourceControl => "⑂",
            Self::RunAndDebug => "🐞",
            Self::Extensions => "📦",
        }
    }
}

const RECOMMENDED_EXTENSIONS: [(&str, &str); 3] = [
    ("ESLint", "Integrates ESLint into VS Code"),
    ("Prettier", "Code formatter using prettier"),
    ("Tailwind CSS IntelliSense", "Intelligent Tailwind CSS tooling"),
];

fn render_tree(
    nodes: &'static [ProjectNode],
    depth: usize,
    expanded: RwSignal<BTreeSet<&'static str>>,
    tabs: RwSignal<EditorTabs>,
) -> View {
    nodes
        .iter()
        .map(|node| {
            let indent = format!("padding-left: {}px;", depth * 16);
            match *node {
                ProjectNode::Folder {
                    name,
                    path,
                    children,
                    ..
                } => {
                    let is_open = move || expanded.with(|set| set.contains(path));
                    view! {
                        <div class="code-tree-item">
                            <button
                                type="button"
                                class="code-tree-row"
                                style=indent
                                on:click=move |_| {
                                    expanded.update(|set| {
                                        if !set.remove(path) {
                                            set.insert(path);
                                        }
                                    })
                                }
                            >
                                <span class="code-tree-chevron">{move || if is_open() { "▾" } else { "▸" }}</span>
                                <span class="code-tree-folder" aria-hidden="true">"📁"</span>
                                <span>{name}</span>
                            </button>
                            <Show when=is_open fallback=|| ()>
                                {render_tree(children, depth + 1, expanded, tabs)}
                            </Show>
                        </div>
                    }
                    .into_view()
                }
                ProjectNode::File {
                    name,
                    path,
                    language,
                } => view! {
                    <button
                        type="button"
                        class="code-tree-row"
                        class:active=move || tabs.with(|tabs| tabs.is_active(path))
                        style=indent
                        on:click=move |_| tabs.update(|tabs| tabs.open(path, name, language))
                    >
                        <span class="code-tree-chevron"></span>
                        <span class=format!("code-tree-file {}", language.css_class()) aria-hidden="true">"📄"</span>
                        <span>{name}</span>
                    </button>
                }
                .into_view(),
            }
        })
        .collect_view()
}

fn render_file(file: &OpenFile) -> View {
    file.content
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            let tokens = tokenize_line(line, file.language)
                .into_iter()
                .map(|token| view! { <span class={token.kind.css_class()}>{token.text}</span> })
                .collect_view();
            view! {
                <div class="code-line">
                    <span class="code-gutter">{index + 1}</span>
                    <span class="code-text">{tokens}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
/// Activity bar, sidebar, tabbed editor, and status bar.
pub fn CodeViewerApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let sidebar = create_rw_signal(SidebarTab::Explorer);
    let expanded = create_rw_signal(initially_expanded().into_iter().collect::<BTreeSet<_>>());
    let tabs = create_rw_signal(EditorTabs::default());

    let sidebar_body = move || match sidebar.get() {
        SidebarTab::Explorer => view! {
            <div class="code-tree">
                <div class="code-tree-root">"WEBOS"</div>
                {render_tree(&PROJECT_TREE, 0, expanded, tabs)}
            </div>
        }
        .into_view(),
        SidebarTab::Search => view! {
            <input type="text" class="app-field" placeholder="Search" />
            <p class="code-sidebar-note">"Search across all files in your workspace"</p>
        }
        .into_view(),
        SidebarTab::SourceControl => view! {
            <p class="code-sidebar-note">"No changes detected in the workspace."</p>
        }
        .into_view(),
        SidebarTab::RunAndDebug => view! {
            <p class="code-sidebar-note">
                "No debug configurations found. Configure launch.json to enable debugging."
            </p>
            <button type="button" class="app-action primary">"Create launch.json"</button>
        }
        .into_view(),
        SidebarTab::Extensions => view! {
            <input type="text" class="app-field" placeholder="Search Extensions" />
            <h4>"Recommended"</h4>
            {RECOMMENDED_EXTENSIONS
                .iter()
                .map(|(name, detail)| {
                    view! {
                        <div class="code-extension">
                            <div class="code-extension-name">{*name}</div>
                            <div class="code-extension-detail">{*detail}</div>
                        </div>
                    }
                })
                .collect_view()}
        }
        .into_view(),
    };

    view! {
        <div class="app-shell app-code-shell" class:dark=move || services.is_dark()>
            <div class="code-titlebar">
                <span>"Visual Studio Code"</span>
                <span class="code-branch">"⑂ main"</span>
            </div>
            <div class="app-menubar">
                {["File", "Edit", "Selection", "View", "Go", "Run", "Terminal", "Help"]
                    .into_iter()
                    .map(|label| view! { <button type="button">{label}</button> })
                    .collect_view()}
            </div>

            <div class="code-workspace">
                <nav class="code-activity-bar" aria-label="Activity bar">
                    {SidebarTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    type="button"
                                    class="code-activity"
                                    class:active=move || sidebar.get() == tab
                                    title={tab.title()}
                                    on:click=move |_| sidebar.set(tab)
                                >
                                    {tab.glyph()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <aside class="code-sidebar">
                    <div class="code-sidebar-header">{move || sidebar.get().title().to_uppercase()}</div>
                    <div class="code-sidebar-body">{sidebar_body}</div>
                </aside>

                <section class="code-editor">
                    <div class="code-tabs" role="tablist">
                        <For
                            each=move || tabs.with(|tabs| tabs.files().to_vec())
                            key=|file| file.path.clone()
                            let:file
                        >
                            {{
                                let path = file.path.clone();
                                let activate_path = file.path.clone();
                                let close_path = file.path.clone();
                                view! {
                                    <div
                                        class="code-tab"
                                        role="tab"
                                        class:active=move || tabs.with(|tabs| tabs.is_active(&path))
                                        on:click=move |_| tabs.update(|tabs| tabs.activate(&activate_path))
                                    >
                                        <span>{file.name}</span>
                                        <button
                                            type="button"
                                            class="code-tab-close"
                                            aria-label="Close tab"
                                            on:click=move |ev: ev::MouseEvent| {
                                                ev.stop_propagation();
                                                tabs.update(|tabs| tabs.close(&close_path));
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            }}
                        </For>
                    </div>

                    <div class="code-content">
                        {move || {
                            tabs.with(|tabs| match tabs.active() {
                                Some(file) => render_file(file),
                                None => view! {
                                    <div class="code-empty">
                                        <h3>"No file is open"</h3>
                                        <p>"Open a file from the explorer to start editing"</p>
                                    </div>
                                }
                                .into_view(),
                            })
                        }}
                    </div>
                </section>
            </div>

            <div class="app-statusbar code-statusbar">
                <span>"⑂ main"</span>
                {move || {
                    tabs.with(|tabs| {
                        tabs.active().map(|file| {
                            view! {
                                <span>{file.language.label()}</span>
                                <span>"UTF-8"</span>
                                <span>"LF"</span>
                                <span>{format!("Ln {}, Col 1", file.line_count())}</span>
                                <span>"Spaces: 2"</span>
                            }
                        })
                    })
                }}
            </div>
        </div>
    }
}
