//! Notes window: a plain-text editor with a session draft, save-to-Desktop, and a sidebar of
//! saved notes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod draft;

use desktop_app_contract::AppMountContext;
use leptos::*;

use crate::draft::{
    load_draft, save_draft, save_file_name, take_unloaded, NoteStats, DEFAULT_FILE_NAME,
};

/// Mounts the Notes window contents.
pub fn mount(context: AppMountContext) -> View {
    view! { <NotesApp context=context /> }.into_view()
}

#[component]
/// Notes editor bound to the session draft and the saved desktop files.
pub fn NotesApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let session_store = services.session_store.clone();
    let desktop_files = services.desktop_files;
    let opened_document = services.opened_document;

    let content = create_rw_signal(load_draft(session_store.as_ref()));
    let file_name = create_rw_signal(DEFAULT_FILE_NAME.to_string());
    let save_dialog_open = create_rw_signal(false);
    let stats = create_memo(move |_| content.with(|text| NoteStats::of(text)));

    create_effect(move |_| {
        if let Some(text) = opened_document.with(|document| take_unloaded(document.as_ref())) {
            content.set(text);
        }
    });

    create_effect(move |_| {
        let text = content.get();
        if let Err(err) = save_draft(session_store.as_ref(), &text) {
            logging::warn!("notes draft save failed: {err}");
        }
    });

    let confirm_save = move || {
        let name = save_file_name(&file_name.get_untracked());
        desktop_files.save(name, content.get_untracked());
        save_dialog_open.set(false);
    };

    view! {
        <div class="app-shell app-notes-shell" class:dark=move || services.is_dark()>
            <div class="app-toolbar">
                <button
                    type="button"
                    class="app-action"
                    title="Save"
                    on:click=move |_| save_dialog_open.set(true)
                >
                    "💾 Save"
                </button>
                <span class="app-notes-stats">{move || stats.get().label()}</span>
            </div>

            <div class="app-notes-body">
                <aside class="app-notes-sidebar">
                    <h3>"Saved Notes"</h3>
                    <Show
                        when=move || desktop_files.files.with(|files| !files.is_empty())
                        fallback=|| view! { <p class="app-notes-empty">"No saved notes"</p> }
                    >
                        <ul>
                            <For
                                each=move || desktop_files.files.get()
                                key=|file| file.id.clone()
                                let:file
                            >
                                {{
                                    let id = file.id.clone();
                                    let text = file.content.clone();
                                    view! {
                                        <li class="app-notes-entry" on:click=move |_| content.set(text.clone())>
                                            <span class="app-notes-entry-name">"🗒️ " {file.name}</span>
                                            <button
                                                type="button"
                                                class="app-notes-delete"
                                                aria-label="Delete note"
                                                on:click=move |ev: ev::MouseEvent| {
                                                    ev.stop_propagation();
                                                    desktop_files.delete(id.clone());
                                                }
                                            >
                                                "🗑️"
                                            </button>
                                        </li>
                                    }
                                }}
                            </For>
                        </ul>
                    </Show>
                </aside>

                <textarea
                    class="app-notes-editor"
                    placeholder="Type your notes here..."
                    spellcheck="false"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || save_dialog_open.get() fallback=|| ()>
                <div class="app-dialog-backdrop">
                    <div class="app-dialog" role="dialog" aria-label="Save to Desktop">
                        <h3>"Save to Desktop"</h3>
                        <label>
                            "File name"
                            <input
                                type="text"
                                class="app-field"
                                prop:value=move || file_name.get()
                                on:input=move |ev| file_name.set(event_target_value(&ev))
                                on:keydown=move |ev: ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        confirm_save();
                                    }
                                }
                            />
                        </label>
                        <div class="app-dialog-actions">
                            <button type="button" class="app-action" on:click=move |_| save_dialog_open.set(false)>
                                "Cancel"
                            </button>
                            <button type="button" class="app-action primary" on:click=move |_| confirm_save()>
                                "Save"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
