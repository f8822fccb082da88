//! Terminal desktop app: a small command interpreter over the read-only mock filesystem.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod command;
pub mod session;

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::{default_filesystem, graft_desktop_files, local_clock_now};

use crate::session::{TerminalSession, TranscriptEntry};

/// Mounts the Terminal window contents.
pub fn mount(context: AppMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

fn render_transcript_entry(entry: &TranscriptEntry) -> View {
    match entry {
        TranscriptEntry::Prompt { cwd, line } => view! {
            <div class="terminal-line">
                <span class="terminal-prompt">{format!("{cwd} $")}</span>
                " "
                {line.clone()}
            </div>
        }
        .into_view(),
        TranscriptEntry::Output(text) => view! {
            <div class="terminal-line terminal-output">{text.clone()}</div>
        }
        .into_view(),
    }
}

#[component]
/// Terminal window bound to one interpreter session.
pub fn TerminalApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let mut fs = default_filesystem();
    graft_desktop_files(&mut fs, &services.desktop_files.snapshot());

    let session = create_rw_signal(TerminalSession::new(fs));
    let input = create_rw_signal(String::new());
    let screen = create_node_ref::<html::Div>();
    let field = create_node_ref::<html::Input>();

    create_effect(move |_| {
        session.with(|session| session.transcript().len());
        request_animation_frame(move || {
            if let Some(screen) = screen.get_untracked() {
                screen.set_scroll_top(screen.scroll_height());
            }
        });
    });

    create_effect(move |_| {
        if let Some(field) = field.get() {
            let _ = field.focus();
        }
    });

    let submit = move |line: String| {
        let now = local_clock_now();
        session.update(|session| {
            session.submit(&line, &now);
        });
        input.set(String::new());
    };

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => submit(input.get_untracked()),
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(line) = session
                .try_update_untracked(|session| session.history_older())
                .flatten()
            {
                input.set(line);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            if let Some(line) = session
                .try_update_untracked(|session| session.history_newer())
                .flatten()
            {
                input.set(line);
            }
        }
        "Tab" => {
            ev.prevent_default();
            let line = input.get_untracked();
            if let Some(completed) = session
                .try_update(|session| session.complete(&line))
                .flatten()
            {
                input.set(completed);
            }
        }
        _ => {}
    };

    view! {
        <div class="app-shell app-terminal-shell" class:dark=move || services.is_dark()>
            <div class="terminal-toolbar">
                <button type="button" class="app-action" on:click=move |_| submit("help".to_string())>
                    "Help"
                </button>
                <button type="button" class="app-action" on:click=move |_| submit("clear".to_string())>
                    "Clear"
                </button>
            </div>

            <div
                class="terminal-screen"
                role="log"
                aria-live="polite"
                node_ref=screen
                on:click=move |_| {
                    if let Some(field) = field.get_untracked() {
                        let _ = field.focus();
                    }
                }
            >
                {move || {
                    session.with(|session| {
                        session.transcript().iter().map(render_transcript_entry).collect_view()
                    })
                }}
                <div class="terminal-input-row">
                    <label class="terminal-prompt" for="terminal-input">
                        {move || session.with(|session| format!("{} $", session.cwd()))}
                    </label>
                    <input
                        id="terminal-input"
                        class="terminal-input"
                        type="text"
                        node_ref=field
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        autocomplete="off"
                        spellcheck="false"
                    />
                </div>
            </div>

            <div class="app-statusbar">
                <span>{move || session.with(|session| session.cwd().to_string())}</span>
                <span>{move || session.with(|session| format!("{} command(s)", session.history().len()))}</span>
            </div>
        </div>
    }
}
