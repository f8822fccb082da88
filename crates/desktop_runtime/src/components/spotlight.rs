use super::*;
use crate::spotlight::{
    activate, search, select_next, select_previous, SpotlightActivation, SpotlightResult,
};

#[component]
pub(super) fn Spotlight() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(0usize);
    let input = create_node_ref::<html::Input>();
    let results = create_memo(move |_| query.with(|q| search(q)));

    create_effect(move |_| {
        if let Some(field) = input.get() {
            let _ = field.focus();
        }
    });

    let run = move |index: usize| {
        let Some(result) = results.with_untracked(|rows| rows.get(index).cloned()) else {
            return;
        };
        match activate(&result, &query.get_untracked()) {
            SpotlightActivation::Dispatch(actions) => {
                for action in actions {
                    runtime.dispatch_action(action);
                }
            }
            SpotlightActivation::ReplaceQuery(text) => {
                query.set(text);
                selected.set(0);
            }
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let len = results.with_untracked(Vec::len);
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                selected.update(|index| *index = select_next(*index, len));
            }
            "ArrowUp" => {
                ev.prevent_default();
                selected.update(|index| *index = select_previous(*index, len));
            }
            "Enter" => {
                ev.prevent_default();
                run(selected.get_untracked());
            }
            _ => {}
        }
    };

    view! {
        <div class="spotlight-backdrop" on:click=move |_| runtime.dispatch_action(DesktopAction::CloseSpotlight)>
            <div class="spotlight-panel" on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()>
                <div class="spotlight-query">
                    <span aria-hidden="true">"🔍"</span>
                    <input
                        type="text"
                        node_ref=input
                        placeholder="Search apps, files, web, and more..."
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            query.set(event_target_value(&ev));
                            selected.set(0);
                        }
                        on:keydown=on_keydown
                    />
                    <button
                        type="button"
                        aria-label="Close Spotlight"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::CloseSpotlight)
                    >
                        "✕"
                    </button>
                </div>

                <div class="spotlight-results">
                    <Show
                        when=move || results.with(|rows| !rows.is_empty())
                        fallback=|| view! { <p class="spotlight-empty">"No results found"</p> }
                    >
                        {move || {
                            let rows = results.get();
                            let text = query.get();
                            let mut previous_section = "";
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, row)| {
                                    let section = row.section();
                                    let heading = (section != previous_section).then(|| {
                                        view! { <div class="spotlight-section">{section}</div> }
                                    });
                                    previous_section = section;
                                    view! {
                                        {heading}
                                        <button
                                            type="button"
                                            class="spotlight-row"
                                            class:selected=move || selected.get() == index
                                            on:mouseenter=move |_| selected.set(index)
                                            on:click=move |_| run(index)
                                        >
                                            {result_label(&row, &text)}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </div>

                <div class="spotlight-footer">
                    <span>"Press ↑↓ to navigate"</span>
                    <span>"Press Enter to select"</span>
                    <span>"Press Esc to close"</span>
                </div>
            </div>
        </div>
    }
}

fn result_label(row: &SpotlightResult, query: &str) -> View {
    match row {
        SpotlightResult::App(entry) => view! {
            <span class="spotlight-icon" aria-hidden="true">{entry.icon.clone()}</span>
            <span class="spotlight-text">
                <span class="spotlight-title">{entry.title.clone()}</span>
                <span class="spotlight-detail">{entry.keywords.join(", ")}</span>
            </span>
        }
        .into_view(),
        SpotlightResult::WebSearch(provider) => view! {
            <span class="spotlight-icon" aria-hidden="true">"🌐"</span>
            <span class="spotlight-text">
                <span class="spotlight-title">{format!("{} \"{query}\"", provider.label())}</span>
            </span>
        }
        .into_view(),
        SpotlightResult::Calculation { result } => view! {
            <span class="spotlight-icon" aria-hidden="true">"🧮"</span>
            <span class="spotlight-text">
                <span class="spotlight-title">{format!("{query} = {result}")}</span>
            </span>
        }
        .into_view(),
    }
}
