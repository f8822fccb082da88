//! Desktop & Screen Saver window: bundled wallpaper categories, the dynamic wallpaper, and a
//! library of user uploads kept in durable storage.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod library;

use desktop_app_contract::{AppMountContext, WallpaperSelection};
use leptos::*;
use platform_host::{
    is_solid_color, next_monotonic_timestamp_ms, CustomWallpaperRecord, WallpaperPreset,
    DYNAMIC_WALLPAPER,
};
use platform_host_web::{object_url_from_file_input, revoke_object_url};

use crate::library::{
    fallback_after_delete, is_static_selected, load_custom_wallpapers, remove_custom,
    save_custom_wallpapers, PickerSection, UploadDraft,
};

/// Mounts the wallpaper picker window contents.
pub fn mount(context: AppMountContext) -> View {
    view! { <WallpaperPickerApp context=context /> }.into_view()
}

fn check_badge() -> impl IntoView {
    view! { <span class="wallpaper-check" aria-hidden="true">"✓"</span> }
}

fn preset_tiles(
    presets: &'static [WallpaperPreset],
    current: Signal<WallpaperSelection>,
    choose: Callback<WallpaperSelection>,
) -> View {
    presets
        .iter()
        .map(|preset| {
            let path = preset.path;
            let selected = move || current.with(|current| is_static_selected(current, path));
            let swatch = if is_solid_color(path) {
                view! { <div class="wallpaper-thumb" style=format!("background-color: {path};")></div> }
                    .into_view()
            } else {
                view! {
                    <div class="wallpaper-thumb">
                        <img src=path alt={preset.name} />
                    </div>
                }
                .into_view()
            };
            view! {
                <button
                    type="button"
                    class="wallpaper-tile"
                    class:selected=selected
                    on:click=move |_| choose.call(WallpaperSelection::fixed(path))
                >
                    {swatch}
                    <Show when=selected fallback=|| ()>
                        {check_badge()}
                    </Show>
                    <span class="wallpaper-name">{preset.name}</span>
                </button>
            }
        })
        .collect_view()
}

#[component]
/// Category sidebar, tile grid, custom library, and the upload dialog.
pub fn WallpaperPickerApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let wallpaper = services.wallpaper;
    let current = wallpaper.current;
    let local_store = store_value(services.local_store.clone());

    let section = create_rw_signal(PickerSection::ALL[0]);
    let custom = create_rw_signal(
        load_custom_wallpapers(services.local_store.as_ref()).unwrap_or_else(|err| {
            logging::warn!("custom wallpaper library unreadable: {err}");
            Vec::new()
        }),
    );
    let upload_open = create_rw_signal(false);
    let draft = create_rw_signal(UploadDraft::default());
    let upload_error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        custom.with(|records| {
            local_store.with_value(|store| {
                if let Err(err) = save_custom_wallpapers(store.as_ref(), records) {
                    logging::warn!("custom wallpaper library save failed: {err}");
                }
            })
        })
    });

    let choose = Callback::new(move |selection: WallpaperSelection| wallpaper.set(selection));

    let close_upload = move || {
        if let Some(url) = draft.try_update(UploadDraft::clear_file).flatten() {
            revoke_object_url(&url);
        }
        draft.set(UploadDraft::default());
        upload_error.set(None);
        upload_open.set(false);
    };

    let on_file_picked = move |ev: ev::Event| match object_url_from_file_input(&ev) {
        Ok(Some(picked)) => {
            upload_error.set(None);
            if let Some(previous) = draft
                .try_update(|draft| draft.pick(&picked.file_name, picked.url))
                .flatten()
            {
                revoke_object_url(&previous);
            }
        }
        Ok(None) => {}
        Err(err) => {
            logging::warn!("wallpaper upload failed: {err}");
            upload_error.set(Some(err));
        }
    };

    let confirm_upload = move || {
        let Some(record) = draft
            .try_update(|draft| {
                if !draft.can_upload() {
                    return None;
                }
                std::mem::take(draft).into_record(next_monotonic_timestamp_ms())
            })
            .flatten()
        else {
            return;
        };
        custom.update(|records| records.push(record));
        upload_open.set(false);
        section.set(PickerSection::Custom);
    };

    let delete_custom = move |id: String| {
        let Some(removed) = custom.try_update(|records| remove_custom(records, &id)).flatten() else {
            return;
        };
        revoke_object_url(&removed.path);
        if let Some(fallback) = current.with_untracked(|current| fallback_after_delete(current, &removed))
        {
            wallpaper.set(fallback);
        }
    };

    let dynamic_block = move || {
        let selected = move || current.with(|current| current.is_dynamic);
        view! {
            <section class="wallpaper-section">
                <h3>"Dynamic Wallpapers"</h3>
                <div class="wallpaper-grid">
                    <button
                        type="button"
                        class="wallpaper-tile"
                        class:selected=selected
                        on:click=move |_| {
                            choose.call(WallpaperSelection {
                                value: DYNAMIC_WALLPAPER.path.to_string(),
                                is_dynamic: true,
                            })
                        }
                    >
                        <div class="wallpaper-thumb">
                            <img src={DYNAMIC_WALLPAPER.path} alt={DYNAMIC_WALLPAPER.name} />
                        </div>
                        <Show when=selected fallback=|| ()>
                            {check_badge()}
                        </Show>
                        <span class="wallpaper-name">{DYNAMIC_WALLPAPER.name}</span>
                        <span class="wallpaper-note">"Changes with time of day"</span>
                    </button>
                </div>
            </section>
        }
    };

    let custom_block = move || {
        view! {
            <section class="wallpaper-section">
                <div class="wallpaper-section-header">
                    <h3>"My Wallpapers"</h3>
                    <button type="button" class="app-action" on:click=move |_| upload_open.set(true)>
                        "＋ Add New"
                    </button>
                </div>
                <Show
                    when=move || custom.with(|records| !records.is_empty())
                    fallback=move || {
                        view! {
                            <div class="wallpaper-empty">
                                <p>"You haven't added any custom wallpapers yet"</p>
                                <button
                                    type="button"
                                    class="app-action primary"
                                    on:click=move |_| upload_open.set(true)
                                >
                                    "Upload Your First Wallpaper"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="wallpaper-grid">
                        <For
                            each=move || custom.get()
                            key=|record: &CustomWallpaperRecord| record.id.clone()
                            let:record
                        >
                            {{
                                let CustomWallpaperRecord { id, name, path } = record;
                                let ring_path = path.clone();
                                let badge_path = path.clone();
                                let apply_path = path.clone();
                                let alt_text = name.clone();
                                view! {
                                    <div
                                        class="wallpaper-tile"
                                        class:selected=move || {
                                            current.with(|current| is_static_selected(current, &ring_path))
                                        }
                                    >
                                        <div class="wallpaper-thumb">
                                            <img src=path alt=alt_text />
                                        </div>
                                        <Show
                                            when=move || {
                                                current.with(|current| is_static_selected(current, &badge_path))
                                            }
                                            fallback=|| ()
                                        >
                                            {check_badge()}
                                        </Show>
                                        <div class="wallpaper-tile-actions">
                                            <button
                                                type="button"
                                                class="app-action"
                                                on:click=move |_| choose.call(WallpaperSelection::fixed(apply_path.clone()))
                                            >
                                                "Apply"
                                            </button>
                                            <button
                                                type="button"
                                                class="app-action danger"
                                                aria-label="Delete wallpaper"
                                                on:click=move |ev: ev::MouseEvent| {
                                                    ev.stop_propagation();
                                                    delete_custom(id.clone());
                                                }
                                            >
                                                "🗑️"
                                            </button>
                                        </div>
                                        <span class="wallpaper-name">{name}</span>
                                    </div>
                                }
                            }}
                        </For>
                    </div>
                </Show>
            </section>
        }
    };

    let main_pane = move || match section.get() {
        entry @ PickerSection::Catalog(category) => {
            view! {
                {entry.shows_dynamic().then(dynamic_block)}
                <section class="wallpaper-section">
                    <h3>{category.label()}</h3>
                    <div class="wallpaper-grid">
                        {preset_tiles(category.presets(), current, choose)}
                    </div>
                </section>
            }
            .into_view()
        }
        PickerSection::Custom => custom_block().into_view(),
    };

    view! {
        <div class="app-shell app-wallpaper-shell" class:dark=move || services.is_dark()>
            <header class="wallpaper-header">
                <h2>"Desktop & Screen Saver"</h2>
            </header>
            <div class="wallpaper-body">
                <aside class="wallpaper-sidebar">
                    <h4>"Desktop Pictures"</h4>
                    <ul>
                        {PickerSection::ALL
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="wallpaper-category"
                                            class:active=move || section.get() == entry
                                            on:click=move |_| section.set(entry)
                                        >
                                            {entry.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        type="button"
                        class="app-action wallpaper-upload"
                        on:click=move |_| upload_open.set(true)
                    >
                        "⬆ Upload Image"
                    </button>
                </aside>
                <main class="wallpaper-main">{main_pane}</main>
            </div>

            <Show when=move || upload_open.get() fallback=|| ()>
                <div class="app-dialog-backdrop">
                    <div class="app-dialog" role="dialog" aria-label="Upload Custom Wallpaper">
                        <div class="app-dialog-header">
                            <h3>"Upload Custom Wallpaper"</h3>
                            <button
                                type="button"
                                class="app-dialog-close"
                                aria-label="Close"
                                on:click=move |_| close_upload()
                            >
                                "✕"
                            </button>
                        </div>
                        <label>
                            "Wallpaper Name"
                            <input
                                type="text"
                                class="app-field"
                                placeholder="Enter a name for your wallpaper"
                                prop:value=move || draft.with(|draft| draft.name.clone())
                                on:input=move |ev| {
                                    let name = event_target_value(&ev);
                                    draft.update(|draft| draft.name = name);
                                }
                            />
                        </label>
                        {move || match draft.with(|draft| draft.preview_url.clone()) {
                            Some(url) => view! {
                                <div class="wallpaper-preview">
                                    <img src=url alt="Preview" />
                                    <button
                                        type="button"
                                        class="app-dialog-close"
                                        aria-label="Remove image"
                                        on:click=move |_| {
                                            if let Some(url) = draft.try_update(UploadDraft::clear_file).flatten() {
                                                revoke_object_url(&url);
                                            }
                                        }
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                            .into_view(),
                            None => view! {
                                <label class="wallpaper-dropzone">
                                    <span>"Click to select an image"</span>
                                    <span class="wallpaper-note">"PNG, JPG, GIF up to 10MB"</span>
                                    <input type="file" accept="image/*" hidden=true on:change=on_file_picked />
                                </label>
                            }
                            .into_view(),
                        }}
                        <Show when=move || upload_error.with(Option::is_some) fallback=|| ()>
                            <p class="app-field-error">{move || upload_error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="app-dialog-actions">
                            <button type="button" class="app-action" on:click=move |_| close_upload()>
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                class="app-action primary"
                                disabled=move || !draft.with(UploadDraft::can_upload)
                                on:click=move |_| confirm_upload()
                            >
                                "Upload"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
