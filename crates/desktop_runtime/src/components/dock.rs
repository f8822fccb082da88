use super::*;
use crate::{
    apps::{self, CatalogEntry},
    dock::icon_scale,
};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let pointer_x = create_rw_signal(None::<f64>);

    view! {
        <nav
            class="dock"
            aria-label="Dock"
            on:mousemove=move |ev: web_sys::MouseEvent| pointer_x.set(Some(f64::from(ev.client_x())))
            on:mouseleave=move |_| pointer_x.set(None)
        >
            {apps::catalog_entries()
                .iter()
                .map(|entry| view! { <DockIcon entry pointer_x=pointer_x.read_only() /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn DockIcon(entry: &'static CatalogEntry, pointer_x: ReadSignal<Option<f64>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let node = create_node_ref::<html::Button>();
    let id = entry.id;

    let scale = move || {
        let pointer = pointer_x.get();
        let center = node
            .get()
            .map(|button| {
                let rect = button.get_bounding_client_rect();
                rect.left() + rect.width() / 2.0
            })
            .unwrap_or_default();
        icon_scale(pointer, center)
    };
    let is_open = move || runtime.state.with(|desktop| desktop.is_open(id));

    view! {
        <button
            type="button"
            class="dock-item"
            node_ref=node
            title=entry.title.clone()
            aria-label=entry.title.clone()
            style=move || format!("transform: scale({});", scale())
            on:click=move |_| runtime.dispatch_action(entry.open_action())
        >
            <span class="dock-icon" aria-hidden="true">{entry.icon.clone()}</span>
            <Show when=is_open fallback=|| ()>
                <span class="dock-indicator" aria-hidden="true"></span>
            </Show>
        </button>
    }
}
