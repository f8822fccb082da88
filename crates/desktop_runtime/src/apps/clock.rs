//! Clock window: live time and long date from the runtime clock.

use desktop_app_contract::AppMountContext;
use leptos::*;

use crate::runtime_context::use_desktop_runtime;

pub(super) fn mount(_: AppMountContext) -> View {
    view! { <ClockApp /> }.into_view()
}

#[component]
fn ClockApp() -> impl IntoView {
    let clock = use_desktop_runtime().clock;

    view! {
        <div class="app-shell app-clock-shell">
            <div class="app-clock-face" aria-hidden="true">"🕒"</div>
            <div class="app-clock-time">{move || clock.get().hh_mm_ss()}</div>
            <div class="app-clock-date">{move || clock.get().long_date()}</div>
        </div>
    }
}
