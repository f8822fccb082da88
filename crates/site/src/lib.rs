//! Browser entry for the WebOS desktop.

mod web_app;

pub use web_app::{DesktopEntry, SiteApp};

/// Installs the panic hook and mounts the desktop into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
