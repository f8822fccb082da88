use desktop_app_contract::Theme;
use leptos::logging;

use crate::model::Viewport;

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1024,
    height: 768,
};

pub(super) fn apply_theme_class(theme: Theme) {
    platform_host_web::set_document_theme_class(theme.is_dark());
}

pub(super) fn open_external_url(url: &str) {
    if let Err(err) = platform_host_web::open_external_url(url) {
        logging::warn!("open external url failed for `{url}`: {err}");
    }
}

pub(super) fn viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.height);
            return Viewport { width, height };
        }
    }

    FALLBACK_VIEWPORT
}
