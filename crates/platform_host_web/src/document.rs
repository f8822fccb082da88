//! Document-root class toggles.

/// Class applied to `<html>` while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark";

/// Adds or removes the dark theme class on the document element.
///
/// No-op outside the browser or when the document is unavailable.
pub fn set_document_theme_class(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1(DARK_THEME_CLASS)
        } else {
            classes.remove_1(DARK_THEME_CLASS)
        };
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}
