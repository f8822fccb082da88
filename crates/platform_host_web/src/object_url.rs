//! Object URLs for user-picked image files.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file chosen through an `<input type="file">` and exposed as an object URL.
pub struct PickedObjectUrl {
    /// Original file name.
    pub file_name: String,
    /// `blob:` URL valid for the lifetime of the page or until revoked.
    pub url: String,
}

/// Creates an object URL for the first file selected in the input that fired `event`.
///
/// Returns `Ok(None)` when no file was selected.
///
/// # Errors
///
/// Returns an error when the event target is not a file input or URL creation fails.
pub fn object_url_from_file_input(event: &web_sys::Event) -> Result<Option<PickedObjectUrl>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let input = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .ok_or_else(|| "change event did not come from a file input".to_string())?;
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return Ok(None);
        };
        let url = web_sys::Url::create_object_url_with_blob(&file)
            .map_err(|err| format!("failed to create object URL: {err:?}"))?;
        input.set_value("");
        Ok(Some(PickedObjectUrl {
            file_name: file.name(),
            url,
        }))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = event;
        Err("file uploads are only available when compiled for wasm32".to_string())
    }
}

/// Releases an object URL created by [`object_url_from_file_input`]. Non-`blob:` URLs are ignored.
pub fn revoke_object_url(url: &str) {
    if !url.starts_with("blob:") {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
