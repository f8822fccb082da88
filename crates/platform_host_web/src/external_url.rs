//! Opening URLs in a new browsing context.

/// Opens `url` in a new tab (`window.open(url, "_blank")`).
///
/// # Errors
///
/// Returns an error when the window is unavailable, the call throws, or the browser blocked the
/// popup. Native builds always return an error.
pub fn open_external_url(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(format!("popup blocked while opening {url}")),
            Err(err) => Err(format!("window.open failed for {url}: {err:?}")),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(format!(
            "cannot open {url}: external URLs require a browser window"
        ))
    }
}
