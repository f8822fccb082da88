//! `localStorage` / `sessionStorage` adapters for [`platform_host::KeyValueStore`].

use platform_host::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    fn label(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn open(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            Self::Local => window.local_storage().ok().flatten(),
            Self::Session => window.session_storage().ok().flatten(),
        }
    }

    fn get(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.open()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = self
                .open()
                .ok_or_else(|| format!("{} unavailable", self.label()))?;
            storage
                .set_item(key, value)
                .map_err(|e| format!("{} set_item failed: {e:?}", self.label()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value, self.label());
            Ok(())
        }
    }

    fn remove(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = self
                .open()
                .ok_or_else(|| format!("{} unavailable", self.label()))?;
            storage
                .remove_item(key)
                .map_err(|e| format!("{} remove_item failed: {e:?}", self.label()))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, self.label());
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Durable store backed by `window.localStorage`.
pub struct WebLocalStore;

impl KeyValueStore for WebLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        StorageArea::Local.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        StorageArea::Local.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        StorageArea::Local.remove(key)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Tab-scoped store backed by `window.sessionStorage`.
pub struct WebSessionStore;

impl KeyValueStore for WebSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        StorageArea::Session.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        StorageArea::Session.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        StorageArea::Session.remove(key)
    }
}
