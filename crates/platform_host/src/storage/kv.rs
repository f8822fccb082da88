//! Synchronous string key-value storage contract and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for string values keyed by string (browser `Storage` semantics).
///
/// Implementations never fail on reads: an unavailable backend behaves like an empty one.
pub trait KeyValueStore {
    /// Returns the raw value stored for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write (quota, unavailable storage).
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removes `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string. Clones share the same backing map.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed JSON value through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when the stored text is not valid JSON for `T`.
pub fn load_json_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("`{key}` holds malformed JSON: {e}"))
}

/// Loads a JSON array of records, treating absent values as empty.
///
/// # Errors
///
/// Returns an error when the stored text is not a valid array of `T`. Callers are expected to log
/// the error and fall back to an empty collection.
pub fn load_collection_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Vec<T>, String> {
    load_json_with::<S, Vec<T>>(store, key).map(Option::unwrap_or_default)
}

/// Serializes and saves a typed value as JSON through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_json_with<S: KeyValueStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        name: String,
    }

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        store_obj.set("k", "v").expect("set");
        assert_eq!(store_obj.get("k"), Some("v".to_string()));
        store_obj.remove("k").expect("remove");
        assert_eq!(store_obj.get("k"), None);
    }

    #[test]
    fn memory_store_clones_share_backing_map() {
        let store = MemoryKeyValueStore::default();
        let other = store.clone();
        store.set("shared", "1").expect("set");
        assert_eq!(other.get("shared"), Some("1".to_string()));
    }

    #[test]
    fn collection_helpers_round_trip() {
        let store = MemoryKeyValueStore::default();
        let records = vec![Record {
            id: "1".to_string(),
            name: "a.txt".to_string(),
        }];
        save_json_with(&store, "records", &records).expect("save");
        let loaded: Vec<Record> = load_collection_with(&store, "records").expect("load");
        assert_eq!(loaded, records);
    }

    #[test]
    fn absent_collection_is_empty() {
        let store = MemoryKeyValueStore::default();
        let loaded: Vec<Record> = load_collection_with(&store, "missing").expect("load");
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_collection_reports_error_instead_of_panicking() {
        let store = MemoryKeyValueStore::default();
        store.set("records", "{not json").expect("set");
        let loaded = load_collection_with::<_, Record>(&store, "records");
        assert!(loaded.is_err());
        assert!(loaded.unwrap_err().contains("records"));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopKeyValueStore;
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k"), None);
        store.remove("k").expect("remove");
    }
}
