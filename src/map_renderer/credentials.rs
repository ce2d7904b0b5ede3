use crate::global_variables::{LOCAL_STORE_PATH, MAPS_API_KEY_ENTRY, MAPS_API_KEY_ENV};
use serde_json::{Map, Value};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// File-backed stand-in for the browser-local key-value store. Holds a single
/// entry: the map provider API key. Development convenience only; nothing
/// here pretends to be secure credential storage.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Self {
        Self::new(LOCAL_STORE_PATH)
    }

    /// The stored API key, if a non-empty one exists. A missing or unreadable
    /// store reads as absent rather than an error.
    pub fn read(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let doc: Value = serde_json::from_str(&raw).ok()?;
        doc.get(MAPS_API_KEY_ENTRY)
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|k| !k.is_empty())
    }

    /// Writes the API key, keeping any other entries the store file carries.
    pub fn write(&self, api_key: &str) -> Result<(), Box<dyn Error>> {
        let mut doc = match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str::<Value>(&raw).unwrap_or(Value::Object(Map::new())),
            Err(_) => Value::Object(Map::new()),
        };
        if !doc.is_object() {
            doc = Value::Object(Map::new());
        }
        doc.as_object_mut()
            .expect("store document is an object")
            .insert(
                MAPS_API_KEY_ENTRY.to_string(),
                Value::String(api_key.to_string()),
            );
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }

    /// Store entry first, then the environment fallback.
    pub fn resolve(&self) -> Option<String> {
        self.read().or_else(|| {
            std::env::var(MAPS_API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn scratch_store() -> CredentialStore {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "privacy_transit_store_{}_{}.json",
            std::process::id(),
            n
        ));
        let _ = fs::remove_file(&path);
        CredentialStore::new(path)
    }

    #[test]
    fn absent_store_reads_as_none() {
        let store = scratch_store();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = scratch_store();
        store.write("AIza-test-key").expect("write store");
        assert_eq!(store.read().as_deref(), Some("AIza-test-key"));
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn write_preserves_unrelated_entries() {
        let store = scratch_store();
        fs::write(&store.path, r#"{"theme":"dark"}"#).expect("seed store");
        store.write("key-123").expect("write store");
        let raw = fs::read_to_string(&store.path).expect("read back");
        let doc: Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(doc["theme"], "dark");
        assert_eq!(doc[MAPS_API_KEY_ENTRY], "key-123");
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn resolve_falls_back_to_environment() {
        let store = scratch_store();
        std::env::set_var(MAPS_API_KEY_ENV, "env-key");
        assert_eq!(store.resolve().as_deref(), Some("env-key"));
        std::env::remove_var(MAPS_API_KEY_ENV);
    }
}
