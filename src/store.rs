use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CONFIG;

/// Filename prefix shared by every persisted record. Anything else in the
/// state directory is left alone by `clear_all`.
const STORE_PREFIX: &str = "prism_";

/// Keyed JSON persistence, one file per logical field.
///
/// Reads fall back to the caller's default on any problem (missing file,
/// unreadable medium, corrupt payload). Writes are fire-and-forget: a failed
/// write is logged and swallowed, and the in-memory value stays authoritative
/// for the rest of the session.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn open() -> Self {
        Self::at(CONFIG.state_dir.clone())
    }

    pub fn at(dir: PathBuf) -> Self {
        StateStore { dir }
    }

    #[cfg(test)]
    fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{STORE_PREFIX}{key}.json"))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.record_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read state record {}: {}", path.display(), err);
                }
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "Discarding corrupt state record {}: {}",
                    path.display(),
                    err
                );
                default
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to serialize state record {key}: {err}");
                return;
            }
        };

        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!(
                "Failed to create state directory {}: {}",
                self.dir.display(),
                err
            );
            return;
        }

        let path = self.record_path(key);
        if let Err(err) = fs::write(&path, raw) {
            warn!("Failed to write state record {}: {}", path.display(), err);
        } else {
            debug!(target: "studio.store", key = key, "state record written");
        }
    }

    /// Deletes every record written by this store. Foreign files in the same
    /// directory are untouched.
    pub fn clear_all(&self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return,
            Err(err) => {
                warn!(
                    "Failed to list state directory {}: {}",
                    self.dir.display(),
                    err
                );
                return;
            }
        };

        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(STORE_PREFIX) && name.ends_with(".json") {
                if let Err(err) = fs::remove_file(entry.path()) {
                    warn!(
                        "Failed to remove state record {}: {}",
                        entry.path().display(),
                        err
                    );
                }
            }
        }
    }
}

/// Storage keys for every logical field. Selection categories derive their
/// key at runtime via [`selection_key`].
pub mod keys {
    pub const IMAGES: &str = "images";
    pub const SOURCE_TEXT: &str = "source_text";
    pub const ANALYSIS: &str = "analysis";
    pub const CURRENT_PROMPT: &str = "current_prompt";
    pub const CUSTOM_MODIFIERS: &str = "custom_modifiers";
    pub const PROMPT_FORMAT: &str = "prompt_format";
    pub const GENERATION: &str = "generation";
    pub const GALLERY: &str = "gallery";
    pub const SELECTED_REFERENCES: &str = "selected_references";
    pub const CREDENTIALS: &str = "credentials";
    pub const ACTIVE_CREDENTIAL: &str = "active_credential";
}

pub fn selection_key(category_key: &str) -> String {
    format!("selected_{}", category_key.replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    fn scratch_store() -> StateStore {
        let dir = std::env::temp_dir().join(format!(
            "prism-store-test-{}",
            uuid::Uuid::new_v4().simple()
        ));
        StateStore::at(dir)
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        tags: Vec<String>,
        weight: f64,
    }

    #[test]
    fn returns_default_when_record_is_missing() {
        let store = scratch_store();
        assert_eq!(store.get("missing", 7_u8), 7);
        assert_eq!(store.get::<String>("missing", String::new()), "");
    }

    #[test]
    fn round_trips_supported_field_types() {
        let store = scratch_store();

        store.set("text", &"hello world".to_string());
        store.set("count", &3_u8);
        store.set("values", &vec!["a".to_string(), "b".to_string()]);
        let sample = Sample {
            name: "portrait".to_string(),
            tags: vec!["warm".to_string(), "soft".to_string()],
            weight: 0.5,
        };
        store.set("sample", &sample);

        assert_eq!(
            store.get::<String>("text", String::new()),
            "hello world".to_string()
        );
        assert_eq!(store.get("count", 0_u8), 3);
        assert_eq!(
            store.get::<Vec<String>>("values", Vec::new()),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            store.get(
                "sample",
                Sample {
                    name: String::new(),
                    tags: Vec::new(),
                    weight: 0.0
                }
            ),
            sample
        );

        store.clear_all();
    }

    #[test]
    fn corrupt_record_falls_back_to_default() {
        let store = scratch_store();
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.dir().join("prism_broken.json"), "{not json").unwrap();

        assert_eq!(store.get("broken", 42_u32), 42);
        store.clear_all();
    }

    #[test]
    fn clear_all_removes_only_prefixed_records() {
        let store = scratch_store();
        store.set("one", &1_u8);
        store.set("two", &2_u8);
        std::fs::write(store.dir().join("unrelated.txt"), "keep me").unwrap();

        store.clear_all();

        assert_eq!(store.get("one", 0_u8), 0);
        assert_eq!(store.get("two", 0_u8), 0);
        assert!(store.dir().join("unrelated.txt").exists());
        std::fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn selection_keys_are_snake_cased() {
        assert_eq!(selection_key("hair-color"), "selected_hair_color");
        assert_eq!(selection_key("iso"), "selected_iso");
    }
}
