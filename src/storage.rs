use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::trace;

/// Key-value load/save contract the engine persists through. The engine never
/// cares where the bytes live; a missing or unreadable key just means "no
/// saved state".
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> io::Result<()>;
}

/// File-per-key store; `stats` lives at `<data_dir>/stats.json`.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        trace!(target: "storage", "Loading {:?}", path);
        fs::read_to_string(path).ok()
    }

    fn save(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.path_for(key), value)
    }
}

/// In-memory store for tests and for running without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert_eq!(store.load("stats"), None);

        store.save("stats", "{\"total_games\":3}").unwrap();
        assert_eq!(store.load("stats").as_deref(), Some("{\"total_games\":3}"));
    }

    #[test]
    fn test_file_store_roundtrip_and_missing_key() {
        let dir = std::env::temp_dir().join(format!("quickbingo-test-{}", uuid::Uuid::new_v4()));
        let store = FileStore::new(dir.clone());

        assert_eq!(store.load("stats"), None);
        store.save("stats", "{}").unwrap();
        assert_eq!(store.load("stats").as_deref(), Some("{}"));

        let _ = fs::remove_dir_all(dir);
    }
}
