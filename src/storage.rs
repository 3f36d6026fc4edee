//! Persistence port
//!
//! The controller never talks to the browser directly; it writes snapshots
//! through a `StateStore` handed to it at construction. The web build plugs
//! in LocalStorage, tests and the native build use an in-memory slot.
//!
//! Storage failures are never fatal: a missing or unwritable slot degrades
//! to an in-memory game with a warning.

use std::cell::RefCell;

/// A key-value slot holding at most one serialized game snapshot.
pub trait StateStore {
    /// Read the stored snapshot, if any.
    fn read(&self) -> Option<String>;
    /// Overwrite the stored snapshot. Failures are logged, not returned.
    fn write(&self, snapshot: &str);
    /// Drop the stored snapshot.
    fn clear(&self);
}

/// Browser LocalStorage slot (WASM only).
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// LocalStorage key for the saved game
    pub const SAVE_KEY: &'static str = "word_bingo_save";

    pub fn new() -> Self {
        Self {
            key: Self::SAVE_KEY,
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl StateStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok()?
    }

    fn write(&self, snapshot: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, snapshot).is_err() {
                    log::warn!("LocalStorage write failed - continuing in memory");
                }
            }
            None => log::warn!("LocalStorage unavailable - continuing in memory"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// In-memory slot for tests and the native build.
#[derive(Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot (tests simulating an earlier session).
    pub fn with_snapshot(snapshot: &str) -> Self {
        Self {
            slot: RefCell::new(Some(snapshot.to_string())),
        }
    }

    /// Current contents, for assertions.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, snapshot: &str) {
        *self.slot.borrow_mut() = Some(snapshot.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read(), None);

        store.write("{\"winner\":false}");
        assert_eq!(store.read().as_deref(), Some("{\"winner\":false}"));

        store.clear();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_snapshot("old");
        store.write("new");
        assert_eq!(store.read().as_deref(), Some("new"));
    }
}
