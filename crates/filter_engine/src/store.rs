use std::collections::HashMap;

use filter_core::ENABLED_KEY;

/// Callback invoked with `(key, new_value)` after a store write. `None`
/// means the key was removed.
pub type ChangeListener = Box<dyn FnMut(&str, Option<bool>)>;

/// Contract the filter engine consumes from the extension's synced
/// key-value store: boolean reads and writes plus change notifications.
/// The companion toggle UI is the usual writer; the engine only reads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<bool>;
    fn set(&mut self, key: &str, value: bool);
    fn remove(&mut self, key: &str);
}

/// In-memory store standing in for extension sync storage.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, bool>,
    listeners: Vec<ChangeListener>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the engine's single startup read.
    pub fn enabled(&self) -> Option<bool> {
        self.get(ENABLED_KEY)
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self, key: &str, value: Option<bool>) {
        for listener in &mut self.listeners {
            listener(key, value);
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
        self.notify(key, Some(value));
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.notify(key, None);
        }
    }
}
