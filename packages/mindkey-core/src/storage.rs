use std::collections::HashMap;

use crate::error::Result;

/// Fixed keys the app persists under, one per concern.
pub mod keys {
    pub const FOREST: &str = "mindMapNodes";
    pub const TEMPLATES: &str = "mindMapTemplates";
    pub const IDEAS: &str = "savedIdeas";
    pub const CATEGORIES: &str = "ideaCategories";
    pub const NOTES: &str = "notes";
    pub const SETTINGS: &str = "appSettings";
}

/// String key-value storage boundary.
///
/// This is the whole persistence contract: values are opaque strings (JSON in
/// practice), durability is the adapter's problem, and the core never touches
/// a backend directly. Implementations may be in-memory, file-backed, or
/// anything else that can hold strings by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// HashMap-backed store for tests and no-durability use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
