use std::collections::HashMap;

use super::{KeyValueStorage, StorageError};

/// In-process storage; nothing outlives the program.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("absent"), None);
    }

    #[test]
    fn test_set_overwrites_value() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").as_deref(), Some("two"));
    }
}
