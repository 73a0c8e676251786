//! Armazenamento chave-valor durável
//!
//! Abstrai o "localStorage": valores texto sob chaves fixas. O store de obras
//! e a sessão de login gravam por esta interface.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Armazenamento de strings por chave
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Armazenamento em memória (testes, uso embutido)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get("chave").unwrap(), None);

        storage.set("chave", "valor").unwrap();
        assert_eq!(storage.get("chave").unwrap().as_deref(), Some("valor"));
        assert_eq!(storage.len(), 1);

        storage.set("chave", "outro").unwrap();
        assert_eq!(storage.get("chave").unwrap().as_deref(), Some("outro"));

        storage.remove("chave").unwrap();
        assert_eq!(storage.get("chave").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("inexistente").is_ok());
    }
}
