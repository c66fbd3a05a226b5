use super::KeyValueStore;
use crate::errors::AppResult;
use std::collections::HashMap;
use std::io;

/// Process-local store. Backs sessions whose database could not be opened,
/// and tests. A failing store rejects every call, like a broken disk; a
/// store failing on one key rejects only calls for that key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    records: Vec<(String, String, String)>,
    failing: bool,
    fail_key: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.fail_key = Some(key.to_string());
        self
    }

    /// Seed a value without going through the trait (and without failing).
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Activity lines recorded so far, as (operation, target, message).
    pub fn records(&self) -> &[(String, String, String)] {
        &self.records
    }

    fn check(&self, key: Option<&str>) -> AppResult<()> {
        if self.failing {
            return Err(io::Error::other("storage unavailable").into());
        }
        if let Some(k) = key
            && self.fail_key.as_deref() == Some(k)
        {
            return Err(io::Error::other(format!("cannot access '{}'", k)).into());
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.check(Some(key))?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.check(Some(key))?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.check(Some(key))?;
        self.items.remove(key);
        Ok(())
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.check(None)?;
        self.records
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}
