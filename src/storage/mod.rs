//! Durable key-value persistence for the form.
//!
//! Only two keys are ever written: [`GOAL_WEIGHT_KEY`] and
//! [`TARGET_DATE_KEY`]. Values are plain strings; interpreting them is the
//! caller's business.

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;
use crate::ui::messages::warning;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub const GOAL_WEIGHT_KEY: &str = "goalWeight";
pub const TARGET_DATE_KEY: &str = "targetDate";

/// String key-value store. Every operation may fail with an I/O or
/// database error; callers decide whether that matters.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove_item(&mut self, key: &str) -> AppResult<()>;

    /// Append a line to the backend's activity log, if it keeps one.
    fn record(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        (**self).remove_item(key)
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        (**self).record(operation, target, message)
    }
}

/// Open the SQLite store at `path`. When that is not possible the session
/// carries on with an in-memory store and nothing will persist.
pub fn open(path: &str) -> Box<dyn KeyValueStore> {
    match SqliteStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warning(format!(
                "Cannot open storage at {} ({}); changes in this session will not be saved.",
                path, e
            ));
            Box::new(MemoryStore::new())
        }
    }
}
