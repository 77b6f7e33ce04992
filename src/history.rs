// history.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink for operation log entries such as `"1 + 2 = 3"`.
///
/// Methods take `&self` so one history can be shared between its owner and a
/// [`Calculator`](crate::Calculator) at the same time.
pub trait History: Send + Sync {
    /// Appends `operation` as the newest entry.
    fn add_entry(&self, operation: &str);

    /// Returns up to `count` most recent entries, newest last.
    fn get_last_operations(&self, count: usize) -> Vec<String>;
}

/// Append-only history kept in process memory.
///
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistory {
    entries: Arc<Mutex<Vec<String>>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    // A panic elsewhere cannot leave the Vec half-pushed, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl History for InMemoryHistory {
    fn add_entry(&self, operation: &str) {
        let mut entries = self.lock();
        log::trace!("history entry #{}: {}", entries.len() + 1, operation);
        entries.push(operation.to_string());
    }

    fn get_last_operations(&self, count: usize) -> Vec<String> {
        let entries = self.lock();
        let total = entries.len();
        let start = if count > total { 0 } else { total - count };
        entries[start..].to_vec()
    }
}
