// common/mod.rs

#![allow(dead_code)]

use std::sync::Mutex;

use history_calc::History;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Stand-in history that only records what it was asked to store.
#[derive(Debug, Default)]
pub struct RecordingHistory {
    pub add_entry_calls: Mutex<Vec<String>>,
    pub get_last_operations_calls: Mutex<Vec<usize>>,
}

impl RecordingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.add_entry_calls.lock().unwrap().clone()
    }

    pub fn last_operations_calls(&self) -> Vec<usize> {
        self.get_last_operations_calls.lock().unwrap().clone()
    }

    /// Number of `add_entry` calls made with exactly `operation`.
    pub fn times_called_with(&self, operation: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == operation).count()
    }
}

impl History for RecordingHistory {
    fn add_entry(&self, operation: &str) {
        self.add_entry_calls.lock().unwrap().push(operation.to_string());
    }

    fn get_last_operations(&self, count: usize) -> Vec<String> {
        self.get_last_operations_calls.lock().unwrap().push(count);
        Vec::new()
    }
}
