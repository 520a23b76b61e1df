// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Bounded, append-only history with FIFO eviction.

use std::collections::VecDeque;
use std::fmt;

/// A change to a history, as seen by a display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    /// A record was appended at `index`
    Inserted { index: usize },
    /// The record at `index` (always the oldest, 0) was removed
    Evicted { index: usize },
    /// All records were removed
    Reset,
}

type Observer = Box<dyn FnMut(&HistoryChange) + Send>;

/// Fixed-capacity record history.
///
/// Appending past capacity evicts exactly one record, the oldest. Observers
/// are notified of every change after it has been applied.
pub struct History<T> {
    records: VecDeque<T>,
    capacity: usize,
    observers: Vec<Observer>,
}

impl<T: Clone> History<T> {
    /// Create an empty history. A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity.min(4096) + 1),
            capacity,
            observers: Vec::new(),
        }
    }

    /// Register an observer for insert/evict/reset notifications
    pub fn subscribe(&mut self, observer: impl FnMut(&HistoryChange) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Append a record, evicting the oldest one if over capacity.
    ///
    /// Returns the changes in the order they were applied.
    pub fn append(&mut self, record: T) -> Vec<HistoryChange> {
        let mut changes = Vec::with_capacity(2);

        self.records.push_back(record);
        changes.push(HistoryChange::Inserted {
            index: self.records.len() - 1,
        });

        if self.records.len() > self.capacity {
            self.records.pop_front();
            changes.push(HistoryChange::Evicted { index: 0 });
        }

        for change in &changes {
            self.notify(change);
        }
        changes
    }

    /// Snapshot of all records, oldest first
    pub fn get_all(&self) -> Vec<T> {
        self.records.iter().cloned().collect()
    }

    /// Remove every record
    pub fn clear(&mut self) -> HistoryChange {
        self.records.clear();
        let change = HistoryChange::Reset;
        self.notify(&change);
        change
    }

    /// Record at `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    /// Iterate over records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn notify(&mut self, change: &HistoryChange) {
        for observer in &mut self.observers {
            observer(change);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("records", &self.records)
            .field("capacity", &self.capacity)
            .field("observers", &self.observers.len())
            .finish()
    }
}
