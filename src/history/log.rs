// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The three parallel message histories.

use std::path::Path;

use tracing::{debug, info};

use super::buffer::{History, HistoryChange};
use crate::export::CsvExporter;
use crate::format::{format_all, FormattedByteRecord, FormattedHumanRecord, FormattedMessage};
use crate::midi::RawMidiMessage;

/// Default number of messages kept per view
pub const DEFAULT_MAX_MESSAGES: usize = 1000;

/// Which of the three views a history holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Human,
    Hex,
    Binary,
}

/// Snapshot of all three views, position-aligned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSnapshot {
    pub human: Vec<FormattedHumanRecord>,
    pub hex: Vec<FormattedByteRecord>,
    pub binary: Vec<FormattedByteRecord>,
}

impl LogSnapshot {
    pub fn len(&self) -> usize {
        self.human.len()
    }

    pub fn is_empty(&self) -> bool {
        self.human.is_empty()
    }
}

/// Human, hex and binary histories kept in lockstep.
///
/// The Nth pushed message is the Nth entry of every view, so all three
/// always have the same length.
#[derive(Debug)]
pub struct MessageLog {
    human: History<FormattedHumanRecord>,
    hex: History<FormattedByteRecord>,
    binary: History<FormattedByteRecord>,
}

impl MessageLog {
    /// Create a log keeping at most `max_messages` per view
    pub fn new(max_messages: usize) -> Self {
        Self {
            human: History::new(max_messages),
            hex: History::new(max_messages),
            binary: History::new(max_messages),
        }
    }

    /// Format a message three ways and append it to every view.
    ///
    /// Returns the changes applied, which are identical for all views.
    pub fn push(&mut self, msg: &RawMidiMessage) -> Vec<HistoryChange> {
        self.append(format_all(msg))
    }

    /// Append an already formatted message to every view
    pub fn append(&mut self, formatted: FormattedMessage) -> Vec<HistoryChange> {
        let changes = self.human.append(formatted.human);
        self.hex.append(formatted.hex);
        self.binary.append(formatted.binary);
        changes
    }

    /// Remove every message from all views
    pub fn clear(&mut self) -> HistoryChange {
        self.human.clear();
        self.hex.clear();
        let change = self.binary.clear();
        info!("Message log cleared");
        change
    }

    /// Subscribe to the changes of one view
    pub fn subscribe(
        &mut self,
        view: View,
        observer: impl FnMut(&HistoryChange) + Send + 'static,
    ) {
        match view {
            View::Human => self.human.subscribe(observer),
            View::Hex => self.hex.subscribe(observer),
            View::Binary => self.binary.subscribe(observer),
        }
    }

    pub fn human(&self) -> &History<FormattedHumanRecord> {
        &self.human
    }

    pub fn hex(&self) -> &History<FormattedByteRecord> {
        &self.hex
    }

    pub fn binary(&self) -> &History<FormattedByteRecord> {
        &self.binary
    }

    /// Copies of all three views
    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot {
            human: self.human.get_all(),
            hex: self.hex.get_all(),
            binary: self.binary.get_all(),
        }
    }

    /// Export the current contents to a CSV file.
    ///
    /// Returns false on failure; the cause is logged.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> bool {
        let snapshot = self.snapshot();
        debug!("Exporting {} messages", snapshot.len());
        CsvExporter::new(path.as_ref()).export_merged(
            &snapshot.human,
            &snapshot.hex,
            &snapshot.binary,
        )
    }

    pub fn len(&self) -> usize {
        self.human.len()
    }

    pub fn is_empty(&self) -> bool {
        self.human.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.human.capacity()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}
