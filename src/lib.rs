// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MidiWatch - real-time MIDI monitor core.
//!
//! Incoming MIDI messages are decoded, formatted into human-readable, hex and
//! binary views, kept in bounded histories and exported to CSV.

pub mod config;
pub mod export;
pub mod format;
pub mod history;
pub mod logging;
pub mod midi;

pub use config::MonitorConfig;
pub use export::{CsvExporter, ExportError};
pub use format::{format_all, format_binary, format_hex, format_human};
pub use format::{FormattedByteRecord, FormattedHumanRecord, FormattedMessage};
pub use history::{History, HistoryChange, MessageLog};
pub use midi::{MessageKind, PortNameNormalizer, RawMidiMessage};
