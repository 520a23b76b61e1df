// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Formatting of MIDI messages into display records.
//!
//! Every incoming message yields three sibling records:
//! - a human-readable description (type, channel, note, detail)
//! - the first three wire bytes in hexadecimal
//! - the first three wire bytes in binary
//!
//! Formatting is pure and never fails; missing fields fall back to zero and
//! unknown message kinds get a generic title-cased label.

pub mod bytes;
pub mod human;

pub use bytes::{format_binary, format_hex};
pub use human::format_human;

use crate::midi::RawMidiMessage;

/// Human-readable view of one message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedHumanRecord {
    /// Display name, e.g. "Note On" or "Control Change 7"
    pub message_type: String,
    /// 1-based channel, empty for system messages
    pub channel: String,
    /// Note name with number, or the raw note number, or empty
    pub note: String,
    /// Kind-specific description, e.g. "Velocity: 79% (100)"
    pub detail: String,
}

/// Byte view of one message (shared by hex and binary)
///
/// Only the status byte and the first two data bytes are represented. A slot
/// is empty when the message is shorter than that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedByteRecord {
    pub status_byte: String,
    pub data_byte_1: String,
    pub data_byte_2: String,
}

impl FormattedByteRecord {
    /// The three slots in wire order
    pub fn slots(&self) -> [&str; 3] {
        [&self.status_byte, &self.data_byte_1, &self.data_byte_2]
    }

    /// Non-empty slots joined by single spaces
    pub fn joined(&self) -> String {
        self.slots()
            .iter()
            .filter(|slot| !slot.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The three views of one message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormattedMessage {
    pub human: FormattedHumanRecord,
    pub hex: FormattedByteRecord,
    pub binary: FormattedByteRecord,
}

/// Format a message in all three representations
pub fn format_all(msg: &RawMidiMessage) -> FormattedMessage {
    FormattedMessage {
        human: format_human(msg),
        hex: format_hex(msg),
        binary: format_binary(msg),
    }
}
