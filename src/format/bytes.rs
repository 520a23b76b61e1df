// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hexadecimal and binary byte views.

use super::FormattedByteRecord;
use crate::midi::RawMidiMessage;

/// Format the first three bytes as `0xFF`-style hex
pub fn format_hex(msg: &RawMidiMessage) -> FormattedByteRecord {
    byte_record(&msg.bytes, |b| format!("0x{:02X}", b))
}

/// Format the first three bytes as 8-digit binary
pub fn format_binary(msg: &RawMidiMessage) -> FormattedByteRecord {
    byte_record(&msg.bytes, |b| format!("{:08b}", b))
}

fn byte_record(bytes: &[u8], fmt: impl Fn(u8) -> String) -> FormattedByteRecord {
    let slot = |i: usize| bytes.get(i).map(|&b| fmt(b)).unwrap_or_default();
    FormattedByteRecord {
        status_byte: slot(0),
        data_byte_1: slot(1),
        data_byte_2: slot(2),
    }
}
