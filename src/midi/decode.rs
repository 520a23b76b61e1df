// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Decoding of raw MIDI 1.0 byte packets into `RawMidiMessage`s.

use super::message::{MessageKind, RawMidiMessage};
use super::messages;

impl RawMidiMessage {
    /// Parse one complete MIDI message from raw bytes.
    ///
    /// Returns `None` for an empty packet or one that starts with a data
    /// byte. Truncated messages are still decoded; the fields whose data
    /// bytes are missing are left as `None`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let status = *data.first()?;
        if status < 0x80 {
            return None;
        }

        let d1 = data.get(1).map(|b| b & 0x7F);
        let d2 = data.get(2).map(|b| b & 0x7F);

        let mut msg = match status {
            0x80..=0xEF => {
                let channel = status & 0x0F;
                let msg = match status & 0xF0 {
                    messages::NOTE_OFF => RawMidiMessage {
                        kind: MessageKind::NoteOff,
                        note: d1,
                        velocity: d2,
                        ..Default::default()
                    },
                    // Velocity 0 stays a note_on: the monitor shows wire truth
                    messages::NOTE_ON => RawMidiMessage {
                        kind: MessageKind::NoteOn,
                        note: d1,
                        velocity: d2,
                        ..Default::default()
                    },
                    messages::POLY_AFTERTOUCH => RawMidiMessage {
                        kind: MessageKind::PolyTouch,
                        note: d1,
                        value: d2,
                        ..Default::default()
                    },
                    messages::CONTROL_CHANGE => RawMidiMessage {
                        kind: MessageKind::ControlChange,
                        control: d1,
                        value: d2,
                        ..Default::default()
                    },
                    messages::PROGRAM_CHANGE => RawMidiMessage {
                        kind: MessageKind::ProgramChange,
                        program: d1,
                        ..Default::default()
                    },
                    messages::CHANNEL_AFTERTOUCH => RawMidiMessage {
                        kind: MessageKind::Aftertouch,
                        value: d1,
                        ..Default::default()
                    },
                    _ => RawMidiMessage {
                        kind: MessageKind::PitchWheel,
                        pitch: combine_14bit(d1, d2).map(|v| v as i16 - 8192),
                        ..Default::default()
                    },
                };
                msg.with_channel(channel)
            }
            messages::SYSEX_START => {
                let payload = &data[1..];
                let end = payload
                    .iter()
                    .position(|&b| b == messages::SYSEX_END)
                    .unwrap_or(payload.len());
                RawMidiMessage::new(MessageKind::Sysex).with_data(&payload[..end])
            }
            messages::MTC_QUARTER_FRAME => RawMidiMessage {
                kind: MessageKind::QuarterFrame,
                frame_type: d1.map(|d| d >> 4),
                frame_value: d1.map(|d| d & 0x0F),
                ..Default::default()
            },
            messages::SONG_POSITION => RawMidiMessage {
                kind: MessageKind::SongPos,
                pos: combine_14bit(d1, d2),
                ..Default::default()
            },
            messages::SONG_SELECT => RawMidiMessage {
                kind: MessageKind::SongSelect,
                song: d1,
                ..Default::default()
            },
            other => RawMidiMessage::new(MessageKind::Other(system_name(other).to_string())),
        };

        msg.bytes = data.to_vec();
        Some(msg)
    }
}

/// Combine LSB/MSB data bytes into a 14-bit value
fn combine_14bit(lsb: Option<u8>, msb: Option<u8>) -> Option<u16> {
    Some(lsb? as u16 | (msb? as u16) << 7)
}

/// Name of a system message without dedicated formatting
fn system_name(status: u8) -> &'static str {
    match status {
        messages::TUNE_REQUEST => "tune_request",
        messages::TIMING_CLOCK => "clock",
        messages::START => "start",
        messages::CONTINUE => "continue",
        messages::STOP => "stop",
        messages::ACTIVE_SENSING => "active_sensing",
        messages::SYSTEM_RESET => "reset",
        _ => "undefined",
    }
}
