// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Human-readable message descriptions.

use super::FormattedHumanRecord;
use crate::midi::tables::{
    controller_name, note_name, quarter_frame_name, MIDI_MAX_VALUE, PITCH_MAX,
};
use crate::midi::{MessageKind, RawMidiMessage};

/// Describe a message in words.
///
/// The channel is shown 1-based. Kinds without dedicated formatting get their
/// name title-cased and an empty detail.
pub fn format_human(msg: &RawMidiMessage) -> FormattedHumanRecord {
    let channel = msg
        .channel
        .map(|c| (u16::from(c) + 1).to_string())
        .unwrap_or_default();
    let note = msg.note.map(|n| n.to_string()).unwrap_or_default();

    let mut record = FormattedHumanRecord {
        message_type: String::new(),
        channel,
        note,
        detail: String::new(),
    };

    match &msg.kind {
        MessageKind::NoteOn | MessageKind::NoteOff => {
            if let Some((n, name)) = msg.note.and_then(|n| Some((n, note_name(n)?))) {
                record.note = format!("{} ({})", name, n);
            }
            let velocity = msg.velocity.unwrap_or(0);
            record.message_type = title_case(msg.kind.as_str());
            record.detail = format!(
                "Velocity: {}% ({})",
                seven_bit_percent(velocity),
                velocity
            );
        }
        MessageKind::PolyTouch => {
            let pressure = msg.value.unwrap_or(0);
            record.message_type = "Polyphonic Touch".to_string();
            record.detail = format!(
                "{} → {}% ({})",
                msg.note.unwrap_or(0),
                seven_bit_percent(pressure),
                pressure
            );
        }
        MessageKind::ControlChange => {
            let control = msg.control.unwrap_or(0);
            let name = controller_name(control)
                .map(str::to_string)
                .unwrap_or_else(|| format!("CC {}", control));
            record.message_type = format!("Control Change {}", control);
            record.detail = format!("{}: {}", name, msg.value.unwrap_or(0));
        }
        MessageKind::ProgramChange => {
            record.message_type = "Program Change".to_string();
            record.detail = format!("Program: {}", msg.program.unwrap_or(0));
        }
        MessageKind::Aftertouch => {
            let value = msg.value.unwrap_or(0);
            record.message_type = "Aftertouch".to_string();
            record.detail = format!("{}% ({})", seven_bit_percent(value), value);
        }
        MessageKind::PitchWheel => {
            let pitch = msg.pitch.unwrap_or(0);
            record.message_type = "Pitch Bend".to_string();
            record.detail = format!(
                "Pitch: {}% ({})",
                percent(pitch.into(), PITCH_MAX.into()),
                pitch
            );
        }
        MessageKind::QuarterFrame => {
            let frame_type = msg.frame_type.unwrap_or(0);
            let name = quarter_frame_name(frame_type)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Type {}", frame_type));
            record.message_type = "MTC Quarter Frame".to_string();
            record.detail = format!("{}: {}", name, msg.frame_value.unwrap_or(0));
        }
        MessageKind::SongPos => {
            record.message_type = "Song Position".to_string();
            record.detail = format!("Position: {}", msg.pos.unwrap_or(0));
        }
        MessageKind::SongSelect => {
            record.message_type = "Song Select".to_string();
            record.detail = format!("Song: {}", msg.song.unwrap_or(0));
        }
        MessageKind::Sysex => {
            record.message_type = "System Exclusive".to_string();
            record.detail = format!("Data: {} bytes", msg.data.len());
        }
        MessageKind::Other(name) => {
            record.message_type = title_case(name);
        }
    }

    record
}

/// Percentage of a 7-bit value, rounded to a whole number
fn seven_bit_percent(value: u8) -> i64 {
    percent(value.into(), MIDI_MAX_VALUE.into())
}

/// `value / max * 100`, rounded to the nearest integer
fn percent(value: i32, max: i32) -> i64 {
    (f64::from(value) / f64::from(max) * 100.0).round() as i64
}

/// Replace underscores with spaces and capitalize each word.
///
/// A letter is uppercased when it follows a non-letter and lowercased
/// otherwise, so `note_on` becomes `Note On` and `tune_request` becomes
/// `Tune Request`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_is_letter = false;

    for c in raw.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_on(note: u8, velocity: u8) -> RawMidiMessage {
        RawMidiMessage::new(MessageKind::NoteOn)
            .with_channel(0)
            .with_note(note)
            .with_velocity(velocity)
    }

    #[test]
    fn test_note_on_middle_c() {
        let record = format_human(&note_on(60, 100));
        assert_eq!(record.message_type, "Note On");
        assert_eq!(record.channel, "1");
        assert_eq!(record.note, "C4 (60)");
        assert_eq!(record.detail, "Velocity: 79% (100)");
    }

    #[test]
    fn test_note_off() {
        let msg = RawMidiMessage::new(MessageKind::NoteOff)
            .with_channel(15)
            .with_note(69)
            .with_velocity(127);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Note Off");
        assert_eq!(record.channel, "16");
        assert_eq!(record.note, "A4 (69)");
        assert_eq!(record.detail, "Velocity: 100% (127)");
    }

    #[test]
    fn test_note_without_velocity_defaults_to_zero() {
        let msg = RawMidiMessage::new(MessageKind::NoteOn).with_note(0);
        let record = format_human(&msg);
        assert_eq!(record.note, "C-1 (0)");
        assert_eq!(record.detail, "Velocity: 0% (0)");
        assert_eq!(record.channel, "");
    }

    #[test]
    fn test_note_out_of_table_stays_numeric() {
        let msg = RawMidiMessage::new(MessageKind::NoteOn).with_note(200);
        assert_eq!(format_human(&msg).note, "200");
    }

    #[test]
    fn test_note_missing_is_empty() {
        let record = format_human(&RawMidiMessage::new(MessageKind::NoteOff));
        assert_eq!(record.note, "");
        assert_eq!(record.message_type, "Note Off");
    }

    #[test]
    fn test_polytouch() {
        let msg = RawMidiMessage::new(MessageKind::PolyTouch)
            .with_channel(1)
            .with_note(64)
            .with_value(64);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Polyphonic Touch");
        assert_eq!(record.channel, "2");
        assert_eq!(record.note, "64");
        assert_eq!(record.detail, "64 → 50% (64)");
    }

    #[test]
    fn test_control_change_named() {
        let msg = RawMidiMessage::new(MessageKind::ControlChange)
            .with_channel(0)
            .with_control(7)
            .with_value(100);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Control Change 7");
        assert_eq!(record.channel, "1");
        assert_eq!(record.note, "");
        assert_eq!(record.detail, "Volume: 100");
    }

    #[test]
    fn test_control_change_unnamed() {
        let msg = RawMidiMessage::new(MessageKind::ControlChange)
            .with_control(3)
            .with_value(12);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Control Change 3");
        assert_eq!(record.detail, "CC 3: 12");
    }

    #[test]
    fn test_program_change() {
        let msg = RawMidiMessage::new(MessageKind::ProgramChange)
            .with_channel(9)
            .with_program(42);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Program Change");
        assert_eq!(record.channel, "10");
        assert_eq!(record.detail, "Program: 42");
    }

    #[test]
    fn test_aftertouch() {
        let msg = RawMidiMessage::new(MessageKind::Aftertouch).with_value(127);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Aftertouch");
        assert_eq!(record.detail, "100% (127)");
    }

    #[test]
    fn test_pitchwheel_extremes() {
        let detail = |pitch| {
            format_human(&RawMidiMessage::new(MessageKind::PitchWheel).with_pitch(pitch)).detail
        };
        assert_eq!(detail(8191), "Pitch: 100% (8191)");
        assert_eq!(detail(-8191), "Pitch: -100% (-8191)");
        assert_eq!(detail(-8192), "Pitch: -100% (-8192)");
        assert_eq!(detail(0), "Pitch: 0% (0)");
        assert_eq!(detail(4096), "Pitch: 50% (4096)");
    }

    #[test]
    fn test_pitchwheel_small_negative_has_no_signed_zero() {
        let msg = RawMidiMessage::new(MessageKind::PitchWheel).with_pitch(-1);
        assert_eq!(format_human(&msg).detail, "Pitch: 0% (-1)");
    }

    #[test]
    fn test_pitchwheel_label() {
        let record = format_human(&RawMidiMessage::new(MessageKind::PitchWheel));
        assert_eq!(record.message_type, "Pitch Bend");
        assert_eq!(record.detail, "Pitch: 0% (0)");
    }

    #[test]
    fn test_quarter_frame() {
        let msg = RawMidiMessage::new(MessageKind::QuarterFrame).with_frame(2, 9);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "MTC Quarter Frame");
        assert_eq!(record.detail, "Seconds LS: 9");
        assert_eq!(record.channel, "");
    }

    #[test]
    fn test_quarter_frame_unknown_piece() {
        let msg = RawMidiMessage::new(MessageKind::QuarterFrame).with_frame(9, 1);
        assert_eq!(format_human(&msg).detail, "Type 9: 1");
    }

    #[test]
    fn test_song_position_and_select() {
        let pos = format_human(&RawMidiMessage::new(MessageKind::SongPos).with_pos(1234));
        assert_eq!(pos.message_type, "Song Position");
        assert_eq!(pos.detail, "Position: 1234");

        let select = format_human(&RawMidiMessage::new(MessageKind::SongSelect).with_song(3));
        assert_eq!(select.message_type, "Song Select");
        assert_eq!(select.detail, "Song: 3");
    }

    #[test]
    fn test_sysex() {
        let msg = RawMidiMessage::parse(&[0xF0, 0x41, 0x10, 0x42, 0x12, 0xF7]).unwrap();
        let record = format_human(&msg);
        assert_eq!(record.message_type, "System Exclusive");
        assert_eq!(record.detail, "Data: 4 bytes");
    }

    #[test]
    fn test_other_kinds_fall_back() {
        let record = format_human(&RawMidiMessage::parse(&[0xFE]).unwrap());
        assert_eq!(record.message_type, "Active Sensing");
        assert_eq!(record.detail, "");
        assert_eq!(record.channel, "");
        assert_eq!(record.note, "");

        let clock = format_human(&RawMidiMessage::parse(&[0xF8]).unwrap());
        assert_eq!(clock.message_type, "Clock");
    }

    #[test]
    fn test_unknown_kind_passes_fields_through() {
        let msg = RawMidiMessage::new(MessageKind::from_name("weird_thing"))
            .with_channel(4)
            .with_note(61);
        let record = format_human(&msg);
        assert_eq!(record.message_type, "Weird Thing");
        assert_eq!(record.channel, "5");
        assert_eq!(record.note, "61");
        assert_eq!(record.detail, "");
    }

    #[test]
    fn test_every_parsed_status_formats() {
        for status in 0x80..=0xFFu8 {
            let record = format_human(&RawMidiMessage::parse(&[status, 0x40, 0x40]).unwrap());
            assert!(!record.message_type.is_empty(), "status {:02X}", status);
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("note_on"), "Note On");
        assert_eq!(title_case("tune_request"), "Tune Request");
        assert_eq!(title_case("CLOCK"), "Clock");
        assert_eq!(title_case("song2select"), "Song2Select");
        assert_eq!(title_case(""), "");
    }
}
