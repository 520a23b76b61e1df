// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lookup tables for note names, controller names and MTC pieces.

/// Maximum value of a 7-bit data byte
pub const MIDI_MAX_VALUE: u8 = 127;

/// Positive pitch bend limit used for percentage display
pub const PITCH_MAX: i16 = 8191;

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Name and octave of a MIDI note (middle C = 60 = C4).
///
/// Returns `None` outside 0-127.
pub fn note_details(note: u8) -> Option<(&'static str, i8)> {
    if note > MIDI_MAX_VALUE {
        return None;
    }
    let octave = (note / 12) as i8 - 1;
    Some((NOTE_NAMES[(note % 12) as usize], octave))
}

/// Note name with octave, e.g. `C4`
pub fn note_name(note: u8) -> Option<String> {
    note_details(note).map(|(name, octave)| format!("{}{}", name, octave))
}

/// Standard name of a control change number, if it has one
pub fn controller_name(control: u8) -> Option<&'static str> {
    let name = match control {
        0 => "Bank Select",
        1 => "Modulation",
        2 => "Breath Controller",
        4 => "Foot Controller",
        5 => "Portamento Time",
        6 => "Data Entry MSB",
        7 => "Volume",
        8 => "Balance",
        10 => "Pan",
        11 => "Expression",
        12 => "Effect Control 1",
        13 => "Effect Control 2",
        16 => "General Purpose 1",
        17 => "General Purpose 2",
        18 => "General Purpose 3",
        19 => "General Purpose 4",
        32 => "Bank Select LSB",
        33 => "Modulation LSB",
        38 => "Data Entry LSB",
        64 => "Sustain Pedal",
        65 => "Portamento",
        66 => "Sostenuto",
        67 => "Soft Pedal",
        68 => "Legato Footswitch",
        69 => "Hold 2",
        70 => "Sound Variation",
        71 => "Resonance",
        72 => "Release Time",
        73 => "Attack Time",
        74 => "Cutoff",
        75 => "Decay Time",
        76 => "Vibrato Rate",
        77 => "Vibrato Depth",
        78 => "Vibrato Delay",
        84 => "Portamento Control",
        91 => "Reverb",
        92 => "Tremolo",
        93 => "Chorus",
        94 => "Detune",
        95 => "Phaser",
        96 => "Data Increment",
        97 => "Data Decrement",
        98 => "NRPN LSB",
        99 => "NRPN MSB",
        100 => "RPN LSB",
        101 => "RPN MSB",
        120 => "All Sound Off",
        121 => "Reset All Controllers",
        122 => "Local Control",
        123 => "All Notes Off",
        124 => "Omni Mode Off",
        125 => "Omni Mode On",
        126 => "Mono Mode On",
        127 => "Poly Mode On",
        _ => return None,
    };
    Some(name)
}

/// Name of an MTC quarter frame piece (0-7)
pub fn quarter_frame_name(frame_type: u8) -> Option<&'static str> {
    const NAMES: [&str; 8] = [
        "Frames LS",
        "Frames MS",
        "Seconds LS",
        "Seconds MS",
        "Minutes LS",
        "Minutes MS",
        "Hours LS",
        "Hours MS",
    ];
    NAMES.get(frame_type as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_name() {
        assert_eq!(note_name(60).as_deref(), Some("C4"));
        assert_eq!(note_name(69).as_deref(), Some("A4"));
        assert_eq!(note_name(61).as_deref(), Some("C#4"));
        assert_eq!(note_name(0).as_deref(), Some("C-1"));
        assert_eq!(note_name(127).as_deref(), Some("G9"));
        assert_eq!(note_name(128), None);
    }

    #[test]
    fn test_note_details() {
        assert_eq!(note_details(21), Some(("A", 0)));
        assert_eq!(note_details(108), Some(("C", 8)));
    }

    #[test]
    fn test_controller_names() {
        assert_eq!(controller_name(1), Some("Modulation"));
        assert_eq!(controller_name(7), Some("Volume"));
        assert_eq!(controller_name(64), Some("Sustain Pedal"));
        assert_eq!(controller_name(3), None);
        assert_eq!(controller_name(200), None);
    }

    #[test]
    fn test_quarter_frame_names() {
        assert_eq!(quarter_frame_name(0), Some("Frames LS"));
        assert_eq!(quarter_frame_name(7), Some("Hours MS"));
        assert_eq!(quarter_frame_name(8), None);
    }
}
