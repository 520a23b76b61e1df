// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Raw MIDI message model.
//!
//! A `RawMidiMessage` carries the wire bytes of one message together with the
//! semantic fields decoded from them. Every semantic field is optional: a
//! truncated message simply leaves fields absent and the formatter falls
//! back to zero.

use std::fmt;

/// Kind of a MIDI message.
///
/// The set is closed by the MIDI 1.0 protocol. Everything the monitor has no
/// dedicated formatting for (system real-time, tune request, undefined
/// statuses) is carried as `Other` with its snake_case name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    PolyTouch,
    ControlChange,
    ProgramChange,
    Aftertouch,
    PitchWheel,
    QuarterFrame,
    SongPos,
    SongSelect,
    Sysex,
    /// Any other message, e.g. `clock`, `start`, `active_sensing`
    Other(String),
}

impl MessageKind {
    /// Snake_case name of the kind, e.g. `note_on`
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::NoteOff => "note_off",
            MessageKind::NoteOn => "note_on",
            MessageKind::PolyTouch => "polytouch",
            MessageKind::ControlChange => "control_change",
            MessageKind::ProgramChange => "program_change",
            MessageKind::Aftertouch => "aftertouch",
            MessageKind::PitchWheel => "pitchwheel",
            MessageKind::QuarterFrame => "quarter_frame",
            MessageKind::SongPos => "songpos",
            MessageKind::SongSelect => "song_select",
            MessageKind::Sysex => "sysex",
            MessageKind::Other(name) => name,
        }
    }

    /// Look up a kind from its snake_case name.
    ///
    /// Unknown names become `Other`, never an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "note_off" => MessageKind::NoteOff,
            "note_on" => MessageKind::NoteOn,
            "polytouch" => MessageKind::PolyTouch,
            "control_change" => MessageKind::ControlChange,
            "program_change" => MessageKind::ProgramChange,
            "aftertouch" => MessageKind::Aftertouch,
            "pitchwheel" => MessageKind::PitchWheel,
            "quarter_frame" => MessageKind::QuarterFrame,
            "songpos" => MessageKind::SongPos,
            "song_select" => MessageKind::SongSelect,
            "sysex" => MessageKind::Sysex,
            other => MessageKind::Other(other.to_string()),
        }
    }

    /// Whether this is a channel voice message
    pub fn is_channel_voice(&self) -> bool {
        matches!(
            self,
            MessageKind::NoteOff
                | MessageKind::NoteOn
                | MessageKind::PolyTouch
                | MessageKind::ControlChange
                | MessageKind::ProgramChange
                | MessageKind::Aftertouch
                | MessageKind::PitchWheel
        )
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One incoming MIDI message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawMidiMessage {
    /// Message kind
    pub kind: MessageKind,
    /// Channel (0-15), channel voice messages only
    pub channel: Option<u8>,
    /// Note number (0-127)
    pub note: Option<u8>,
    /// Velocity (0-127)
    pub velocity: Option<u8>,
    /// Pressure or controller value (0-127)
    pub value: Option<u8>,
    /// Controller number (0-127)
    pub control: Option<u8>,
    /// Program number (0-127)
    pub program: Option<u8>,
    /// Pitch bend (-8192 to 8191)
    pub pitch: Option<i16>,
    /// MTC quarter frame piece (0-7)
    pub frame_type: Option<u8>,
    /// MTC quarter frame nibble (0-15)
    pub frame_value: Option<u8>,
    /// Song position in MIDI beats (0-16383)
    pub pos: Option<u16>,
    /// Song number (0-127)
    pub song: Option<u8>,
    /// System exclusive payload, without the 0xF0/0xF7 framing
    pub data: Vec<u8>,
    /// Wire bytes, status byte first
    pub bytes: Vec<u8>,
}

impl Default for MessageKind {
    fn default() -> Self {
        MessageKind::Other("unknown".to_string())
    }
}

impl RawMidiMessage {
    /// Create an empty message of the given kind
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the channel (0-based)
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Set the note number
    pub fn with_note(mut self, note: u8) -> Self {
        self.note = Some(note);
        self
    }

    /// Set the velocity
    pub fn with_velocity(mut self, velocity: u8) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Set the pressure/controller value
    pub fn with_value(mut self, value: u8) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the controller number
    pub fn with_control(mut self, control: u8) -> Self {
        self.control = Some(control);
        self
    }

    /// Set the program number
    pub fn with_program(mut self, program: u8) -> Self {
        self.program = Some(program);
        self
    }

    /// Set the pitch bend amount
    pub fn with_pitch(mut self, pitch: i16) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Set the quarter frame piece and value
    pub fn with_frame(mut self, frame_type: u8, frame_value: u8) -> Self {
        self.frame_type = Some(frame_type);
        self.frame_value = Some(frame_value);
        self
    }

    /// Set the song position
    pub fn with_pos(mut self, pos: u16) -> Self {
        self.pos = Some(pos);
        self
    }

    /// Set the song number
    pub fn with_song(mut self, song: u8) -> Self {
        self.song = Some(song);
        self
    }

    /// Set the sysex payload
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the wire bytes
    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = bytes.into();
        self
    }

    /// Status byte, if any bytes are present
    pub fn status(&self) -> Option<u8> {
        self.bytes.first().copied()
    }
}
