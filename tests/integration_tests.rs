// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for MidiWatch
//!
//! These tests verify that decoding, formatting, history and export work
//! together through the public API, without requiring MIDI hardware.

use std::fs;
use std::sync::{Arc, Mutex};

use midiwatch::export::{export_merged, FIELDNAMES};
use midiwatch::history::View;
use midiwatch::midi::{normalize, PortSelection, PortSync};
use midiwatch::{
    format_binary, format_hex, format_human, HistoryChange, MessageKind, MessageLog,
    MonitorConfig, RawMidiMessage,
};
use tempfile::tempdir;

/// A short performance: notes, controllers, bends, clock and a sysex dump
fn session_packets() -> Vec<Vec<u8>> {
    vec![
        vec![0x90, 60, 100],                         // Note On C4
        vec![0xB0, 64, 127],                         // Sustain down
        vec![0xE0, 0x7F, 0x7F],                      // Pitch bend max
        vec![0x80, 60, 0],                           // Note Off C4
        vec![0xC3, 12],                              // Program change, channel 4
        vec![0xF8],                                  // Clock
        vec![0xF0, 0x7E, 0x7F, 0x06, 0x01, 0xF7],    // Identity request
        vec![0xF1, 0x21],                            // MTC quarter frame
    ]
}

#[test]
fn test_full_pipeline_export_round_trip() {
    let mut log = MessageLog::new(100);
    for packet in session_packets() {
        let msg = RawMidiMessage::parse(&packet).expect("valid packet");
        log.push(&msg);
    }
    assert_eq!(log.len(), 8);

    let dir = tempdir().unwrap();
    let path = dir.path().join("session.csv");
    assert!(log.export(&path));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), FIELDNAMES.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    let snapshot = log.snapshot();
    assert_eq!(rows.len(), snapshot.len());

    for (i, row) in rows.iter().enumerate() {
        assert_eq!(&row[0], snapshot.human[i].message_type);
        assert_eq!(&row[1], snapshot.human[i].channel);
        assert_eq!(&row[2], snapshot.human[i].note);
        assert_eq!(&row[3], snapshot.human[i].detail);
        assert_eq!(&row[4], snapshot.hex[i].joined());
        assert_eq!(&row[5], snapshot.binary[i].joined());
    }

    // Spot checks on exact text
    assert_eq!(&rows[0][2], "C4 (60)");
    assert_eq!(&rows[0][3], "Velocity: 79% (100)");
    assert_eq!(&rows[1][0], "Control Change 64");
    assert_eq!(&rows[1][3], "Sustain Pedal: 127");
    assert_eq!(&rows[2][3], "Pitch: 100% (8191)");
    assert_eq!(&rows[4][1], "4");
    assert_eq!(&rows[4][4], "0xC3 0x0C");
    assert_eq!(&rows[5][0], "Clock");
    assert_eq!(&rows[5][1], "");
    assert_eq!(&rows[5][4], "0xF8");
    assert_eq!(&rows[5][5], "11111000");
    assert_eq!(&rows[6][3], "Data: 4 bytes");
    assert_eq!(&rows[6][4], "0xF0 0x7E 0x7F");
    assert_eq!(&rows[7][3], "Seconds LS: 1");
}

#[test]
fn test_empty_slots_are_empty_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clock.csv");

    let mut log = MessageLog::new(10);
    log.push(&RawMidiMessage::parse(&[0xFA]).unwrap());
    assert!(log.export(&path));

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("None"));
    assert!(!text.contains("null"));
    assert_eq!(text.lines().nth(1), Some("Start,,,,0xFA,11111010"));
}

#[test]
fn test_log_eviction_is_reflected_in_export() {
    let capacity = 4;
    let mut log = MessageLog::new(capacity);
    for program in 0..=capacity as u8 {
        log.push(&RawMidiMessage::parse(&[0xC0, program]).unwrap());
    }

    let snapshot = log.snapshot();
    assert_eq!(snapshot.len(), capacity);
    assert_eq!(snapshot.human[0].detail, "Program: 1");
    assert_eq!(snapshot.human[capacity - 1].detail, "Program: 4");

    let dir = tempdir().unwrap();
    let path = dir.path().join("evicted.csv");
    assert!(export_merged(&snapshot.human, &snapshot.hex, &snapshot.binary, &path));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.records().count(), capacity);
}

#[test]
fn test_clear_then_continue() {
    let mut log = MessageLog::new(3);
    for packet in session_packets() {
        log.push(&RawMidiMessage::parse(&packet).unwrap());
    }
    log.clear();
    assert!(log.snapshot().is_empty());

    let changes = log.push(&RawMidiMessage::parse(&[0x90, 64, 64]).unwrap());
    assert_eq!(changes, vec![HistoryChange::Inserted { index: 0 }]);
    assert_eq!(log.human().get_all()[0].note, "E4 (64)");
}

#[test]
fn test_display_observer_can_mirror_rows() {
    // A display layer applying the notifications keeps an identical row count
    let rows = Arc::new(Mutex::new(0usize));
    let mirror = rows.clone();

    let mut log = MessageLog::new(2);
    log.subscribe(View::Human, move |change| {
        let mut rows = mirror.lock().unwrap();
        match change {
            HistoryChange::Inserted { .. } => *rows += 1,
            HistoryChange::Evicted { .. } => *rows -= 1,
            HistoryChange::Reset => *rows = 0,
        }
    });

    for packet in session_packets() {
        log.push(&RawMidiMessage::parse(&packet).unwrap());
        assert_eq!(*rows.lock().unwrap(), log.len());
    }
    log.clear();
    assert_eq!(*rows.lock().unwrap(), 0);
}

#[test]
fn test_formatters_accept_hand_built_messages() {
    let msg = RawMidiMessage::new(MessageKind::ControlChange)
        .with_channel(0)
        .with_control(7)
        .with_value(100)
        .with_bytes([0xB0, 0x07, 0x64]);

    let human = format_human(&msg);
    assert_eq!(human.message_type, "Control Change 7");
    assert_eq!(human.channel, "1");
    assert_eq!(human.detail, "Volume: 100");
    assert_eq!(format_hex(&msg).joined(), "0xB0 0x07 0x64");
    assert_eq!(format_binary(&msg).joined(), "10110000 00000111 01100100");
}

#[test]
fn test_port_refresh_flow() {
    let config = MonitorConfig::from_yaml("strip_port_numbers: true").unwrap();
    let normalizer = config.normalizer();

    let first = vec![
        "Midi Through:Midi Through Port-0 14:0".to_string(),
        "Keystation 49:Keystation 49 MIDI 1 20:0".to_string(),
        "RtMidiIn Client:RtMidi Input 130:0".to_string(),
    ];
    let mut selection = PortSelection::new(normalizer.normalize(&first));
    assert_eq!(
        selection.ports(),
        ["Midi Through:Midi Through Port-0", "Keystation 49:Keystation 49 MIDI 1"]
    );
    assert!(selection.select("Keystation 49:Keystation 49 MIDI 1"));

    // Same device re-enumerated with a different client number
    let renumbered = vec![
        "Midi Through:Midi Through Port-0 14:0".to_string(),
        "Keystation 49:Keystation 49 MIDI 1 24:0".to_string(),
    ];
    assert_eq!(selection.sync(normalizer.normalize(&renumbered)), PortSync::Unchanged);

    // Device unplugged
    let unplugged = vec!["Midi Through:Midi Through Port-0 14:0".to_string()];
    assert_eq!(
        selection.sync(normalizer.normalize(&unplugged)),
        PortSync::SelectionLost("Keystation 49:Keystation 49 MIDI 1".to_string())
    );
}

#[test]
fn test_normalize_examples() {
    let names = ["Virtual MIDI Port 128:0", "Synth 20:0"];
    assert_eq!(normalize(&names, &[] as &[&str], true), vec!["Virtual MIDI Port", "Synth"]);
    assert_eq!(normalize(&names, &[] as &[&str], false), names.to_vec());
    assert_eq!(normalize(&names, &["Synth"], false), vec!["Virtual MIDI Port 128:0"]);
}

#[test]
fn test_listed_number_opens_listed_port() {
    // Default keywords hide the backend's own client, which enumerates first
    let config = MonitorConfig::from_yaml("strip_port_numbers: true").unwrap();
    let normalizer = config.normalizer();
    let raw = vec![
        "RtMidiIn Client:RtMidi Input 130:0".to_string(),
        "Keys:Keys MIDI 1 24:0".to_string(),
    ];

    let listed = normalizer.normalize(&raw);
    assert_eq!(listed, ["Keys:Keys MIDI 1"]);

    let raw_index = normalizer.raw_index(&raw, 0).unwrap();
    assert_eq!(raw_index, 1);

    let mut selection = PortSelection::new(listed);
    let opened = normalizer.normalize(&[&raw[raw_index]]).pop().unwrap();
    assert!(selection.select(&opened));
    assert_eq!(
        selection.sync(normalizer.normalize(&raw[..1])),
        PortSync::SelectionLost("Keys:Keys MIDI 1".to_string())
    );
}
