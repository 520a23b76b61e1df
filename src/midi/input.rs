// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Live MIDI input.
//!
//! Raw packets arrive on the backend's callback thread and are handed to the
//! caller through a channel; the caller drains and decodes them on its own
//! thread at its own poll interval.

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{anyhow, Result};
use midir::{Ignore, MidiInput, MidiInputConnection, MidiInputPort};
use tracing::{debug, info, warn};

use super::message::RawMidiMessage;
use super::ports::PortNameNormalizer;

const CLIENT_NAME: &str = "MidiWatch Input";

/// An open MIDI input port
pub struct MidiInputSource {
    connection: Option<MidiInputConnection<()>>,
    receiver: Receiver<Vec<u8>>,
    port_name: String,
}

impl MidiInputSource {
    /// Connect to the input port at raw backend position `source_index`
    pub fn new(source_index: usize) -> Result<Self> {
        let midi_in = client()?;
        let ports = midi_in.ports();
        let port = ports.get(source_index).ok_or_else(|| {
            anyhow!(
                "MIDI source {} not found (only {} available)",
                source_index,
                ports.len()
            )
        })?;
        Self::connect(midi_in, port)
    }

    /// Connect to the port shown at `listed_index` by `--list-sources`,
    /// i.e. numbered after `normalizer` has dropped excluded ports
    pub fn open(listed_index: usize, normalizer: &PortNameNormalizer) -> Result<Self> {
        let midi_in = client()?;
        let ports = midi_in.ports();
        let names = port_names(&midi_in, &ports);

        let port = normalizer
            .raw_index(&names, listed_index)
            .and_then(|i| ports.get(i))
            .ok_or_else(|| {
                anyhow!(
                    "MIDI source {} not found (only {} listed)",
                    listed_index,
                    normalizer.normalize(&names).len()
                )
            })?;
        Self::connect(midi_in, port)
    }

    fn connect(midi_in: MidiInput, port: &MidiInputPort) -> Result<Self> {
        let port_name = midi_in
            .port_name(port)
            .map_err(|e| anyhow!("Failed to read MIDI port name: {}", e))?;

        debug!("Attempting to open MIDI input port '{}'", port_name);

        let (tx, rx): (Sender<Vec<u8>>, Receiver<Vec<u8>>) = mpsc::channel();

        let connection = midi_in
            .connect(
                port,
                "midiwatch-in",
                move |_timestamp, data, _| {
                    let _ = tx.send(data.to_vec());
                },
                (),
            )
            .map_err(|e| {
                warn!("Failed to open MIDI input port '{}': {}", port_name, e);
                anyhow!("Failed to connect to source: {}", e)
            })?;

        info!("MIDI input port '{}' opened successfully", port_name);

        Ok(Self {
            connection: Some(connection),
            receiver: rx,
            port_name,
        })
    }

    /// Name of the connected port
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Try to receive the next raw packet (non-blocking)
    pub fn try_recv_raw(&self) -> Option<Vec<u8>> {
        self.receiver.try_recv().ok()
    }

    /// Receive and decode all pending messages.
    ///
    /// Packets that do not decode (stray data bytes) are dropped.
    pub fn recv_all(&self) -> Vec<RawMidiMessage> {
        let mut messages = Vec::new();
        while let Some(packet) = self.try_recv_raw() {
            match RawMidiMessage::parse(&packet) {
                Some(msg) => messages.push(msg),
                None => debug!("Dropping undecodable packet {:02X?}", packet),
            }
        }
        messages
    }

    /// Close the port
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.close();
            info!("MIDI input port '{}' closed successfully", self.port_name);
        }
    }
}

impl Drop for MidiInputSource {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// List the raw names of all available MIDI input ports
pub fn list_sources() -> Result<Vec<String>> {
    let midi_in = client()?;
    Ok(port_names(&midi_in, &midi_in.ports()))
}

fn client() -> Result<MidiInput> {
    let mut midi_in =
        MidiInput::new(CLIENT_NAME).map_err(|e| anyhow!("Failed to create MIDI client: {}", e))?;
    // Sysex, timing and active sensing are all shown
    midi_in.ignore(Ignore::None);
    Ok(midi_in)
}

fn port_names(midi_in: &MidiInput, ports: &[MidiInputPort]) -> Vec<String> {
    ports
        .iter()
        .enumerate()
        .map(|(i, port)| {
            midi_in
                .port_name(port)
                .unwrap_or_else(|_| format!("Unknown {}", i))
        })
        .collect()
}
