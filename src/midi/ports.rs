// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Port name normalization and selection tracking.
//!
//! The MIDI backend reports port names that include virtual client endpoints
//! and, on ALSA, a ` <client>:<port>` suffix whose numbers change between
//! sessions. The normalizer removes both so the list is stable enough to
//! diff and to select from.

use tracing::{debug, info};

/// Substrings of the virtual endpoints created by the MIDI backend itself
pub const DEFAULT_EXCLUDED_KEYWORDS: [&str; 2] = ["RtMidiOut Client", "RtMidiIn Client"];

/// Whether the host MIDI subsystem appends unstable port numbers
pub fn host_strips_port_numbers() -> bool {
    cfg!(target_os = "linux")
}

/// Filters and cleans raw port names for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PortNameNormalizer {
    excluded_keywords: Vec<String>,
    strip_port_numbers: bool,
}

impl PortNameNormalizer {
    /// Create a normalizer with explicit settings
    pub fn new(excluded_keywords: Vec<String>, strip_port_numbers: bool) -> Self {
        Self {
            excluded_keywords,
            strip_port_numbers,
        }
    }

    /// Normalizer with the default keywords and the host's stripping rule
    pub fn for_host() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            host_strips_port_numbers(),
        )
    }

    /// Normalize a list of raw port names
    pub fn normalize<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        normalize(names, &self.excluded_keywords, self.strip_port_numbers)
    }

    /// Whether a raw port name is hidden from the list
    pub fn is_excluded(&self, name: &str) -> bool {
        is_excluded(name, &self.excluded_keywords)
    }

    /// Position in `names` of the entry listed at `listed_index` after
    /// normalization. Listed numbers skip excluded ports, raw ones don't.
    pub fn raw_index<S: AsRef<str>>(&self, names: &[S], listed_index: usize) -> Option<usize> {
        let mut listed = 0;
        for (i, name) in names.iter().enumerate() {
            let name: &str = name.as_ref();
            if self.is_excluded(name) {
                continue;
            }
            if listed == listed_index {
                return Some(i);
            }
            listed += 1;
        }
        None
    }

    pub fn excluded_keywords(&self) -> &[String] {
        &self.excluded_keywords
    }

    pub fn strips_port_numbers(&self) -> bool {
        self.strip_port_numbers
    }
}

impl Default for PortNameNormalizer {
    fn default() -> Self {
        Self::for_host()
    }
}

/// Drop names containing any excluded keyword and optionally strip the
/// trailing ` <digits>:<digits>` suffix.
///
/// Keyword matching is a case-sensitive substring test. Order is preserved
/// and duplicates are kept.
pub fn normalize<S: AsRef<str>, K: AsRef<str>>(
    names: &[S],
    excluded_keywords: &[K],
    strip_port_numbers: bool,
) -> Vec<String> {
    let mut result = Vec::with_capacity(names.len());

    for name in names {
        let name: &str = name.as_ref();
        if is_excluded(name, excluded_keywords) {
            continue;
        }

        if strip_port_numbers {
            result.push(strip_port_suffix(name).to_string());
        } else {
            result.push(name.to_string());
        }
    }

    result
}

fn is_excluded<K: AsRef<str>>(name: &str, excluded_keywords: &[K]) -> bool {
    excluded_keywords.iter().any(|keyword| {
        let keyword: &str = keyword.as_ref();
        name.contains(keyword)
    })
}

/// Remove a trailing ` <digits>:<digits>` suffix, if present
pub fn strip_port_suffix(name: &str) -> &str {
    let Some((head, tail)) = name.rsplit_once(' ') else {
        return name;
    };
    let Some((client, port)) = tail.split_once(':') else {
        return name;
    };
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if is_number(client) && is_number(port) {
        head
    } else {
        name
    }
}

/// Outcome of syncing the selection against a fresh port list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSync {
    /// The list did not change
    Unchanged,
    /// The list changed; the selection (if any) is still available
    Refreshed,
    /// The list changed and the selected port disappeared
    SelectionLost(String),
}

/// Tracks the available input ports and the selected one.
#[derive(Debug, Clone, Default)]
pub struct PortSelection {
    ports: Vec<String>,
    selected: Option<String>,
}

impl PortSelection {
    /// Create from an initial normalized port list
    pub fn new(ports: Vec<String>) -> Self {
        Self {
            ports,
            selected: None,
        }
    }

    /// Currently known ports
    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    /// Currently selected port
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a port by name. Returns false if it is not in the list.
    pub fn select(&mut self, name: &str) -> bool {
        if self.ports.iter().any(|p| p == name) {
            self.selected = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Replace the port list with a fresh snapshot
    pub fn sync(&mut self, ports: Vec<String>) -> PortSync {
        if ports == self.ports {
            return PortSync::Unchanged;
        }

        debug!("Port list changed: {:?}", ports);
        self.ports = ports;

        match self.selected.take() {
            Some(current) if !self.ports.contains(&current) => {
                info!("Port '{}' no longer available", current);
                PortSync::SelectionLost(current)
            }
            current => {
                self.selected = current;
                PortSync::Refreshed
            }
        }
    }
}
