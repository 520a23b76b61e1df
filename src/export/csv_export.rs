// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! CSV export of the message log.
//!
//! The three views are zipped by position into one row per message with the
//! columns `Type, Channel, Note, Detail, Hex, Binary`.

use std::io;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::format::{FormattedByteRecord, FormattedHumanRecord};

/// CSV header, in column order
pub const FIELDNAMES: [&str; 6] = ["Type", "Channel", "Note", "Detail", "Hex", "Binary"];

/// Export failures
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be written
    #[error("failed to write CSV file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The CSV writer failed
    #[error("failed to write CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedExportRow {
    pub message_type: String,
    pub channel: String,
    pub note: String,
    pub detail: String,
    pub hex: String,
    pub binary: String,
}

impl MergedExportRow {
    /// Merge the three views of one message
    pub fn merge(
        human: &FormattedHumanRecord,
        hex: &FormattedByteRecord,
        binary: &FormattedByteRecord,
    ) -> Self {
        Self {
            message_type: human.message_type.clone(),
            channel: human.channel.clone(),
            note: human.note.clone(),
            detail: human.detail.clone(),
            hex: hex.joined(),
            binary: binary.joined(),
        }
    }

    /// Fields in `FIELDNAMES` order
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.message_type,
            &self.channel,
            &self.note,
            &self.detail,
            &self.hex,
            &self.binary,
        ]
    }
}

/// Zip the three views into rows. The shortest view bounds the output.
pub fn merge_rows(
    human: &[FormattedHumanRecord],
    hex: &[FormattedByteRecord],
    binary: &[FormattedByteRecord],
) -> Vec<MergedExportRow> {
    human
        .iter()
        .zip(hex)
        .zip(binary)
        .map(|((h, x), b)| MergedExportRow::merge(h, x, b))
        .collect()
}

/// Writes merged message views to a CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    filepath: PathBuf,
}

impl CsvExporter {
    /// Create an exporter for the given destination
    pub fn new<P: AsRef<Path>>(filepath: P) -> Self {
        let filepath = filepath.as_ref().to_path_buf();
        debug!("CsvExporter initialized with filepath: {:?}", filepath);
        Self { filepath }
    }

    /// Destination path
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// Export the three views, reporting only success or failure.
    ///
    /// Failures are logged and never propagated.
    pub fn export_merged(
        &self,
        human: &[FormattedHumanRecord],
        hex: &[FormattedByteRecord],
        binary: &[FormattedByteRecord],
    ) -> bool {
        match self.try_export_merged(human, hex, binary) {
            Ok(_) => true,
            Err(e) => {
                error!("Export to {:?} failed: {}", self.filepath, e);
                false
            }
        }
    }

    /// Export the three views, returning the number of rows written.
    ///
    /// The file is written to a temporary file next to the destination and
    /// renamed over it, so the destination is either fully replaced or left
    /// untouched.
    pub fn try_export_merged(
        &self,
        human: &[FormattedHumanRecord],
        hex: &[FormattedByteRecord],
        binary: &[FormattedByteRecord],
    ) -> Result<usize, ExportError> {
        info!(
            "Starting export to {:?} with {} messages",
            self.filepath,
            human.len()
        );

        let rows = merge_rows(human, hex, binary);
        debug!("Merged {} messages", rows.len());

        let written = write_rows(&self.filepath, &rows);
        match &written {
            Ok(()) => info!("Export successful: {:?}", self.filepath),
            Err(e) => debug!("Export to {:?} abandoned: {}", self.filepath, e),
        }

        written.map(|()| rows.len())
    }
}

/// Export the three views to `destination`; see `CsvExporter::export_merged`
pub fn export_merged<P: AsRef<Path>>(
    human: &[FormattedHumanRecord],
    hex: &[FormattedByteRecord],
    binary: &[FormattedByteRecord],
    destination: P,
) -> bool {
    CsvExporter::new(destination).export_merged(human, hex, binary)
}

/// Write into an anonymous sibling file and persist it over `destination`.
/// The sibling is deleted when dropped on any error path.
fn write_rows(destination: &Path, rows: &[MergedExportRow]) -> Result<(), ExportError> {
    debug!("Writing {} messages to CSV", rows.len());

    let dir = parent_dir(destination);
    let mut file = NamedTempFile::new_in(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file.as_file_mut());

        writer.write_record(FIELDNAMES)?;
        for row in rows {
            writer.write_record(row.fields())?;
        }
        writer.flush().map_err(|source| ExportError::Io {
            path: destination.to_path_buf(),
            source,
        })?;
    }

    file.persist(destination).map_err(|e| ExportError::Io {
        path: destination.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Directory holding `destination`, `.` for a bare file name
fn parent_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
