// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Export of the message log.

pub mod csv_export;

pub use csv_export::{
    export_merged, merge_rows, CsvExporter, ExportError, MergedExportRow, FIELDNAMES,
};

use chrono::{DateTime, Local, TimeZone};

/// Default export file name for the current local time
pub fn default_export_filename() -> String {
    export_filename_at(&Local::now())
}

/// Export file name for a given time, e.g. `midiwatch_2025-03-01_142530.csv`
pub fn export_filename_at<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("midiwatch_{}.csv", time.format("%Y-%m-%d_%H%M%S"))
}
