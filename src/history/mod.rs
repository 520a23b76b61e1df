// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Bounded message history.
//!
//! This module provides:
//! - A generic fixed-capacity history with change notifications
//! - The three-view message log fed by the formatter

pub mod buffer;
pub mod log;

pub use buffer::{History, HistoryChange};
pub use log::{LogSnapshot, MessageLog, View, DEFAULT_MAX_MESSAGES};
