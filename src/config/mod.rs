// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for MidiWatch.
//!
//! Settings are read from a YAML file. Every field has a default, so an
//! empty file (or no file at all) yields a working configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::history::DEFAULT_MAX_MESSAGES;
use crate::midi::ports::{host_strips_port_numbers, PortNameNormalizer, DEFAULT_EXCLUDED_KEYWORDS};

/// Monitor settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorConfig {
    /// Messages kept per view before the oldest is evicted
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
    /// Port names containing any of these are hidden
    #[serde(default = "default_excluded_keywords")]
    pub excluded_keywords: Vec<String>,
    /// Strip the trailing ` <client>:<port>` numbers from port names
    #[serde(default = "host_strips_port_numbers")]
    pub strip_port_numbers: bool,
    /// How often pending input is drained, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// How often the port list is refreshed, in milliseconds
    #[serde(default = "default_port_refresh_ms")]
    pub port_refresh_ms: u64,
    /// Log level: trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_messages() -> usize {
    DEFAULT_MAX_MESSAGES
}
fn default_excluded_keywords() -> Vec<String> {
    DEFAULT_EXCLUDED_KEYWORDS.iter().map(|s| s.to_string()).collect()
}
fn default_poll_interval_ms() -> u64 {
    10
}
fn default_port_refresh_ms() -> u64 {
    3000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
            excluded_keywords: default_excluded_keywords(),
            strip_port_numbers: host_strips_port_numbers(),
            poll_interval_ms: default_poll_interval_ms(),
            port_refresh_ms: default_port_refresh_ms(),
            log_level: default_log_level(),
        }
    }
}

impl MonitorConfig {
    /// Load and validate a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_messages == 0 {
            bail!("max_messages must be at least 1");
        }
        if self.poll_interval_ms == 0 {
            bail!("poll_interval_ms must be at least 1");
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.log_level))
    }

    /// Port name normalizer for these settings
    pub fn normalizer(&self) -> PortNameNormalizer {
        PortNameNormalizer::new(self.excluded_keywords.clone(), self.strip_port_numbers)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn port_refresh(&self) -> Duration {
        Duration::from_millis(self.port_refresh_ms)
    }
}
