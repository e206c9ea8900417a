// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bus configuration
//!
//! ```toml
//! name = "ui"
//! delivery = "isolate"
//! ```

use crate::error::ConfigError;
use serde::Deserialize;

/// What happens when a listener panics during dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// The panic unwinds into the publisher; later listeners are skipped
    #[default]
    Propagate,
    /// The panic is caught and logged; dispatch moves on to the next listener
    Isolate,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    /// Label attached to every log line from this bus
    pub name: String,
    pub delivery: DeliveryPolicy,
}

impl BusConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delivery: DeliveryPolicy::default(),
        }
    }

    pub fn with_delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }

    /// Parse a configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new("events")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
