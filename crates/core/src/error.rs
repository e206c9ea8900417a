// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types

use thiserror::Error;

/// Errors from loading a bus configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bus config: {0}")]
    Parse(#[from] toml::de::Error),
}
