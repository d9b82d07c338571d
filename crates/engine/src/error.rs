// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use dues_adapters::{ChatError, HistoryError, PermissionError, RosterError};
use dues_core::config::ConfigError;
use thiserror::Error;

/// Errors that can occur in the runtime
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("chat error: {0}")]
    Chat(#[from] ChatError),
    #[error("history error: {0}")]
    History(#[from] HistoryError),
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),
    #[error("permission error: {0}")]
    Permission(#[from] PermissionError),
}
