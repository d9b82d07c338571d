// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle: configuration loading and startup wiring

use crate::adapters::{BacklogHistory, RosterCache, SocketChat};
use crate::protocol::Outbound;
use dues_core::clock::WallClock;
use dues_core::config::{BotConfig, ConfigError};
use dues_engine::{Runtime, RuntimeDeps, RuntimeError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::net::UnixListener;
use tokio::sync::mpsc;
use tracing::info;

/// Daemon runtime with the concrete socket-backed adapter types
pub type DaemonRuntime = Runtime<SocketChat, BacklogHistory, RosterCache, RosterCache, WallClock>;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk config file: host settings at the top level, bot parameters
/// under `[bot]`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    socket: Option<PathBuf>,
    bot: BotConfig,
}

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the connector socket
    pub socket_path: PathBuf,
    /// Bot parameters
    pub bot: BotConfig,
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, LifecycleError> {
        let text = std::fs::read_to_string(path).map_err(|source| LifecycleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parse and validate a config document
    pub fn from_toml(text: &str) -> Result<Self, LifecycleError> {
        let file: FileConfig = toml::from_str(text).map_err(ConfigError::from)?;
        file.bot.validate()?;
        Ok(Self {
            socket_path: file
                .socket
                .unwrap_or_else(|| std::env::temp_dir().join("duesd.sock")),
            bot: file.bot,
        })
    }
}

/// Daemon state during operation
pub struct Daemon {
    /// Configuration
    pub config: Config,
    /// Socket the connector attaches to
    pub listener: UnixListener,
    /// Runtime for event processing
    pub runtime: DaemonRuntime,
    /// Roster snapshot shared with the runtime's adapters
    pub roster: RosterCache,
    /// Backlog shared with the runtime's history adapter
    pub backlog: BacklogHistory,
    /// Outbound sends queued by the runtime
    pub outbound_rx: mpsc::UnboundedReceiver<Outbound>,
}

/// Wire the runtime to socket-backed adapters and bind the socket.
pub fn startup(config: Config) -> Result<Daemon, LifecycleError> {
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
    let roster = RosterCache::new();
    let backlog = BacklogHistory::new();
    let clock = WallClock::for_zone(&config.bot.time_zone);
    let runtime = Runtime::new(
        RuntimeDeps {
            chat: SocketChat::new(outbound_tx),
            history: backlog.clone(),
            roster: roster.clone(),
            perms: roster.clone(),
        },
        config.bot.clone(),
        clock,
    )?;

    // Stale socket from a previous run
    if config.socket_path.exists() {
        std::fs::remove_file(&config.socket_path)?;
    }
    let listener = UnixListener::bind(&config.socket_path)?;

    Ok(Daemon {
        config,
        listener,
        runtime,
        roster,
        backlog,
        outbound_rx,
    })
}

impl Daemon {
    /// Remove the socket on the way out.
    pub fn shutdown(&self) {
        let _ = std::fs::remove_file(&self.config.socket_path);
        info!("daemon stopped");
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
