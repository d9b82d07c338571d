// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connector event handling and outbound delivery

use crate::lifecycle::Daemon;
use crate::protocol::{GatewayEvent, Outbound};
use dues_engine::RuntimeError;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::unix::OwnedWriteHalf;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("malformed gateway event: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Dispatch one line from the connector.
///
/// `ready` installs the roster snapshot and backlog before the runtime
/// replays, so the rebuild always sees the full window.
pub async fn handle_line(daemon: &mut Daemon, line: &str) -> Result<(), ServerError> {
    let event: GatewayEvent = serde_json::from_str(line)?;
    match event {
        GatewayEvent::Ready {
            members,
            admins,
            backlog,
        } => {
            daemon.roster.update(members, admins);
            daemon
                .backlog
                .fill(backlog.into_iter().map(Into::into).collect());
            daemon.runtime.on_ready().await?;
        }
        GatewayEvent::Message(msg) => {
            daemon.runtime.handle_message(&msg.into()).await?;
        }
        GatewayEvent::Roster { members, admins } => {
            daemon.roster.update(members, admins);
        }
    }
    Ok(())
}

/// Write one outbound send to the connector, dropping it when no
/// connector is attached.
pub async fn deliver(writer: &mut Option<OwnedWriteHalf>, outbound: &Outbound) {
    let Some(half) = writer.as_mut() else {
        warn!("no connector attached, dropping outbound message");
        return;
    };
    let mut line = match serde_json::to_string(outbound) {
        Ok(line) => line,
        Err(e) => {
            error!("failed to encode outbound message: {e}");
            return;
        }
    };
    line.push('\n');
    if let Err(e) = half.write_all(line.as_bytes()).await {
        error!("connector write failed: {e}");
        *writer = None;
    }
}
