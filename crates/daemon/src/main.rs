// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dues daemon (duesd)
//!
//! Host process that owns the event loop: gateway events from the
//! platform connector flow in over a Unix socket, outbound sends flow
//! back, and the scheduler ticks once a second.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod adapters;
mod lifecycle;
mod protocol;
mod server;

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

type ConnectorReader = Lines<BufReader<OwnedReadHalf>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("dues.toml")
    };

    // Set up logging to stderr; stdout stays clean for the READY marker
    setup_logging();

    // Load configuration
    let config = lifecycle::Config::load(&config_path)?;
    info!(config = %config_path.display(), "starting duesd");

    let mut daemon = match lifecycle::startup(config) {
        Ok(daemon) => daemon,
        Err(e) => {
            error!("failed to start daemon: {}", e);
            return Err(e.into());
        }
    };

    // Set up signal handlers
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!(
        socket = %daemon.config.socket_path.display(),
        "daemon ready, waiting for connector"
    );

    // Signal ready for the parent process (connector wrapper, systemd)
    println!("READY");

    // Scheduler granularity: wall-clock task times are minute-level, a
    // 1-second poll is plenty.
    let mut tick = tokio::time::interval(Duration::from_secs(1));
    let mut reader: Option<ConnectorReader> = None;
    let mut writer: Option<OwnedWriteHalf> = None;

    // Main event loop
    loop {
        tokio::select! {
            // Accept a connector; a newcomer replaces the old session
            result = daemon.listener.accept() => {
                match result {
                    Ok((stream, _)) => {
                        info!("connector attached");
                        let (read_half, write_half) = stream.into_split();
                        reader = Some(BufReader::new(read_half).lines());
                        writer = Some(write_half);
                    }
                    Err(e) => {
                        error!("error accepting connection: {}", e);
                    }
                }
            }

            // Gateway events, one JSON object per line
            line = next_line(&mut reader), if reader.is_some() => {
                match line {
                    Ok(Some(line)) => {
                        if let Err(e) = server::handle_line(&mut daemon, &line).await {
                            error!("error handling gateway event: {}", e);
                        }
                    }
                    Ok(None) => {
                        info!("connector detached");
                        reader = None;
                        writer = None;
                    }
                    Err(e) => {
                        error!("connector read error: {}", e);
                        reader = None;
                        writer = None;
                    }
                }
            }

            // Outbound sends queued by the runtime
            outbound = daemon.outbound_rx.recv() => {
                if let Some(outbound) = outbound {
                    server::deliver(&mut writer, &outbound).await;
                }
            }

            // Scheduled task poll
            _ = tick.tick() => {
                daemon.runtime.tick().await;
            }

            // Graceful shutdown on SIGTERM
            _ = sigterm.recv() => {
                info!("received SIGTERM, shutting down...");
                break;
            }

            // Graceful shutdown on SIGINT
            _ = sigint.recv() => {
                info!("received SIGINT, shutting down...");
                break;
            }
        }
    }

    daemon.shutdown();
    Ok(())
}

async fn next_line(reader: &mut Option<ConnectorReader>) -> std::io::Result<Option<String>> {
    match reader.as_mut() {
        Some(lines) => lines.next_line().await,
        // Unreachable: the select! arm is guarded on reader.is_some()
        None => std::future::pending().await,
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
