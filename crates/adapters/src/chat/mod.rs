// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound message delivery

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeChatAdapter, SentMessage};

use async_trait::async_trait;
use dues_core::event::ChannelId;
use thiserror::Error;

/// Errors from outbound delivery
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("channel not available: {0}")]
    ChannelUnavailable(ChannelId),
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for sending messages to the platform.
///
/// Implementations may split text that exceeds the platform's message
/// size limit; callers produce line-oriented output and never assume a
/// single-call send.
#[async_trait]
pub trait ChatAdapter: Clone + Send + Sync + 'static {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), ChatError>;
}
