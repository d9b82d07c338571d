// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel history queries

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeHistoryAdapter;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use dues_core::event::{ChannelId, InboundMessage};
use thiserror::Error;

/// Errors from history queries
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("channel not available: {0}")]
    ChannelUnavailable(ChannelId),
    #[error("history fetch failed: {0}")]
    FetchFailed(String),
}

/// Adapter for reading message history
#[async_trait]
pub trait HistoryAdapter: Clone + Send + Sync + 'static {
    /// Messages in `channel` at or after `since`, oldest first.
    /// Pagination is the implementation's concern; the result is the
    /// full window.
    async fn messages_since(
        &self,
        channel: ChannelId,
        since: DateTime<FixedOffset>,
    ) -> Result<Vec<InboundMessage>, HistoryError>;
}
