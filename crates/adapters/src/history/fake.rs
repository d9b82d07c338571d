// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake history adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HistoryAdapter, HistoryError};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use dues_core::event::{ChannelId, InboundMessage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Fake history adapter backed by an in-memory, oldest-first message list
#[derive(Clone, Default)]
pub struct FakeHistoryAdapter {
    messages: Arc<Mutex<Vec<InboundMessage>>>,
    fail: Arc<AtomicBool>,
}

impl FakeHistoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the history. Push oldest first.
    pub fn push(&self, message: InboundMessage) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message);
    }

    /// Make subsequent queries fail, simulating an unavailable channel
    pub fn fail_queries(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl HistoryAdapter for FakeHistoryAdapter {
    async fn messages_since(
        &self,
        channel: ChannelId,
        since: DateTime<FixedOffset>,
    ) -> Result<Vec<InboundMessage>, HistoryError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(HistoryError::ChannelUnavailable(channel));
        }
        let messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        Ok(messages
            .iter()
            .filter(|m| m.channel == channel && m.timestamp >= since)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
