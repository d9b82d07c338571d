// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake chat adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChatAdapter, ChatError};
use async_trait::async_trait;
use dues_core::event::ChannelId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded outbound message
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel: ChannelId,
    pub text: String,
}

/// Fake chat adapter that records every send
#[derive(Clone, Default)]
pub struct FakeChatAdapter {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    fail: Arc<AtomicBool>,
}

impl FakeChatAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded sends
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make subsequent sends fail, simulating an unavailable channel
    pub fn fail_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatAdapter for FakeChatAdapter {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), ChatError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ChatError::ChannelUnavailable(channel));
        }
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SentMessage {
                channel,
                text: text.to_string(),
            });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
