// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Socket-backed adapters for the daemon runtime
//!
//! The connector pushes state (roster, backlog) instead of answering
//! queries, so these adapters serve the latest pushed snapshot. Outbound
//! sends queue into the connection writer.

use crate::protocol::Outbound;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use dues_adapters::{
    ChatAdapter, ChatError, HistoryAdapter, HistoryError, PermissionAdapter, PermissionError,
    RosterAdapter, RosterError,
};
use dues_core::event::{ChannelId, GuildId, InboundMessage, Member, MemberId};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Sends outbound messages through the connection writer
#[derive(Clone)]
pub struct SocketChat {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl SocketChat {
    pub fn new(tx: mpsc::UnboundedSender<Outbound>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl ChatAdapter for SocketChat {
    async fn send(&self, channel: ChannelId, text: &str) -> Result<(), ChatError> {
        self.tx
            .send(Outbound::Send {
                channel,
                text: text.to_string(),
            })
            .map_err(|_| ChatError::SendFailed("connector queue closed".to_string()))
    }
}

/// Latest roster snapshot pushed by the connector.
///
/// Serves both the roster query and the privilege check; empty means no
/// snapshot has arrived yet and the guild counts as unavailable.
#[derive(Clone, Default)]
pub struct RosterCache {
    inner: Arc<Mutex<RosterState>>,
}

#[derive(Default)]
struct RosterState {
    members: Vec<Member>,
    admins: HashSet<MemberId>,
}

impl RosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale.
    pub fn update(&self, members: Vec<Member>, admins: Vec<MemberId>) {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.members = members;
        state.admins = admins.into_iter().collect();
    }
}

#[async_trait]
impl RosterAdapter for RosterCache {
    async fn members(&self, guild: GuildId) -> Result<Vec<Member>, RosterError> {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.members.is_empty() {
            return Err(RosterError::GuildUnavailable(guild));
        }
        Ok(state.members.clone())
    }
}

#[async_trait]
impl PermissionAdapter for RosterCache {
    async fn is_admin(&self, _guild: GuildId, member: MemberId) -> Result<bool, PermissionError> {
        let state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(state.admins.contains(&member))
    }
}

/// Backlog delivered with the connector's `ready` event, consumed by the
/// startup replay
#[derive(Clone, Default)]
pub struct BacklogHistory {
    messages: Arc<Mutex<Vec<InboundMessage>>>,
}

impl BacklogHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backlog with the window from the latest `ready`.
    pub fn fill(&self, messages: Vec<InboundMessage>) {
        *self.messages.lock().unwrap_or_else(|e| e.into_inner()) = messages;
    }
}

#[async_trait]
impl HistoryAdapter for BacklogHistory {
    async fn messages_since(
        &self,
        channel: ChannelId,
        since: DateTime<FixedOffset>,
    ) -> Result<Vec<InboundMessage>, HistoryError> {
        let messages = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        Ok(messages
            .iter()
            .filter(|m| m.channel == channel && m.timestamp >= since)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "adapters_tests.rs"]
mod tests;
