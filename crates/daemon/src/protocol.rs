// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol between the platform connector and duesd
//!
//! The connector owns the platform session; duesd owns the accounting
//! state machine. Gateway events flow in and outbound sends flow out,
//! one JSON object per line.

use chrono::{DateTime, FixedOffset};
use dues_core::event::{ChannelId, InboundMessage, Member, MemberId};
use serde::{Deserialize, Serialize};

/// Connector to daemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// Session established. Carries the roster snapshot, the admin set,
    /// and the check-in channel backlog since the start of the week
    /// (oldest first).
    Ready {
        #[serde(default)]
        members: Vec<Member>,
        #[serde(default)]
        admins: Vec<MemberId>,
        #[serde(default)]
        backlog: Vec<WireMessage>,
    },
    /// A live message
    Message(WireMessage),
    /// Roster refresh after a membership or privilege change
    Roster {
        members: Vec<Member>,
        #[serde(default)]
        admins: Vec<MemberId>,
    },
}

/// Message shape on the wire; lenient mirror of [`InboundMessage`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub author: MemberId,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_is_bot: bool,
    pub channel: ChannelId,
    pub text: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl From<WireMessage> for InboundMessage {
    fn from(msg: WireMessage) -> Self {
        Self {
            author: msg.author,
            author_name: msg.author_name,
            author_is_bot: msg.author_is_bot,
            channel: msg.channel,
            text: msg.text,
            timestamp: msg.timestamp,
        }
    }
}

/// Daemon to connector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    Send { channel: ChannelId, text: String },
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
