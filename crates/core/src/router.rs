// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound command parsing and channel routing
//!
//! Routing is pure: it classifies a request into an action or a
//! rejection. Rejections carry a user-facing reason and the caller must
//! not mutate any state for them.

use crate::event::ChannelId;

/// A parsed command from the prefix surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `solve <url>`: record one check-in. The argument is kept raw.
    Solve { url: Option<String> },
    /// `week`: show this week's standings
    Week,
    /// `settle`: run the weekly settlement now
    Settle,
    /// `resetweek`: clear the ledger (privileged)
    ResetWeek,
    /// `members`: list the server roster
    Members,
    /// `help`, or the bare prefix
    Help,
    /// Prefixed text matching no known command token
    Unknown { token: String },
}

/// Parse a message into a command. `None` when the text does not start
/// with the command prefix, i.e. an ordinary message.
pub fn parse(text: &str, prefix: &str) -> Option<Command> {
    let body = text.trim().strip_prefix(prefix)?.trim();
    let (token, arg) = match body.split_once(char::is_whitespace) {
        Some((token, arg)) => (token, arg.trim()),
        None => (body, ""),
    };
    let command = match token {
        "" => Command::Help,
        "solve" => Command::Solve {
            url: (!arg.is_empty()).then(|| arg.to_string()),
        },
        "week" => Command::Week,
        "settle" => Command::Settle,
        "resetweek" => Command::ResetWeek,
        "members" => Command::Members,
        "help" => Command::Help,
        other => Command::Unknown {
            token: other.to_string(),
        },
    };
    Some(command)
}

/// Why a request was rejected without touching any state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Command used outside its designated channel
    WrongChannel { expected: ChannelId },
    /// `solve` without an argument
    MissingArgument,
    /// `solve` argument without a URI scheme prefix
    MalformedUrl,
}

/// What the runtime should do with a routed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    RecordCheckIn { url: String },
    ShowWeek,
    RunSettlement,
    /// Still subject to the external privilege check
    ResetWeek,
    ListMembers,
    ShowHelp,
    Reject(Rejection),
}

/// Channel gates for the command surface
#[derive(Debug, Clone)]
pub struct CommandRouter {
    checkin_channel: ChannelId,
    settlement_channel: ChannelId,
}

impl CommandRouter {
    pub fn new(checkin_channel: ChannelId, settlement_channel: ChannelId) -> Self {
        Self {
            checkin_channel,
            settlement_channel,
        }
    }

    /// Apply the channel and argument rules.
    ///
    /// `solve` is accepted only on the check-in channel with an argument
    /// that looks like a URL; `week`/`settle`/`resetweek` only on the
    /// settlement channel. `members` and `help` work anywhere.
    pub fn route(&self, channel: ChannelId, command: Command) -> Disposition {
        match command {
            Command::Solve { url } => {
                if channel != self.checkin_channel {
                    return Disposition::Reject(Rejection::WrongChannel {
                        expected: self.checkin_channel,
                    });
                }
                let Some(url) = url else {
                    return Disposition::Reject(Rejection::MissingArgument);
                };
                if !url.starts_with("http") {
                    return Disposition::Reject(Rejection::MalformedUrl);
                }
                Disposition::RecordCheckIn { url }
            }
            Command::Week | Command::Settle | Command::ResetWeek
                if channel != self.settlement_channel =>
            {
                Disposition::Reject(Rejection::WrongChannel {
                    expected: self.settlement_channel,
                })
            }
            Command::Week => Disposition::ShowWeek,
            Command::Settle => Disposition::RunSettlement,
            Command::ResetWeek => Disposition::ResetWeek,
            Command::Members => Disposition::ListMembers,
            Command::Help | Command::Unknown { .. } => Disposition::ShowHelp,
        }
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
