// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dues-core: weekly check-in accounting for the dues bot
//!
//! This crate provides:
//! - Clock policy for the fixed accounting time zone
//! - The in-memory check-in ledger and its rebuild from channel history
//! - The weekly settlement computation
//! - Wall-clock anchored weekly task scheduling
//! - Command parsing, channel routing, and announcement rendering

pub mod clock;
pub mod config;
pub mod event;
pub mod ledger;
pub mod render;
pub mod replay;
pub mod router;
pub mod schedule;
pub mod settle;

// Re-exports
pub use clock::{next_occurrence, start_of_week, Clock, FakeClock, WallClock};
pub use config::{BotConfig, ConfigError, ScheduleConfig};
pub use event::{ChannelId, GuildId, InboundMessage, Member, MemberId};
pub use ledger::CheckInLedger;
pub use replay::{is_checkin_trigger, rebuild};
pub use router::{Command, CommandRouter, Disposition, Rejection};
pub use schedule::{ScheduleCoordinator, TaskFire, TaskKind, TaskState, WeeklyTask};
pub use settle::{settle, PayerLine, SettlementOutcome, SettlementReport};
