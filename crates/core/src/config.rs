// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot parameter configuration
//!
//! The only required settings are the guild, the two channel
//! identifiers, and (implicitly) the two numeric constants, which
//! default to the original community's values. Everything is plain TOML.

use crate::event::{ChannelId, GuildId};
use crate::schedule::{TaskKind, WeeklyTask};
use chrono::{NaiveTime, Weekday};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid weekday for {task}: {value}")]
    Weekday { task: &'static str, value: String },
    #[error("invalid time of day for {task}: {value} (expected HH:MM)")]
    TimeOfDay { task: &'static str, value: String },
    #[error("settle must be scheduled strictly before reset on a shared day")]
    SettleNotBeforeReset,
}

/// Weekly task slots as weekday + `HH:MM` strings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    #[serde(default = "default_settle_on")]
    pub settle_on: String,
    #[serde(default = "default_settle_at")]
    pub settle_at: String,
    #[serde(default = "default_reset_on")]
    pub reset_on: String,
    #[serde(default = "default_reset_at")]
    pub reset_at: String,
    #[serde(default = "default_snapshot_on")]
    pub snapshot_on: String,
    #[serde(default = "default_snapshot_at")]
    pub snapshot_at: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            settle_on: default_settle_on(),
            settle_at: default_settle_at(),
            reset_on: default_reset_on(),
            reset_at: default_reset_at(),
            snapshot_on: default_snapshot_on(),
            snapshot_at: default_snapshot_at(),
        }
    }
}

/// Bot parameters loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    pub guild: u64,
    pub checkin_channel: u64,
    pub settlement_channel: u64,
    #[serde(default = "default_prefix")]
    pub command_prefix: String,
    #[serde(default = "default_target")]
    pub weekly_target: u32,
    #[serde(default = "default_penalty")]
    pub penalty_per_miss: u64,
    #[serde(default = "default_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl BotConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the schedule table without building tasks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tasks()?;
        Ok(())
    }

    pub fn guild_id(&self) -> GuildId {
        GuildId(self.guild)
    }

    pub fn checkin_channel_id(&self) -> ChannelId {
        ChannelId(self.checkin_channel)
    }

    pub fn settlement_channel_id(&self) -> ChannelId {
        ChannelId(self.settlement_channel)
    }

    /// The trigger token history replay matches against.
    pub fn checkin_trigger(&self) -> String {
        format!("{}solve", self.command_prefix)
    }

    /// Build the three weekly tasks from the schedule table.
    ///
    /// Settle must come strictly before reset when they share a weekday;
    /// that ordering is the only thing that guarantees settlement sees
    /// pre-reset counts.
    pub fn tasks(&self) -> Result<Vec<WeeklyTask>, ConfigError> {
        let settle = parse_slot("settle", &self.schedule.settle_on, &self.schedule.settle_at)?;
        let reset = parse_slot("reset", &self.schedule.reset_on, &self.schedule.reset_at)?;
        let snapshot = parse_slot(
            "snapshot",
            &self.schedule.snapshot_on,
            &self.schedule.snapshot_at,
        )?;
        if settle.0 == reset.0 && settle.1 >= reset.1 {
            return Err(ConfigError::SettleNotBeforeReset);
        }
        Ok(vec![
            WeeklyTask::new("auto-settle", TaskKind::AutoSettle, settle.0, settle.1),
            WeeklyTask::new("auto-reset", TaskKind::AutoReset, reset.0, reset.1),
            WeeklyTask::new(
                "status-snapshot",
                TaskKind::StatusSnapshot,
                snapshot.0,
                snapshot.1,
            ),
        ])
    }
}

fn parse_slot(
    task: &'static str,
    on: &str,
    at: &str,
) -> Result<(Weekday, NaiveTime), ConfigError> {
    let weekday = on.parse::<Weekday>().map_err(|_| ConfigError::Weekday {
        task,
        value: on.to_string(),
    })?;
    let time = NaiveTime::parse_from_str(at, "%H:%M").map_err(|_| ConfigError::TimeOfDay {
        task,
        value: at.to_string(),
    })?;
    Ok((weekday, time))
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_target() -> u32 {
    5
}

fn default_penalty() -> u64 {
    1000
}

fn default_zone() -> String {
    "Asia/Seoul".to_string()
}

fn default_settle_on() -> String {
    "sun".to_string()
}

fn default_settle_at() -> String {
    "23:50".to_string()
}

fn default_reset_on() -> String {
    "sun".to_string()
}

fn default_reset_at() -> String {
    "23:59".to_string()
}

fn default_snapshot_on() -> String {
    "sun".to_string()
}

fn default_snapshot_at() -> String {
    "21:00".to_string()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
