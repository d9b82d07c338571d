// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const MINIMAL: &str = r#"
guild = 1
checkin_channel = 100
settlement_channel = 200
"#;

#[test]
fn minimal_config_gets_the_original_defaults() {
    let config = BotConfig::from_toml(MINIMAL).unwrap();
    assert_eq!(config.command_prefix, "!");
    assert_eq!(config.weekly_target, 5);
    assert_eq!(config.penalty_per_miss, 1000);
    assert_eq!(config.time_zone, "Asia/Seoul");
    assert_eq!(config.checkin_trigger(), "!solve");
    assert_eq!(config.checkin_channel_id(), ChannelId(100));
    assert_eq!(config.settlement_channel_id(), ChannelId(200));
}

#[test]
fn default_schedule_builds_three_tasks() {
    let config = BotConfig::from_toml(MINIMAL).unwrap();
    let tasks = config.tasks().unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].kind, TaskKind::AutoSettle);
    assert_eq!(tasks[0].weekday, Weekday::Sun);
    assert_eq!(tasks[0].at, NaiveTime::from_hms_opt(23, 50, 0).unwrap());
    assert_eq!(tasks[1].kind, TaskKind::AutoReset);
    assert_eq!(tasks[1].at, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    assert_eq!(tasks[2].kind, TaskKind::StatusSnapshot);
}

#[test]
fn custom_prefix_changes_the_replay_trigger() {
    let config = BotConfig::from_toml(&format!("{MINIMAL}command_prefix = \"?\"\n")).unwrap();
    assert_eq!(config.checkin_trigger(), "?solve");
}

#[test]
fn schedule_slots_accept_full_weekday_names() {
    let toml = format!(
        "{MINIMAL}[schedule]\nsettle_on = \"saturday\"\nsettle_at = \"09:30\"\n"
    );
    let config = BotConfig::from_toml(&toml).unwrap();
    let tasks = config.tasks().unwrap();
    assert_eq!(tasks[0].weekday, Weekday::Sat);
    assert_eq!(tasks[0].at, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
}

#[test]
fn bad_weekday_is_rejected() {
    let toml = format!("{MINIMAL}[schedule]\nreset_on = \"someday\"\n");
    assert!(matches!(
        BotConfig::from_toml(&toml),
        Err(ConfigError::Weekday { task: "reset", .. })
    ));
}

#[test]
fn bad_time_of_day_is_rejected() {
    let toml = format!("{MINIMAL}[schedule]\nsnapshot_at = \"25:99\"\n");
    assert!(matches!(
        BotConfig::from_toml(&toml),
        Err(ConfigError::TimeOfDay {
            task: "snapshot",
            ..
        })
    ));
}

#[test]
fn settle_at_or_after_reset_on_the_same_day_is_rejected() {
    let toml = format!(
        "{MINIMAL}[schedule]\nsettle_at = \"23:59\"\nreset_at = \"23:50\"\n"
    );
    assert!(matches!(
        BotConfig::from_toml(&toml),
        Err(ConfigError::SettleNotBeforeReset)
    ));
}

#[test]
fn settle_and_reset_on_different_days_are_unordered() {
    let toml = format!(
        "{MINIMAL}[schedule]\nsettle_on = \"mon\"\nsettle_at = \"23:59\"\nreset_at = \"00:10\"\n"
    );
    assert!(BotConfig::from_toml(&toml).is_ok());
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(BotConfig::from_toml(&format!("{MINIMAL}volume = 11\n")).is_err());
}

#[test]
fn missing_channels_are_rejected() {
    assert!(BotConfig::from_toml("guild = 1").is_err());
}
