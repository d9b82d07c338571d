// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::event::{ChannelId, MemberId};
use chrono::{FixedOffset, TimeZone};

fn msg(author: u64, text: &str) -> InboundMessage {
    InboundMessage {
        author: MemberId(author),
        author_name: format!("member-{author}"),
        author_is_bot: false,
        channel: ChannelId(100),
        text: text.to_string(),
        timestamp: FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 3, 10, 0, 0)
            .unwrap(),
    }
}

fn bot_msg(author: u64, text: &str) -> InboundMessage {
    InboundMessage {
        author_is_bot: true,
        ..msg(author, text)
    }
}

#[test]
fn trigger_requires_token_whitespace_and_argument() {
    assert!(is_checkin_trigger(&msg(1, "!solve https://example.com/1000"), "!solve"));
    assert!(is_checkin_trigger(&msg(1, "  !solve x  "), "!solve"));
    assert!(!is_checkin_trigger(&msg(1, "!solve"), "!solve"));
    assert!(!is_checkin_trigger(&msg(1, "!solve    "), "!solve"));
    assert!(!is_checkin_trigger(&msg(1, "!solvehttps://example.com"), "!solve"));
    assert!(!is_checkin_trigger(&msg(1, "solve https://example.com"), "!solve"));
    assert!(!is_checkin_trigger(&msg(1, "hello there"), "!solve"));
}

#[test]
fn bot_authors_never_trigger() {
    assert!(!is_checkin_trigger(&bot_msg(1, "!solve https://example.com/1"), "!solve"));
}

#[test]
fn rebuild_counts_one_increment_per_valid_trigger() {
    let mut ledger = CheckInLedger::new();
    let history = vec![
        msg(1, "!solve https://example.com/1"),
        msg(2, "good morning"),
        msg(1, "!solve https://example.com/2"),
        bot_msg(3, "!solve https://example.com/3"),
        msg(2, "!solve https://example.com/4"),
        msg(1, "!solve"),
    ];

    let replayed = rebuild(&mut ledger, &history, "!solve");

    assert_eq!(replayed, 3);
    assert_eq!(ledger.get(MemberId(1)), 2);
    assert_eq!(ledger.get(MemberId(2)), 1);
    assert_eq!(ledger.get(MemberId(3)), 0);
}

#[test]
fn single_member_count_is_independent_of_invalid_interleaving() {
    let mut ledger = CheckInLedger::new();
    let history = vec![
        msg(7, "!solve https://example.com/a"),
        msg(7, "nope"),
        bot_msg(7, "!solve https://example.com/b"),
        msg(7, "!solve https://example.com/c"),
        msg(7, "!solveabc"),
        msg(7, "!solve https://example.com/d"),
    ];

    rebuild(&mut ledger, &history, "!solve");
    assert_eq!(ledger.get(MemberId(7)), 3);
}

#[test]
fn rebuild_clears_previous_state_first() {
    let mut ledger = CheckInLedger::new();
    ledger.increment(MemberId(9));

    rebuild(&mut ledger, &[msg(1, "!solve https://example.com/1")], "!solve");

    assert_eq!(ledger.get(MemberId(9)), 0);
    assert_eq!(ledger.get(MemberId(1)), 1);
}

#[test]
fn rebuild_is_idempotent_over_the_same_history() {
    let history = vec![
        msg(1, "!solve https://example.com/1"),
        msg(2, "!solve https://example.com/2"),
        msg(1, "!solve https://example.com/3"),
    ];

    let mut first = CheckInLedger::new();
    rebuild(&mut first, &history, "!solve");
    let mut second = first.clone();
    rebuild(&mut second, &history, "!solve");

    assert_eq!(first, second);
}
