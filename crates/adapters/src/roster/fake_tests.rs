// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn serves_the_latest_member_list() {
    let roster = FakeRosterAdapter::with_members(vec![Member::new(1, "ara")]);
    assert_eq!(roster.members(GuildId(1)).await.unwrap().len(), 1);

    roster.set_members(vec![Member::new(1, "ara"), Member::bot(2, "dues")]);
    let members = roster.members(GuildId(1)).await.unwrap();
    assert_eq!(members.len(), 2);
    assert!(members[1].is_bot);
}

#[tokio::test]
async fn failure_injection_surfaces_the_guild() {
    let roster = FakeRosterAdapter::new();
    roster.fail_queries(true);
    let err = roster.members(GuildId(3)).await.unwrap_err();
    assert!(matches!(err, RosterError::GuildUnavailable(GuildId(3))));
}
