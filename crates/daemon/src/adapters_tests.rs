// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

#[tokio::test]
async fn socket_chat_queues_outbound_sends() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let chat = SocketChat::new(tx);

    chat.send(ChannelId(200), "hello").await.unwrap();

    let outbound = rx.recv().await.unwrap();
    assert_eq!(
        outbound,
        Outbound::Send {
            channel: ChannelId(200),
            text: "hello".to_string(),
        }
    );
}

#[tokio::test]
async fn socket_chat_errors_when_the_queue_is_closed() {
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);
    let chat = SocketChat::new(tx);

    let err = chat.send(ChannelId(200), "lost").await.unwrap_err();
    assert!(matches!(err, ChatError::SendFailed(_)));
}

#[tokio::test]
async fn roster_cache_is_unavailable_until_the_first_snapshot() {
    let cache = RosterCache::new();
    let err = cache.members(GuildId(1)).await.unwrap_err();
    assert!(matches!(err, RosterError::GuildUnavailable(GuildId(1))));

    cache.update(vec![Member::new(1, "ara")], vec![MemberId(1)]);
    assert_eq!(cache.members(GuildId(1)).await.unwrap().len(), 1);
    assert!(cache.is_admin(GuildId(1), MemberId(1)).await.unwrap());
    assert!(!cache.is_admin(GuildId(1), MemberId(2)).await.unwrap());
}

#[tokio::test]
async fn backlog_history_filters_like_a_history_query() {
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    let ts = |d: u32| kst.with_ymd_and_hms(2025, 6, d, 10, 0, 0).unwrap();
    let msg = |channel: u64, d: u32| InboundMessage {
        author: MemberId(1),
        author_name: "ara".to_string(),
        author_is_bot: false,
        channel: ChannelId(channel),
        text: "!solve https://example.com/p/1".to_string(),
        timestamp: ts(d),
    };

    let backlog = BacklogHistory::new();
    backlog.fill(vec![msg(100, 2), msg(200, 3), msg(100, 4)]);

    let window = backlog.messages_since(ChannelId(100), ts(3)).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].timestamp, ts(4));
}
