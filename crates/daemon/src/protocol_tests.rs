// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn ready_event_parses_with_all_sections() {
    let line = r#"{
        "type": "ready",
        "members": [
            {"id": 1, "display_name": "ara"},
            {"id": 9, "display_name": "dues", "is_bot": true}
        ],
        "admins": [1],
        "backlog": [
            {"author": 1, "author_name": "ara", "channel": 100,
             "text": "!solve https://example.com/p/1",
             "timestamp": "2025-06-03T10:00:00+09:00"}
        ]
    }"#;

    let event: GatewayEvent = serde_json::from_str(line).unwrap();
    let GatewayEvent::Ready {
        members,
        admins,
        backlog,
    } = event
    else {
        panic!("expected ready");
    };
    assert_eq!(members.len(), 2);
    assert!(members[1].is_bot);
    assert_eq!(admins, vec![MemberId(1)]);
    assert_eq!(backlog.len(), 1);
    assert_eq!(backlog[0].channel, ChannelId(100));
}

#[test]
fn ready_event_sections_default_to_empty() {
    let event: GatewayEvent = serde_json::from_str(r#"{"type": "ready"}"#).unwrap();
    assert_eq!(
        event,
        GatewayEvent::Ready {
            members: vec![],
            admins: vec![],
            backlog: vec![],
        }
    );
}

#[test]
fn message_event_converts_to_an_inbound_message() {
    let line = r#"{
        "type": "message",
        "author": 2, "author_name": "bomi", "channel": 100,
        "text": "!week", "timestamp": "2025-06-04T12:00:00+09:00"
    }"#;

    let event: GatewayEvent = serde_json::from_str(line).unwrap();
    let GatewayEvent::Message(wire) = event else {
        panic!("expected message");
    };
    let msg: InboundMessage = wire.into();
    assert_eq!(msg.author, MemberId(2));
    assert_eq!(msg.author_name, "bomi");
    assert!(!msg.author_is_bot);
    assert_eq!(msg.text, "!week");
}

#[test]
fn outbound_send_serializes_with_a_type_tag() {
    let line = serde_json::to_string(&Outbound::Send {
        channel: ChannelId(200),
        text: "Weekly settlement:".to_string(),
    })
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["type"], "send");
    assert_eq!(value["channel"], 200);
    assert_eq!(value["text"], "Weekly settlement:");
}
