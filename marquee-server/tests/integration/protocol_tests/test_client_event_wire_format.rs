use marquee_core::{ClientEvent, RoomId, UserId};
use serde_json::json;

#[test]
fn test_join_keeps_unknown_profile_fields() {
    let event: ClientEvent = serde_json::from_value(json!({
        "event": "join",
        "data": {
            "room_id": "r1",
            "user_data": { "id": "u1", "name": "Гость", "avatar": "cat.png" }
        }
    }))
    .expect("Failed to parse join");

    match event {
        ClientEvent::Join { room_id, user_data } => {
            assert_eq!(room_id, RoomId::from("r1"));
            assert_eq!(user_data.id, UserId::from("u1"));
            assert_eq!(user_data.display_name(), "Гость");
            assert_eq!(user_data.extra.get("avatar"), Some(&json!("cat.png")));
        }
        other => panic!("Expected join, got {:?}", other),
    }
}

#[test]
fn test_player_action_carries_full_transport_state() {
    let event: ClientEvent = serde_json::from_value(json!({
        "event": "player_action",
        "data": {
            "room_id": "abc123",
            "position": 42.5,
            "is_paused": false,
            "speed": 1.0
        }
    }))
    .expect("Failed to parse player_action");

    match event {
        ClientEvent::PlayerAction {
            room_id,
            position,
            is_paused,
            speed,
        } => {
            assert_eq!(room_id, RoomId::from("abc123"));
            assert_eq!(position, 42.5);
            assert!(!is_paused);
            assert_eq!(speed, 1.0);
        }
        other => panic!("Expected player_action, got {:?}", other),
    }
}

#[test]
fn test_signal_parses_with_candidate_only() {
    let event: ClientEvent = serde_json::from_value(json!({
        "event": "signal",
        "data": {
            "to": "bob",
            "candidate": { "candidate": "candidate:0 1 UDP 2122252543 192.0.2.1 54400 typ host" }
        }
    }))
    .expect("Failed to parse signal");

    match event {
        ClientEvent::Signal(envelope) => {
            assert_eq!(envelope.to, UserId::from("bob"));
            assert!(envelope.description.is_none());
            assert!(envelope.candidate.is_some());
        }
        other => panic!("Expected signal, got {:?}", other),
    }
}
