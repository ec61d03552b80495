use crate::model::chat::ChatMessage;
use crate::model::playback::PlaybackState;
use crate::model::room::RoomId;
use crate::model::signal::SignalEnvelope;
use crate::model::user::{UserId, UserProfile};
use serde::{Deserialize, Serialize};

/// Events a client sends to the hub.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Join {
        room_id: RoomId,
        user_data: UserProfile,
    },
    ChatMessage {
        room_id: RoomId,
        author: String,
        text: String,
    },
    PlayerAction {
        room_id: RoomId,
        position: f64,
        is_paused: bool,
        speed: f64,
    },
    RequestState {
        room_id: RoomId,
    },
    NewPeer {
        room_id: RoomId,
        from: UserId,
    },
    Signal(SignalEnvelope),
}

/// Events the hub sends back, to one connection or fanned out to a room.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    History(Vec<ChatMessage>),
    CurrentState(PlaybackState),
    Members(Vec<UserId>),
    SystemMessage {
        text: String,
        created_at: i64,
    },
    ChatMessage(ChatMessage),
    PlayerUpdate(PlaybackState),
    NewPeer {
        from: UserId,
    },
    Signal {
        from: UserId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        candidate: Option<serde_json::Value>,
    },
}
