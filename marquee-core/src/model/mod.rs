mod chat;
mod connection;
mod event;
mod playback;
mod room;
mod signal;
mod user;

pub use chat::ChatMessage;
pub use connection::ConnectionId;
pub use event::{ClientEvent, ServerEvent};
pub use playback::PlaybackState;
pub use room::RoomId;
pub use signal::SignalEnvelope;
pub use user::{UserId, UserProfile};
