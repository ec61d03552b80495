mod chat_relay;

pub use chat_relay::*;
