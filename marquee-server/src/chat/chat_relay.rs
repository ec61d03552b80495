use std::sync::Arc;

use marquee_core::{ChatMessage, RoomId, now_millis};

use crate::storage::{Storage, StorageError};

/// Append-only chat history of a room. Messages are stamped and persisted
/// here; broadcasting what was stored is the room's job, and a message that
/// failed to persist must never be broadcast.
#[derive(Clone)]
pub struct ChatRelay {
    storage: Arc<dyn Storage>,
}

impl ChatRelay {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Stamp the message with the server clock and append it durably.
    /// Returns the stored message on success.
    pub async fn post(
        &self,
        room: &RoomId,
        author: &str,
        text: &str,
    ) -> Result<ChatMessage, StorageError> {
        let message = ChatMessage {
            author: author.to_string(),
            text: text.to_string(),
            created_at: now_millis(),
        };
        self.storage.append_message(room, &message).await?;
        Ok(message)
    }

    /// Full history of the room, ascending `created_at`.
    pub async fn history(&self, room: &RoomId) -> Result<Vec<ChatMessage>, StorageError> {
        self.storage.messages(room).await
    }
}
