use async_trait::async_trait;
use dashmap::DashMap;

use marquee_core::{ChatMessage, RoomId, UserId, now_millis};

use crate::storage::{Storage, StorageError};

/// In-memory [`Storage`] implementation. Backs tests and standalone runs,
/// data lives for the process lifetime only.
pub struct MemoryStorage {
    rooms: DashMap<RoomId, i64>,
    members: DashMap<RoomId, Vec<UserId>>,
    messages: DashMap<RoomId, Vec<ChatMessage>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            members: DashMap::new(),
            messages: DashMap::new(),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upsert_room(&self, room: &RoomId) -> Result<(), StorageError> {
        self.rooms.entry(room.clone()).or_insert_with(now_millis);
        Ok(())
    }

    async fn upsert_member(&self, room: &RoomId, user: &UserId) -> Result<(), StorageError> {
        let mut members = self.members.entry(room.clone()).or_default();
        if !members.contains(user) {
            members.push(user.clone());
        }
        Ok(())
    }

    async fn delete_member(&self, room: &RoomId, user: &UserId) -> Result<(), StorageError> {
        if let Some(mut members) = self.members.get_mut(room) {
            members.retain(|m| m != user);
        }
        Ok(())
    }

    async fn members(&self, room: &RoomId) -> Result<Vec<UserId>, StorageError> {
        Ok(self
            .members
            .get(room)
            .map(|m| m.value().clone())
            .unwrap_or_default())
    }

    async fn append_message(
        &self,
        room: &RoomId,
        message: &ChatMessage,
    ) -> Result<(), StorageError> {
        self.messages
            .entry(room.clone())
            .or_default()
            .push(message.clone());
        Ok(())
    }

    async fn messages(&self, room: &RoomId) -> Result<Vec<ChatMessage>, StorageError> {
        Ok(self
            .messages
            .get(room)
            .map(|m| m.value().clone())
            .unwrap_or_default())
    }
}
