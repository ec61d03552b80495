use std::sync::Arc;

use marquee_core::{RoomId, UserId};

use crate::storage::{Storage, StorageError};

/// Durable room membership. The member list clients see is always read back
/// from storage, never reconstructed from live connections.
#[derive(Clone)]
pub struct PresenceTracker {
    storage: Arc<dyn Storage>,
}

impl PresenceTracker {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Record the user as a member and return the refreshed member list.
    /// Rejoining is an upsert, the list never grows a duplicate.
    pub async fn join(&self, room: &RoomId, user: &UserId) -> Result<Vec<UserId>, StorageError> {
        self.storage.upsert_room(room).await?;
        self.storage.upsert_member(room, user).await?;
        self.storage.members(room).await
    }

    /// Drop the membership record and return the refreshed member list.
    /// Leaving a room the user is not a member of is a no-op.
    pub async fn leave(&self, room: &RoomId, user: &UserId) -> Result<Vec<UserId>, StorageError> {
        self.storage.delete_member(room, user).await?;
        self.storage.members(room).await
    }

    pub async fn members(&self, room: &RoomId) -> Result<Vec<UserId>, StorageError> {
        self.storage.members(room).await
    }
}
