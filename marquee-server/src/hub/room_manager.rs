use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use marquee_core::RoomId;

use crate::hub::room::Room;
use crate::hub::room_command::RoomCommand;
use crate::playback::PlaybackStore;
use crate::registry::ConnectionRegistry;
use crate::storage::Storage;

/// Spawns and indexes room actors. A room comes to life the first time a
/// join references its id and keeps running for the process lifetime.
#[derive(Clone)]
pub struct RoomManager {
    rooms: Arc<DashMap<RoomId, mpsc::Sender<RoomCommand>>>,
    storage: Arc<dyn Storage>,
    playback: Arc<PlaybackStore>,
    registry: Arc<ConnectionRegistry>,
}

impl RoomManager {
    pub fn new(
        storage: Arc<dyn Storage>,
        playback: Arc<PlaybackStore>,
        registry: Arc<ConnectionRegistry>,
    ) -> Self {
        Self {
            rooms: Arc::new(DashMap::new()),
            storage,
            playback,
            registry,
        }
    }

    /// Command channel of the room, spawning its actor on first reference.
    /// The entry API keeps concurrent first joins from spawning twice.
    pub fn get_room_sender(&self, room_id: &RoomId) -> mpsc::Sender<RoomCommand> {
        self.rooms
            .entry(room_id.clone())
            .or_insert_with(|| {
                info!("Creating new room: {}", room_id);
                let (tx, rx) = mpsc::channel(100);
                let room = Room::new(
                    room_id.clone(),
                    rx,
                    self.storage.clone(),
                    self.playback.clone(),
                    self.registry.clone(),
                );
                tokio::spawn(room.run());
                tx
            })
            .value()
            .clone()
    }

    /// Command channel of an already running room. Leave and other
    /// room-scoped traffic must never create a room as a side effect.
    pub fn lookup(&self, room_id: &RoomId) -> Option<mpsc::Sender<RoomCommand>> {
        self.rooms.get(room_id).map(|sender| sender.clone())
    }

    pub async fn send_to(&self, room_id: &RoomId, cmd: RoomCommand) {
        let Some(sender) = self.lookup(room_id) else {
            warn!("No active room {} for command {:?}", room_id, cmd);
            return;
        };
        if sender.send(cmd).await.is_err() {
            error!("Room {} died", room_id);
        }
    }
}
