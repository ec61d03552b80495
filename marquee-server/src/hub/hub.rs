use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use marquee_core::{
    ClientEvent, ConnectionId, PlaybackState, RoomId, ServerEvent, UserId, UserProfile,
};

use crate::hub::room_command::RoomCommand;
use crate::hub::room_manager::RoomManager;
use crate::playback::PlaybackStore;
use crate::registry::ConnectionRegistry;
use crate::storage::Storage;

/// Composition root of the server: owns the connection registry and the room
/// actors, and is the single entry point the transport feeds events into.
/// Cloning is cheap, all state is shared.
#[derive(Clone)]
pub struct Hub {
    registry: Arc<ConnectionRegistry>,
    rooms: RoomManager,
}

impl Hub {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let playback = Arc::new(PlaybackStore::new());
        let rooms = RoomManager::new(storage, playback, registry.clone());
        Self { registry, rooms }
    }

    /// Register a fresh connection and hand its outbound event queue to the
    /// caller. The transport drains the receiver into the socket.
    pub fn register(&self) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        self.registry.register()
    }

    pub fn connections(&self) -> usize {
        self.registry.len()
    }

    /// Route one inbound event. Events of unjoined connections (other than
    /// join) and events for rooms the connection is not bound to are dropped
    /// as stale.
    pub async fn dispatch(&self, conn_id: ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::Join { room_id, user_data } => {
                self.handle_join(conn_id, room_id, user_data).await;
            }

            ClientEvent::ChatMessage {
                room_id,
                author,
                text,
            } => {
                if self.room_scoped(&conn_id, &room_id).is_none() {
                    return;
                }
                self.rooms
                    .send_to(&room_id, RoomCommand::Chat { author, text })
                    .await;
            }

            ClientEvent::PlayerAction {
                room_id,
                position,
                is_paused,
                speed,
            } => {
                let state = PlaybackState {
                    position,
                    is_paused,
                    speed,
                };
                if !state.is_valid() {
                    warn!(
                        "Dropping player action with out-of-domain values from connection {:?}",
                        conn_id
                    );
                    return;
                }
                if self.room_scoped(&conn_id, &room_id).is_none() {
                    return;
                }
                self.rooms
                    .send_to(&room_id, RoomCommand::PlayerAction { conn_id, state })
                    .await;
            }

            ClientEvent::RequestState { room_id } => {
                if self.room_scoped(&conn_id, &room_id).is_none() {
                    return;
                }
                self.rooms
                    .send_to(&room_id, RoomCommand::RequestState { conn_id })
                    .await;
            }

            ClientEvent::NewPeer { room_id, from } => {
                let Some((_, user)) = self.room_scoped(&conn_id, &room_id) else {
                    return;
                };
                // Identity comes from the binding, not from the payload.
                if from != user {
                    debug!(
                        "Connection {:?} announced itself as {}, using bound user {}",
                        conn_id, from, user
                    );
                }
                self.rooms
                    .send_to(&room_id, RoomCommand::AnnouncePeer { conn_id, from: user })
                    .await;
            }

            ClientEvent::Signal(envelope) => {
                // Signal events carry no room id, the binding decides.
                let Some((room, user)) = self.registry.binding(&conn_id) else {
                    debug!("Dropping signal from unjoined connection {:?}", conn_id);
                    return;
                };
                self.rooms
                    .send_to(
                        &room,
                        RoomCommand::Signal {
                            from: user,
                            envelope,
                        },
                    )
                    .await;
            }
        }
    }

    /// Tear the connection down. Safe to call more than once, only the first
    /// call finds the registry entry and notifies the room.
    pub async fn disconnect(&self, conn_id: ConnectionId) {
        let Some(entry) = self.registry.unregister(&conn_id) else {
            return;
        };
        info!("Connection {:?} unregistered", conn_id);

        let Some((room, _)) = entry.binding else {
            return;
        };
        let Some(sender) = self.rooms.lookup(&room) else {
            return;
        };
        if sender.send(RoomCommand::Leave { conn_id }).await.is_err() {
            error!("Room {} died", room);
        }
    }

    async fn handle_join(&self, conn_id: ConnectionId, room_id: RoomId, profile: UserProfile) {
        match self.registry.binding(&conn_id) {
            // Rejoining the same room reruns the flow, switching rooms over a
            // live connection is not supported.
            Some((bound, _)) if bound != room_id => {
                warn!(
                    "Connection {:?} is bound to room {}, dropping join into {}",
                    conn_id, bound, room_id
                );
                return;
            }
            _ => {}
        }

        let Some(outbound) = self.registry.outbound(&conn_id) else {
            warn!("Join from unregistered connection {:?}", conn_id);
            return;
        };

        let sender = self.rooms.get_room_sender(&room_id);
        let cmd = RoomCommand::Join {
            conn_id,
            profile,
            outbound,
        };
        if sender.send(cmd).await.is_err() {
            error!("Room {} died", room_id);
        }
    }

    fn room_scoped(&self, conn_id: &ConnectionId, room_id: &RoomId) -> Option<(RoomId, UserId)> {
        let Some((room, user)) = self.registry.binding(conn_id) else {
            debug!("Dropping event from unjoined connection {:?}", conn_id);
            return None;
        };
        if &room != room_id {
            debug!(
                "Dropping stale event for room {} from connection {:?} bound to {}",
                room_id, conn_id, room
            );
            return None;
        }
        Some((room, user))
    }
}
