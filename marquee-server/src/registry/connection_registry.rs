use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::debug;

use marquee_core::{ConnectionId, RoomId, ServerEvent, UserId};

/// A live connection's bookkeeping entry: its outbound queue and, once the
/// client has joined, the (room, user) it is bound to.
#[derive(Debug, Clone)]
pub struct ConnectionEntry {
    pub outbound: mpsc::UnboundedSender<ServerEvent>,
    pub binding: Option<(RoomId, UserId)>,
}

/// Tracks every live connection of the hub. One entry per connection,
/// inserted on transport connect and removed exactly once on disconnect.
pub struct ConnectionRegistry {
    connections: DashMap<ConnectionId, ConnectionEntry>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Mint a fresh connection id and its outbound queue. The sender side is
    /// stored here, the receiver is handed to the transport writer.
    pub fn register(&self) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let conn_id = ConnectionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.insert(
            conn_id,
            ConnectionEntry {
                outbound: tx,
                binding: None,
            },
        );
        (conn_id, rx)
    }

    pub fn bind(&self, conn_id: &ConnectionId, room: RoomId, user: UserId) {
        if let Some(mut entry) = self.connections.get_mut(conn_id) {
            entry.binding = Some((room, user));
        } else {
            debug!("Attempted to bind unregistered connection {:?}", conn_id);
        }
    }

    pub fn binding(&self, conn_id: &ConnectionId) -> Option<(RoomId, UserId)> {
        self.connections
            .get(conn_id)
            .and_then(|entry| entry.binding.clone())
    }

    pub fn outbound(&self, conn_id: &ConnectionId) -> Option<mpsc::UnboundedSender<ServerEvent>> {
        self.connections
            .get(conn_id)
            .map(|entry| entry.outbound.clone())
    }

    pub fn contains(&self, conn_id: &ConnectionId) -> bool {
        self.connections.contains_key(conn_id)
    }

    /// Remove the entry. Returns `None` on the second and later calls, which
    /// is what makes disconnect handling run at most once per connection.
    pub fn unregister(&self, conn_id: &ConnectionId) -> Option<ConnectionEntry> {
        self.connections.remove(conn_id).map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
