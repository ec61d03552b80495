use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use marquee_core::{
    ConnectionId, PlaybackState, RoomId, ServerEvent, SignalEnvelope, UserId, UserProfile,
    now_millis,
};

use crate::chat::ChatRelay;
use crate::hub::room_command::RoomCommand;
use crate::hub::roster::RoomRoster;
use crate::playback::PlaybackStore;
use crate::presence::PresenceTracker;
use crate::registry::ConnectionRegistry;
use crate::signaling::SignalingRelay;
use crate::storage::Storage;

/// One room's event loop. A room owns its roster and is the single writer of
/// everything room-scoped, so commands from many connections are applied in
/// the order they arrive and never interleave.
pub struct Room {
    id: RoomId,
    roster: RoomRoster,
    presence: PresenceTracker,
    chat: ChatRelay,
    playback: Arc<PlaybackStore>,
    signaling: SignalingRelay,
    registry: Arc<ConnectionRegistry>,
    command_rx: mpsc::Receiver<RoomCommand>,
}

impl Room {
    pub fn new(
        id: RoomId,
        command_rx: mpsc::Receiver<RoomCommand>,
        storage: Arc<dyn Storage>,
        playback: Arc<PlaybackStore>,
        registry: Arc<ConnectionRegistry>,
    ) -> Self {
        Self {
            id,
            roster: RoomRoster::new(),
            presence: PresenceTracker::new(storage.clone()),
            chat: ChatRelay::new(storage),
            playback,
            signaling: SignalingRelay,
            registry,
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Room {} event loop started", self.id);

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Room {} event loop finished", self.id);
    }

    async fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Join {
                conn_id,
                profile,
                outbound,
            } => self.handle_join(conn_id, profile, outbound).await,

            RoomCommand::Chat { author, text } => self.handle_chat(author, text).await,

            RoomCommand::PlayerAction { conn_id, state } => {
                self.handle_player_action(conn_id, state);
            }

            RoomCommand::RequestState { conn_id } => self.handle_request_state(conn_id),

            RoomCommand::AnnouncePeer { conn_id, from } => {
                self.signaling.announce(&self.roster, &conn_id, &from);
            }

            RoomCommand::Signal { from, envelope } => self.handle_signal(from, envelope),

            RoomCommand::Leave { conn_id } => self.handle_leave(conn_id).await,
        }
    }

    async fn handle_join(
        &mut self,
        conn_id: ConnectionId,
        profile: UserProfile,
        outbound: mpsc::UnboundedSender<ServerEvent>,
    ) {
        info!(
            "Processing join of user {} into room {}",
            profile.id, self.id
        );

        // A rejoin that switches user ids releases the old identity first,
        // otherwise its membership record would outlive the connection.
        if self
            .roster
            .identity(&conn_id)
            .is_some_and(|current| current != &profile.id)
        {
            self.handle_leave(conn_id).await;
        }

        let members = match self.presence.join(&self.id, &profile.id).await {
            Ok(members) => members,
            Err(e) => {
                error!(
                    "Join of user {} into room {} aborted: {}",
                    profile.id, self.id, e
                );
                let _ = outbound.send(ServerEvent::SystemMessage {
                    text: "failed to join the room".to_string(),
                    created_at: now_millis(),
                });
                return;
            }
        };

        self.registry
            .bind(&conn_id, self.id.clone(), profile.id.clone());

        let name = profile.display_name().to_string();
        self.roster.insert(conn_id, profile, outbound.clone());

        // Room-wide first: the refreshed member list and the notice.
        self.roster.broadcast(ServerEvent::Members(members));
        self.roster.broadcast(ServerEvent::SystemMessage {
            text: format!("{} joined the room", name),
            created_at: now_millis(),
        });

        // Then the joiner's own replies. A failed history read degrades to an
        // empty history, the membership above is already recorded.
        let history = match self.chat.history(&self.id).await {
            Ok(history) => history,
            Err(e) => {
                warn!("History of room {} unavailable: {}", self.id, e);
                Vec::new()
            }
        };
        let _ = outbound.send(ServerEvent::History(history));
        let _ = outbound.send(ServerEvent::CurrentState(self.playback.get(&self.id)));

        // A disconnect that raced this join found no binding yet and queued
        // no Leave command. Once the registration is gone, leave here.
        if !self.registry.contains(&conn_id) {
            self.handle_leave(conn_id).await;
        }
    }

    async fn handle_chat(&mut self, author: String, text: String) {
        match self.chat.post(&self.id, &author, &text).await {
            Ok(message) => self.roster.broadcast(ServerEvent::ChatMessage(message)),
            // Not persisted means not broadcast, otherwise history and the
            // live view would disagree.
            Err(e) => warn!("Dropping chat message in room {}: {}", self.id, e),
        }
    }

    fn handle_player_action(&mut self, conn_id: ConnectionId, state: PlaybackState) {
        self.playback.apply(&self.id, state);
        self.roster
            .broadcast_except(&conn_id, ServerEvent::PlayerUpdate(state));
    }

    fn handle_request_state(&self, conn_id: ConnectionId) {
        let state = self.playback.get(&self.id);
        self.roster.send(&conn_id, ServerEvent::CurrentState(state));
    }

    fn handle_signal(&self, from: UserId, envelope: SignalEnvelope) {
        self.signaling.relay(&self.roster, &from, envelope);
    }

    async fn handle_leave(&mut self, conn_id: ConnectionId) {
        let Some(member) = self.roster.remove(&conn_id) else {
            return;
        };
        let name = member.profile.display_name().to_string();
        let user = member.profile.id;

        info!("User {} left room {}", user, self.id);

        // The connection is gone either way. If storage cannot confirm the
        // removal there is no fresh list to broadcast, only the notice.
        match self.presence.leave(&self.id, &user).await {
            Ok(members) => self.roster.broadcast(ServerEvent::Members(members)),
            Err(e) => error!(
                "Failed to record leave of user {} from room {}: {}",
                user, self.id, e
            ),
        }

        self.roster.broadcast(ServerEvent::SystemMessage {
            text: format!("{} left the room", name),
            created_at: now_millis(),
        });
    }
}
