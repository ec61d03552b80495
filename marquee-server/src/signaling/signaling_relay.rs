use tracing::warn;

use marquee_core::{ConnectionId, ServerEvent, SignalEnvelope, UserId};

use crate::hub::RoomRoster;

/// Forwards voice-call handshake traffic between peers of one room. The
/// payloads stay opaque, nothing is parsed, queued or retried here.
pub struct SignalingRelay;

impl SignalingRelay {
    /// Invite every room member except the announcing connection to open a
    /// peer channel with `from`.
    pub fn announce(&self, roster: &RoomRoster, sender: &ConnectionId, from: &UserId) {
        roster.broadcast_except(sender, ServerEvent::NewPeer { from: from.clone() });
    }

    /// Deliver the envelope to the one peer it is addressed to. A peer that
    /// is not currently in the roster simply misses the envelope.
    pub fn relay(&self, roster: &RoomRoster, from: &UserId, envelope: SignalEnvelope) {
        let target = envelope.to.clone();
        let event = ServerEvent::Signal {
            from: from.clone(),
            description: envelope.description,
            candidate: envelope.candidate,
        };
        if !roster.send_to_user(&target, event) {
            warn!("Attempted to send signal to disconnected user {}", target);
        }
    }
}
