use dashmap::DashMap;

use marquee_core::{PlaybackState, RoomId, now_millis};

struct PlaybackEntry {
    state: PlaybackState,
    updated_at: i64,
}

/// Volatile last-write-wins store of the canonical playback state, one entry
/// per room that has seen at least one player action. Lost on restart.
pub struct PlaybackStore {
    rooms: DashMap<RoomId, PlaybackEntry>,
}

impl PlaybackStore {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Overwrite the room's state with the given snapshot. No merging, the
    /// update the hub processes last fully replaces what was there.
    pub fn apply(&self, room: &RoomId, state: PlaybackState) {
        self.rooms.insert(
            room.clone(),
            PlaybackEntry {
                state,
                updated_at: now_millis(),
            },
        );
    }

    /// Rooms that never saw an action report the default state
    /// (position 0, paused, normal speed).
    pub fn get(&self, room: &RoomId) -> PlaybackState {
        self.rooms
            .get(room)
            .map(|entry| entry.state)
            .unwrap_or_default()
    }

    /// When the room's state was last overwritten, Unix milliseconds.
    pub fn last_updated(&self, room: &RoomId) -> Option<i64> {
        self.rooms.get(room).map(|entry| entry.updated_at)
    }
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new()
    }
}
