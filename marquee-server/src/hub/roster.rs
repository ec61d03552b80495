use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{error, warn};

use marquee_core::{ConnectionId, ServerEvent, UserId, UserProfile};

/// Участник комнаты: его профиль и очередь исходящих событий соединения.
pub struct RosterMember {
    pub profile: UserProfile,
    pub outbound: mpsc::UnboundedSender<ServerEvent>,
}

/// Живой состав комнаты: кто сейчас подключён и куда слать события.
/// Принадлежит актору комнаты, поэтому обходится без блокировок.
pub struct RoomRoster {
    members: HashMap<ConnectionId, RosterMember>,
    // Индекс user -> connection для адресной доставки. При двух соединениях
    // одного пользователя индекс указывает на более позднее.
    by_user: HashMap<UserId, ConnectionId>,
}

impl RoomRoster {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            by_user: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        conn_id: ConnectionId,
        profile: UserProfile,
        outbound: mpsc::UnboundedSender<ServerEvent>,
    ) {
        let user = profile.id.clone();
        if let Some(replaced) = self
            .members
            .insert(conn_id, RosterMember { profile, outbound })
        {
            // Повторный insert того же соединения под новым id: указатель
            // старого id не должен остаться висеть на этом соединении.
            if replaced.profile.id != user
                && self.by_user.get(&replaced.profile.id) == Some(&conn_id)
            {
                self.by_user.remove(&replaced.profile.id);
            }
        }
        self.by_user.insert(user, conn_id);
    }

    pub fn remove(&mut self, conn_id: &ConnectionId) -> Option<RosterMember> {
        let member = self.members.remove(conn_id)?;
        // Не трогаем индекс, если пользователь уже перезашёл с другого
        // соединения.
        if self.by_user.get(&member.profile.id) == Some(conn_id) {
            self.by_user.remove(&member.profile.id);
        }
        Some(member)
    }

    pub fn contains(&self, conn_id: &ConnectionId) -> bool {
        self.members.contains_key(conn_id)
    }

    /// Под каким id соединение сейчас состоит в комнате.
    pub fn identity(&self, conn_id: &ConnectionId) -> Option<&UserId> {
        self.members.get(conn_id).map(|member| &member.profile.id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Отправить событие конкретному соединению.
    pub fn send(&self, conn_id: &ConnectionId, event: ServerEvent) {
        if let Some(member) = self.members.get(conn_id) {
            if let Err(e) = member.outbound.send(event) {
                error!("Failed to queue event for connection {:?}: {}", conn_id, e);
            }
        } else {
            warn!(
                "Attempted to send event to connection {:?} not in the roster",
                conn_id
            );
        }
    }

    /// Отправить событие пользователю по id. Возвращает false, если такого
    /// пользователя сейчас нет в комнате.
    pub fn send_to_user(&self, user: &UserId, event: ServerEvent) -> bool {
        let Some(conn_id) = self.by_user.get(user) else {
            return false;
        };
        self.send(conn_id, event);
        true
    }

    /// Разослать событие всем участникам комнаты.
    pub fn broadcast(&self, event: ServerEvent) {
        for member in self.members.values() {
            // Закрытые очереди вычищаются при обработке disconnect.
            let _ = member.outbound.send(event.clone());
        }
    }

    /// Разослать событие всем, кроме одного соединения (обычно отправителя).
    pub fn broadcast_except(&self, except: &ConnectionId, event: ServerEvent) {
        for (conn_id, member) in &self.members {
            if conn_id == except {
                continue;
            }
            let _ = member.outbound.send(event.clone());
        }
    }
}

impl Default for RoomRoster {
    fn default() -> Self {
        Self::new()
    }
}
