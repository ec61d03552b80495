use tokio::sync::mpsc;

use marquee_core::{ConnectionId, PlaybackState, ServerEvent, SignalEnvelope, UserId, UserProfile};

/// Команды, поступающие в актор комнаты от хаба.
#[derive(Debug)]
pub enum RoomCommand {
    /// Соединение входит в комнату. Несёт очередь исходящих событий,
    /// чтобы комната могла отвечать и рассылать.
    Join {
        conn_id: ConnectionId,
        profile: UserProfile,
        outbound: mpsc::UnboundedSender<ServerEvent>,
    },

    /// Сообщение чата. Сначала запись в историю, потом рассылка.
    Chat { author: String, text: String },

    /// Действие плеера: новое каноническое состояние комнаты.
    PlayerAction {
        conn_id: ConnectionId,
        state: PlaybackState,
    },

    /// Запрос текущего состояния плеера, ответ только запросившему.
    RequestState { conn_id: ConnectionId },

    /// Приглашение к голосовой связи для всех, кроме отправителя.
    AnnouncePeer {
        conn_id: ConnectionId,
        from: UserId,
    },

    /// Адресный сигнальный пакет для одного пира.
    Signal {
        from: UserId,
        envelope: SignalEnvelope,
    },

    /// Сигнал о разрыве соединения.
    Leave { conn_id: ConnectionId },
}
