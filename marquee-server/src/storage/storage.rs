use async_trait::async_trait;
use thiserror::Error;

use marquee_core::{ChatMessage, RoomId, UserId};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Трейт долговременного хранилища, которое должна предоставить внешняя
/// система (база данных, облачный провайдер). Хаб хранит через него строки
/// комнат, членство и историю чата; живое состояние комнат остаётся в памяти.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Создать строку комнаты, если её ещё нет.
    async fn upsert_room(&self, room: &RoomId) -> Result<(), StorageError>;

    /// Записать членство (room, user). Повторный вызов не создаёт дубликата.
    async fn upsert_member(&self, room: &RoomId, user: &UserId) -> Result<(), StorageError>;

    /// Удалить членство. Отсутствующая запись не является ошибкой.
    async fn delete_member(&self, room: &RoomId, user: &UserId) -> Result<(), StorageError>;

    /// Список участников комнаты.
    async fn members(&self, room: &RoomId) -> Result<Vec<UserId>, StorageError>;

    /// Дописать сообщение в историю комнаты.
    async fn append_message(&self, room: &RoomId, message: &ChatMessage)
    -> Result<(), StorageError>;

    /// Полная история комнаты по возрастанию `created_at`.
    async fn messages(&self, room: &RoomId) -> Result<Vec<ChatMessage>, StorageError>;
}
