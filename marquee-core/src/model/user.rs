use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier supplied by the client on join.
/// Unique only within a room's active membership, nothing more is assumed.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Данные пользователя из события join. Кроме id и имени клиент может
/// прислать произвольные поля, они проходят насквозь без интерпретации.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_name(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            extra: serde_json::Map::new(),
        }
    }

    /// Имя для системных сообщений: name, а если его нет, то id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.0.as_str())
    }
}
