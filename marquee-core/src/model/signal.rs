use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Пакет голосового сигналинга между двумя пирами комнаты.
/// `description` и `candidate` не интерпретируются, хаб только пересылает их.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SignalEnvelope {
    pub to: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<serde_json::Value>,
}
