use serde::{Deserialize, Serialize};

/// One persisted chat entry. History is append-only and ordered by
/// `created_at` (Unix milliseconds, stamped by the server).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub created_at: i64,
}
