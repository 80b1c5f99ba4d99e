use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Turn;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The server was reachable but answered with an error status.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Transport-class errors: the server never produced a usable answer.
    /// These are the only errors eligible for an automatic retry.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BackendError::Network(_) | BackendError::InvalidResponse(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
}

/// Answer to a chat query. On success the backend returns the full
/// authoritative history for the scope; the engine replaces its store with
/// it wholesale.
#[derive(Debug, Clone)]
pub struct QueryReply {
    pub status: ReplyStatus,
    pub history: Option<Vec<Turn>>,
}

impl QueryReply {
    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }
}

/// Answer to a batched document upload. One status/message pair covers the
/// whole batch.
#[derive(Debug, Clone)]
pub struct IngestReply {
    pub status: ReplyStatus,
    pub message: String,
}

impl IngestReply {
    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }
}

/// Prior state recovered at view mount. `document_count` is populated for
/// the persistent scope only.
#[derive(Debug, Clone, Default)]
pub struct BootstrapPayload {
    pub history: Vec<Turn>,
    pub document_count: Option<u64>,
}
