use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::{BackendError, DocumentQa, QueryReply};
use crate::config::RetryPolicy;
use crate::models::{Scope, Turn};
use crate::services::store::MessageStore;

/// Fixed reply shown when the backend answered but reported an error.
pub const PROCESSING_ERROR_REPLY: &str =
    "Sorry, I encountered an error while processing your request.";

/// Fixed reply shown when the backend could not be reached at all. Must
/// stay textually distinct from `PROCESSING_ERROR_REPLY`.
pub const CONNECTION_ERROR_REPLY: &str =
    "Sorry, I couldn't connect to the server. Please try again later.";

/// How one `submit` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input or an exchange already pending; nothing was sent and the
    /// store is untouched.
    Rejected,
    /// The backend's history replaced the store wholesale.
    Reconciled,
    /// The backend claimed success but sent no usable history; the
    /// provisional turn stays as-is.
    Unreconciled,
    /// The backend answered with an error status.
    LogicalFailure,
    /// The backend never produced a usable answer.
    TransportFailure,
}

struct ChatState {
    store: MessageStore,
    pending: bool,
}

/// One scope's conversation: submits a user message optimistically, then
/// reconciles the local store against the backend's answer. At most one
/// exchange is in flight per session; overlapping submissions are dropped,
/// not queued.
pub struct ChatSession {
    backend: Arc<dyn DocumentQa>,
    scope: Scope,
    retry: RetryPolicy,
    state: Mutex<ChatState>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn DocumentQa>, scope: Scope, retry: RetryPolicy) -> Self {
        Self {
            backend,
            scope,
            retry,
            state: Mutex::new(ChatState {
                store: MessageStore::new(),
                pending: false,
            }),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Snapshot of the current turn sequence, newest first.
    pub fn history(&self) -> Vec<Turn> {
        self.state().store.turns().to_vec()
    }

    pub fn is_pending(&self) -> bool {
        self.state().pending
    }

    /// Replace the session history with previously persisted turns. Called
    /// once at view mount, before any user interaction.
    pub fn hydrate(&self, turns: Vec<Turn>) {
        self.state().store.replace_all(turns);
    }

    /// Submit a user message and reconcile against the backend's answer.
    ///
    /// The provisional user turn is prepended before any I/O so the caller
    /// can render it immediately. On success the returned history wins
    /// outright and replaces the store; on failure a synthetic assistant
    /// turn is prepended and the provisional turn stays. The pending flag is
    /// cleared on every exit path.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            return SubmitOutcome::Rejected;
        }

        {
            let mut state = self.state();
            if state.pending {
                return SubmitOutcome::Rejected;
            }
            state.pending = true;
            // Verbatim content: only the emptiness check uses the trimmed form.
            state.store.append(Turn::user(text));
        }

        let result = self.query_with_retry(text).await;

        let mut state = self.state();
        let outcome = match result {
            Ok(reply) if reply.is_success() => match reply.history {
                Some(history) => {
                    state.store.replace_all(history);
                    SubmitOutcome::Reconciled
                }
                None => {
                    tracing::warn!(
                        "Query succeeded for {} scope but returned no history; keeping provisional turn",
                        self.scope
                    );
                    SubmitOutcome::Unreconciled
                }
            },
            Ok(_) => {
                state.store.append(Turn::assistant(PROCESSING_ERROR_REPLY));
                SubmitOutcome::LogicalFailure
            }
            Err(e) if e.is_transport() => {
                tracing::warn!("Query transport failure for {} scope: {}", self.scope, e);
                state.store.append(Turn::assistant(CONNECTION_ERROR_REPLY));
                SubmitOutcome::TransportFailure
            }
            Err(e) => {
                tracing::warn!("Query rejected by server for {} scope: {}", self.scope, e);
                state.store.append(Turn::assistant(PROCESSING_ERROR_REPLY));
                SubmitOutcome::LogicalFailure
            }
        };
        state.pending = false;
        outcome
    }

    /// Ask the backend to clear this scope's history, then empty the local
    /// store. The local clear is not gated on the remote call succeeding.
    pub async fn clear(&self) {
        if let Err(e) = self.backend.clear_history(self.scope).await {
            tracing::warn!(
                "Failed to clear remote history for {} scope: {}",
                self.scope,
                e
            );
        }
        self.state().store.clear();
    }

    async fn query_with_retry(&self, question: &str) -> Result<QueryReply, BackendError> {
        let mut attempt = 0;
        loop {
            match self.backend.submit_query(question, self.scope).await {
                Err(e) if e.is_transport() && attempt < self.retry.attempts => {
                    attempt += 1;
                    tracing::debug!(
                        "Retrying query after transport failure (attempt {}): {}",
                        attempt,
                        e
                    );
                    tokio::time::sleep(self.retry.backoff).await;
                }
                result => return result,
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().expect("chat session state poisoned")
    }
}
