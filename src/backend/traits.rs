use async_trait::async_trait;

use super::types::{BackendError, BootstrapPayload, IngestReply, QueryReply};
use crate::models::{Scope, StagedFile};

/// The document-question-answering backend as seen by the session engine.
/// Parsing, embedding, retrieval and inference all live behind this trait.
#[async_trait]
pub trait DocumentQa: Send + Sync {
    /// Read prior session state for a scope. One call per view mount.
    async fn fetch_bootstrap(&self, scope: Scope) -> Result<BootstrapPayload, BackendError>;

    /// Submit a question scoped to one document context.
    async fn submit_query(&self, question: &str, scope: Scope)
        -> Result<QueryReply, BackendError>;

    /// Ask the backend to drop the persisted history for a scope.
    async fn clear_history(&self, scope: Scope) -> Result<(), BackendError>;

    /// Send one batch of documents, optionally routed to the durable store.
    async fn ingest_documents(
        &self,
        files: &[StagedFile],
        persist: bool,
    ) -> Result<IngestReply, BackendError>;
}
