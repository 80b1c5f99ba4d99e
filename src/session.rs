use std::sync::Arc;

use crate::backend::DocumentQa;
use crate::config::RetryPolicy;
use crate::models::Scope;
use crate::services::bootstrap;
use crate::services::{ChatSession, IngestionCoordinator};

/// Per-scope composition root: one chat session, plus an ingestion
/// coordinator for the local scope and a document-count indicator for the
/// persistent scope. Scope identity is fixed at mount; clearing the chat
/// never changes it.
pub struct SessionView {
    scope: Scope,
    chat: ChatSession,
    uploader: Option<IngestionCoordinator>,
    document_count: Option<u64>,
}

impl SessionView {
    /// Mount the local-scope view: chat plus the document uploader.
    pub async fn mount_local(backend: Arc<dyn DocumentQa>, retry: RetryPolicy) -> Self {
        Self::mount(backend, Scope::Local, retry).await
    }

    /// Mount the persistent-scope view: chat plus the stored-document count.
    pub async fn mount_persistent(backend: Arc<dyn DocumentQa>, retry: RetryPolicy) -> Self {
        Self::mount(backend, Scope::Persistent, retry).await
    }

    async fn mount(backend: Arc<dyn DocumentQa>, scope: Scope, retry: RetryPolicy) -> Self {
        // Exactly one bootstrap read per mount; failures hydrate nothing.
        let initial = bootstrap::load_initial_state(&backend, scope).await;

        let chat = ChatSession::new(Arc::clone(&backend), scope, retry);
        chat.hydrate(initial.history);

        let uploader = match scope {
            Scope::Local => Some(IngestionCoordinator::new(Arc::clone(&backend))),
            Scope::Persistent => None,
        };

        Self {
            scope,
            chat,
            uploader,
            document_count: initial.document_count,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// The uploader, present on the local scope only.
    pub fn uploader(&self) -> Option<&IngestionCoordinator> {
        self.uploader.as_ref()
    }

    /// Documents in the durable store as of mount, persistent scope only.
    pub fn document_count(&self) -> Option<u64> {
        self.document_count
    }
}
