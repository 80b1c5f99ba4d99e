use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use colloquy::backend::{
    BackendError, BootstrapPayload, DocumentQa, IngestReply, QueryReply, ReplyStatus,
};
use colloquy::{RetryPolicy, Role, Scope, SessionView, StagedFile, Turn};

struct BootstrapBackend {
    history: Vec<Turn>,
    document_count: Option<u64>,
    fail: bool,
    bootstrap_calls: AtomicUsize,
}

impl BootstrapBackend {
    fn new(history: Vec<Turn>, document_count: Option<u64>) -> Arc<Self> {
        Arc::new(Self {
            history,
            document_count,
            fail: false,
            bootstrap_calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            history: Vec::new(),
            document_count: None,
            fail: true,
            bootstrap_calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl DocumentQa for BootstrapBackend {
    async fn fetch_bootstrap(&self, scope: Scope) -> Result<BootstrapPayload, BackendError> {
        self.bootstrap_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BackendError::InvalidResponse(
                "expected value at line 1".to_string(),
            ));
        }
        Ok(BootstrapPayload {
            history: self.history.clone(),
            document_count: match scope {
                Scope::Persistent => self.document_count,
                Scope::Local => None,
            },
        })
    }

    async fn submit_query(
        &self,
        _question: &str,
        _scope: Scope,
    ) -> Result<QueryReply, BackendError> {
        Ok(QueryReply {
            status: ReplyStatus::Success,
            history: Some(Vec::new()),
        })
    }

    async fn clear_history(&self, _scope: Scope) -> Result<(), BackendError> {
        Ok(())
    }

    async fn ingest_documents(
        &self,
        _files: &[StagedFile],
        _persist: bool,
    ) -> Result<IngestReply, BackendError> {
        Ok(IngestReply {
            status: ReplyStatus::Success,
            message: "Processed 0 files".to_string(),
        })
    }
}

fn turn(role: Role, content: &str) -> Turn {
    Turn {
        role,
        content: content.to_string(),
        timestamp: "9:12:45 AM".to_string(),
    }
}

#[tokio::test]
async fn local_view_gets_an_uploader_and_no_document_count() {
    let history = vec![
        turn(Role::Assistant, "earlier answer"),
        turn(Role::User, "earlier question"),
    ];
    let backend = BootstrapBackend::new(history.clone(), Some(7));

    let view = SessionView::mount_local(backend.clone(), RetryPolicy::disabled()).await;

    assert_eq!(view.scope(), Scope::Local);
    assert_eq!(view.chat().history(), history);
    assert!(view.uploader().is_some());
    assert!(view.document_count().is_none());
    assert_eq!(backend.bootstrap_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn persistent_view_gets_the_document_count_and_no_uploader() {
    let backend = BootstrapBackend::new(Vec::new(), Some(4));

    let view = SessionView::mount_persistent(backend, RetryPolicy::disabled()).await;

    assert_eq!(view.scope(), Scope::Persistent);
    assert!(view.uploader().is_none());
    assert_eq!(view.document_count(), Some(4));
}

#[tokio::test]
async fn bootstrap_failure_mounts_an_empty_session() {
    let backend = BootstrapBackend::failing();

    let view = SessionView::mount_persistent(backend.clone(), RetryPolicy::disabled()).await;

    assert!(view.chat().history().is_empty());
    assert!(view.document_count().is_none());
    // One attempt per mount, no automatic retry.
    assert_eq!(backend.bootstrap_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn mounted_session_is_immediately_usable() {
    let backend = BootstrapBackend::failing();
    let view = SessionView::mount_local(backend, RetryPolicy::disabled()).await;

    // A failed bootstrap must not leave the session wedged.
    let outcome = view.chat().submit("first question after bad mount").await;
    assert_eq!(outcome, colloquy::SubmitOutcome::Reconciled);
    assert!(!view.chat().is_pending());
}
