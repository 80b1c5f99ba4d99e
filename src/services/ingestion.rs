use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;

use crate::backend::DocumentQa;
use crate::models::{FileCandidate, IngestionStatus, StagedFile};

/// Validation message raised when a non-PDF file is selected.
pub const ONLY_PDF_ACCEPTED: &str = "Only PDF files are accepted";

/// Status message recorded when the upload request itself fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred while uploading files";

/// How long a successful upload status stays visible. Failures stick around
/// until superseded.
const STATUS_TTL: Duration = Duration::from_secs(5);

struct PostedStatus {
    status: IngestionStatus,
    posted_at: Instant,
}

struct IngestState {
    staged: Vec<StagedFile>,
    validation_error: Option<String>,
    status: Option<PostedStatus>,
    in_flight: bool,
}

/// Validates, stages and submits one batch of candidate documents.
/// Independent of the chat pipeline: an upload and a query may be in flight
/// at the same time, and the coordinator never touches the message store.
pub struct IngestionCoordinator {
    backend: Arc<dyn DocumentQa>,
    state: Mutex<IngestState>,
}

impl IngestionCoordinator {
    pub fn new(backend: Arc<dyn DocumentQa>) -> Self {
        Self {
            backend,
            state: Mutex::new(IngestState {
                staged: Vec::new(),
                validation_error: None,
                status: None,
                in_flight: false,
            }),
        }
    }

    /// Partition the selection into accepted PDFs and rejects. Accepted
    /// files replace the previous staged set — re-selecting always starts a
    /// fresh batch. Any reject raises the validation message.
    pub fn stage(&self, candidates: Vec<FileCandidate>) {
        let mut state = self.state();
        state.validation_error = None;

        let staged: Vec<StagedFile> = candidates
            .into_iter()
            .map(StagedFile::from_candidate)
            .collect();
        let (accepted, rejected): (Vec<StagedFile>, Vec<StagedFile>) =
            staged.into_iter().partition(|file| file.accepted);

        if !rejected.is_empty() {
            state.validation_error = Some(ONLY_PDF_ACCEPTED.to_string());
        }
        state.staged = accepted;
    }

    /// Remove one staged file by position. Out-of-range indices are dropped
    /// silently; removal is only possible before a submission starts.
    pub fn unstage(&self, index: usize) {
        let mut state = self.state();
        if index >= state.staged.len() {
            tracing::debug!("Ignoring unstage for out-of-range index {}", index);
            return;
        }
        state.staged.remove(index);
    }

    /// Send the staged batch with the persistence routing flag. Returns
    /// false without a backend call when nothing is staged or a submission
    /// is already in flight. The staged set is consumed by the attempt
    /// regardless of how it ends.
    pub async fn submit(&self, persist: bool) -> bool {
        let files = {
            let mut state = self.state();
            if state.in_flight || state.staged.is_empty() {
                return false;
            }
            state.in_flight = true;
            state.status = None;
            std::mem::take(&mut state.staged)
        };

        let result = self.backend.ingest_documents(&files, persist).await;

        let mut state = self.state();
        let status = match result {
            Ok(reply) => IngestionStatus {
                success: reply.is_success(),
                message: reply.message,
            },
            Err(e) => {
                tracing::warn!("Upload request failed: {}", e);
                IngestionStatus {
                    success: false,
                    message: UPLOAD_FAILED_MESSAGE.to_string(),
                }
            }
        };
        state.status = Some(PostedStatus {
            status,
            posted_at: Instant::now(),
        });
        state.in_flight = false;
        true
    }

    /// The staged batch as it would be submitted.
    pub fn staged(&self) -> Vec<StagedFile> {
        self.state().staged.clone()
    }

    pub fn validation_error(&self) -> Option<String> {
        self.state().validation_error.clone()
    }

    pub fn is_uploading(&self) -> bool {
        self.state().in_flight
    }

    /// The current upload status, if any. Successful statuses expire after
    /// five seconds; failed ones persist until the next submission.
    pub fn status(&self) -> Option<IngestionStatus> {
        let mut state = self.state();
        let expired = matches!(
            &state.status,
            Some(posted) if posted.status.success && posted.posted_at.elapsed() >= STATUS_TTL
        );
        if expired {
            state.status = None;
        }
        state.status.as_ref().map(|posted| posted.status.clone())
    }

    fn state(&self) -> MutexGuard<'_, IngestState> {
        self.state.lock().expect("ingestion state poisoned")
    }
}
