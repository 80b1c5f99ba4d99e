//! Client-side session engine for a document question-answering service.
//!
//! Users upload PDF documents, optionally persist them to a durable remote
//! store, and converse with an assistant grounded in those documents across
//! two isolated scopes. This crate holds the state machines behind that
//! surface: the ordered message store, the optimistic-update reconciliation
//! engine, the upload staging coordinator and the best-effort bootstrap
//! loader. Rendering is the embedding application's concern.

pub mod backend;
pub mod config;
pub mod models;
pub mod services;
pub mod session;

pub use backend::{BackendError, DocumentQa, HttpBackend};
pub use config::{BackendConfig, RetryPolicy};
pub use models::{FileCandidate, IngestionStatus, Role, Scope, StagedFile, Turn};
pub use services::{ChatSession, IngestionCoordinator, MessageStore, SubmitOutcome};
pub use session::SessionView;
