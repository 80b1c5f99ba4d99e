pub mod bootstrap;
pub mod chat;
pub mod ingestion;
pub mod store;

pub use chat::{ChatSession, SubmitOutcome};
pub use ingestion::IngestionCoordinator;
pub use store::MessageStore;
