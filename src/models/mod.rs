pub mod message;
pub mod scope;
pub mod staging;

pub use message::{Role, Turn};
pub use scope::Scope;
pub use staging::{FileCandidate, IngestionStatus, StagedFile, PDF_MIME_TYPE};
