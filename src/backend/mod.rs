pub mod http;
pub mod traits;
pub mod types;

pub use http::HttpBackend;
pub use traits::DocumentQa;
pub use types::{BackendError, BootstrapPayload, IngestReply, QueryReply, ReplyStatus};
