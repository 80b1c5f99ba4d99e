use serde::{Deserialize, Serialize};

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A file as handed over by the picker, before validation.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// A candidate upload held client-side before submission. `accepted` is true
/// only when the MIME type is exactly the PDF type; the coordinator retains
/// accepted files only.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub name: String,
    pub size_bytes: u64,
    pub accepted: bool,
    pub data: Vec<u8>,
}

impl StagedFile {
    pub fn from_candidate(candidate: FileCandidate) -> Self {
        let accepted = candidate.mime_type == PDF_MIME_TYPE;
        Self {
            name: candidate.name,
            size_bytes: candidate.data.len() as u64,
            accepted,
            data: candidate.data,
        }
    }
}

/// Outcome of the most recent upload attempt. A successful status expires
/// five seconds after being posted; a failed one stays until superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionStatus {
    pub success: bool,
    pub message: String,
}
