use serde::{Deserialize, Serialize};

use crate::models::Turn;

// --- Request types ---

#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
    pub scope: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ClearRequest<'a> {
    pub scope: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UploadRequest {
    pub files: Vec<UploadFile>,
    pub persist: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadFile {
    pub name: String,
    /// File bytes, base64-encoded.
    pub data: String,
}

// --- Response types ---

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    #[serde(default)]
    pub chat_history: Option<Vec<Turn>>,
}

#[derive(Debug, Deserialize)]
pub struct AckResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub status: String,
    #[serde(default)]
    pub chat_history: Option<Vec<Turn>>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentCountResponse {
    pub status: String,
    #[serde(default)]
    pub document_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
