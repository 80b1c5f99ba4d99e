use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;

use super::wire::*;
use crate::backend::traits::DocumentQa;
use crate::backend::types::{BackendError, BootstrapPayload, IngestReply, QueryReply, ReplyStatus};
use crate::config::BackendConfig;
use crate::models::{Scope, StagedFile};

const QUERY_PATH: &str = "/api/query";
const CLEAR_PATH: &str = "/api/clear-chat";
const UPLOAD_PATH: &str = "/api/upload";
const HISTORY_PATH: &str = "/api/chat-history";
const DOCUMENT_COUNT_PATH: &str = "/api/document-count";

/// HTTP/JSON implementation of the backend contract. Connection failures
/// and unparseable bodies surface as transport errors; an error status from
/// a reachable server surfaces as `RequestFailed`.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn parse_error_message(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            return format!("HTTP {}: {}", status.as_u16(), parsed.message);
        }
        format!("HTTP {}: Request failed", status.as_u16())
    }

    fn reply_status(status: &str) -> ReplyStatus {
        if status == "success" {
            ReplyStatus::Success
        } else {
            ReplyStatus::Error
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed(Self::parse_error_message(
                status, &body,
            )));
        }
        Ok(response)
    }

    async fn fetch_document_count(&self) -> Option<u64> {
        let result: Result<DocumentCountResponse, BackendError> = async {
            let response = self
                .client
                .get(self.endpoint(DOCUMENT_COUNT_PATH))
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            let response = Self::check_status(response).await?;
            response
                .json()
                .await
                .map_err(|e| BackendError::InvalidResponse(e.to_string()))
        }
        .await;

        match result {
            Ok(payload) => payload.document_count,
            Err(e) => {
                tracing::debug!("Failed to fetch document count: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl DocumentQa for HttpBackend {
    async fn fetch_bootstrap(&self, scope: Scope) -> Result<BootstrapPayload, BackendError> {
        let response = self
            .client
            .get(self.endpoint(HISTORY_PATH))
            .query(&[("scope", scope.as_str())])
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let payload: HistoryResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if Self::reply_status(&payload.status) != ReplyStatus::Success {
            return Err(BackendError::RequestFailed(
                "History read reported an error".to_string(),
            ));
        }

        // The document count only matters for the persistent scope, and a
        // missing count never fails the whole bootstrap.
        let document_count = match scope {
            Scope::Persistent => self.fetch_document_count().await,
            Scope::Local => None,
        };

        Ok(BootstrapPayload {
            history: payload.chat_history.unwrap_or_default(),
            document_count,
        })
    }

    async fn submit_query(
        &self,
        question: &str,
        scope: Scope,
    ) -> Result<QueryReply, BackendError> {
        let response = self
            .client
            .post(self.endpoint(QUERY_PATH))
            .json(&QueryRequest {
                question,
                scope: scope.as_str(),
            })
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let payload: QueryResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(QueryReply {
            status: Self::reply_status(&payload.status),
            history: payload.chat_history,
        })
    }

    async fn clear_history(&self, scope: Scope) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.endpoint(CLEAR_PATH))
            .json(&ClearRequest {
                scope: scope.as_str(),
            })
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let payload: AckResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if Self::reply_status(&payload.status) != ReplyStatus::Success {
            return Err(BackendError::RequestFailed(
                "Clear request reported an error".to_string(),
            ));
        }

        Ok(())
    }

    async fn ingest_documents(
        &self,
        files: &[StagedFile],
        persist: bool,
    ) -> Result<IngestReply, BackendError> {
        let files = files
            .iter()
            .map(|file| UploadFile {
                name: file.name.clone(),
                data: base64::engine::general_purpose::STANDARD.encode(&file.data),
            })
            .collect();

        let response = self
            .client
            .post(self.endpoint(UPLOAD_PATH))
            .json(&UploadRequest { files, persist })
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let payload: UploadResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(IngestReply {
            status: Self::reply_status(&payload.status),
            message: payload.message.unwrap_or_default(),
        })
    }
}
