//! HTTP access to the academy backend.
//!
//! [`BackendApi`] is the seam every component talks through; [`HttpApi`] is
//! the `reqwest` implementation bound to a base URL. It holds no state beyond
//! the pooled client and does no retrying or timeouts: failures are handed
//! back to the caller as [`ApiError`].

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::client::models::analysis::{AnalysisReport, AnalysisRequest, IMAGE_FIELD, TEXT_FIELD};
use crate::client::models::student::{Student, StudentId, UploadSummary};

pub const STUDENTS_PATH: &str = "students/";
pub const UPLOAD_BATCH_PATH: &str = "students/upload_text_batch/";
pub const ANALYZE_PATH: &str = "matching/upload_data/";

pub fn student_path(id: StudentId) -> String {
    format!("students/{}/", id)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}{}", message_suffix(.message))]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    Request(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

impl ApiError {
    /// The backend's own explanation, when the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message: Some(m), .. } => Some(m.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::Request(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError>;
    async fn upload_text_batch(&self, student_data: &str) -> Result<UploadSummary, ApiError>;
    async fn delete_student(&self, id: StudentId) -> Result<(), ApiError>;
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError>;
}

#[derive(Serialize)]
struct UploadBatchBody<'a> {
    student_data: &'a str,
}

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &Url) -> Result<Self, ApiError> {
        Self::with_builder(base_url, reqwest::Client::builder())
    }

    /// Like [`HttpApi::new`] but starting from a caller-tuned client builder.
    pub fn with_builder(base_url: &Url, builder: reqwest::ClientBuilder) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = builder.default_headers(headers).build()?;
        Ok(Self { client, base_url: base_url.as_str().to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and a relative path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Pulls `error` (or DRF's `detail`) out of an error body.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}

async fn check_status(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::Server { status: status.as_u16(), message: extract_error_message(&body) });
    }
    Ok(body.to_vec())
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let body = check_status(response).await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn build_form(request: AnalysisRequest) -> Result<Form, ApiError> {
    let mut form = Form::new();
    if let Some(text) = request.text {
        form = form.text(TEXT_FIELD, text);
    }
    if let Some(image) = request.image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        form = form.part(IMAGE_FIELD, part);
    }
    Ok(form)
}

#[async_trait]
impl BackendApi for HttpApi {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.endpoint(STUDENTS_PATH);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    async fn upload_text_batch(&self, student_data: &str) -> Result<UploadSummary, ApiError> {
        let url = self.endpoint(UPLOAD_BATCH_PATH);
        debug!("POST {} ({} bytes)", url, student_data.len());
        let response = self
            .client
            .post(&url)
            .json(&UploadBatchBody { student_data })
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), ApiError> {
        let url = self.endpoint(&student_path(id));
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        check_status(response).await.map(|_| ())
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        let url = self.endpoint(ANALYZE_PATH);
        debug!("POST {} fields={:?}", url, request.field_names());
        let form = build_form(request)?;
        let response = self.client.post(&url).multipart(form).send().await?;
        decode(response).await
    }
}
