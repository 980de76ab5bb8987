#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use academy_billing::client::models::analysis::{AnalysisReport, AnalysisRequest};
use academy_billing::client::models::student::{Student, StudentId, UploadSummary};
use academy_billing::client::services::api_client::{ApiError, BackendApi};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Upload(String),
    Delete(StudentId),
    Analyze { fields: Vec<&'static str>, text: Option<String>, image: Option<String> },
}

/// In-memory backend. Successful deletes remove the student so a reload
/// observes the write, like the real server.
#[derive(Default)]
pub struct FakeApi {
    pub roster: Mutex<Vec<Student>>,
    pub calls: Mutex<Vec<Call>>,
    pub list_error: Mutex<Option<ApiError>>,
    pub upload_reply: Mutex<Option<Result<UploadSummary, ApiError>>>,
    pub delete_error: Mutex<Option<ApiError>>,
    pub analyze_reply: Mutex<Option<Result<AnalysisReport, ApiError>>>,
}

impl FakeApi {
    pub fn with_roster(students: Vec<Student>) -> Arc<Self> {
        let api = FakeApi::default();
        *api.roster.lock().unwrap() = students;
        Arc::new(api)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BackendApi for FakeApi {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.record(Call::List);
        if let Some(e) = self.list_error.lock().unwrap().clone() {
            return Err(e);
        }
        Ok(self.roster.lock().unwrap().clone())
    }

    async fn upload_text_batch(&self, student_data: &str) -> Result<UploadSummary, ApiError> {
        self.record(Call::Upload(student_data.to_string()));
        self.upload_reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Ok(UploadSummary { count: Some(1), status: Some("success".into()) }))
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), ApiError> {
        self.record(Call::Delete(id));
        if let Some(e) = self.delete_error.lock().unwrap().clone() {
            return Err(e);
        }
        self.roster.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, ApiError> {
        self.record(Call::Analyze {
            fields: request.field_names(),
            text: request.text.clone(),
            image: request.image.as_ref().map(|i| i.file_name.clone()),
        });
        self.analyze_reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(AnalysisReport::default()))
    }
}

pub fn as_backend(api: &Arc<FakeApi>) -> Arc<dyn BackendApi> {
    api.clone()
}

pub fn student(id: i64, name: &str, base_fee: u64, book_fee: u64) -> Student {
    Student { id: StudentId(id), name: name.to_string(), base_fee, book_fee, notes: String::new() }
}
