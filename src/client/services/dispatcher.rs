//! Runs component requests against the backend.
//!
//! Every request resolves to exactly one completion event, errors included,
//! so a component's submitting flag is always released. The GUI wraps each
//! `execute_*` future in its own `Command`; the CLI and the tests use the
//! `drive_*` loops, which keep feeding completions back until the component
//! has nothing left to ask for.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::client::models::analyzer_state::{AnalyzerEvent, AnalyzerRequest, AnalyzerState};
use crate::client::models::effect::{Effect, Notice};
use crate::client::models::roster_state::{RosterEvent, RosterRequest, RosterState};
use crate::client::services::api_client::BackendApi;
use crate::client::services::image_loader::load_image;

pub async fn execute_roster(api: Arc<dyn BackendApi>, request: RosterRequest) -> RosterEvent {
    match request {
        RosterRequest::FetchStudents => RosterEvent::Loaded(api.list_students().await),
        RosterRequest::UploadBatch(text) => RosterEvent::Uploaded(api.upload_text_batch(&text).await),
        RosterRequest::DeleteStudent(id) => RosterEvent::Deleted(id, api.delete_student(id).await),
    }
}

pub async fn execute_analyzer(api: Arc<dyn BackendApi>, request: AnalyzerRequest) -> AnalyzerEvent {
    match request {
        AnalyzerRequest::LoadImage(path) => {
            AnalyzerEvent::ImageLoaded(load_image(&path).await.map_err(|e| format!("{:#}", e)))
        }
        AnalyzerRequest::Analyze(request) => AnalyzerEvent::Analyzed(api.analyze(request).await),
    }
}

/// Applies `event` and every completion it triggers, returning the notices in order.
pub async fn drive_roster(state: &mut RosterState, api: &Arc<dyn BackendApi>, event: RosterEvent) -> Vec<Notice> {
    let mut queue = VecDeque::from([event]);
    let mut notices = Vec::new();
    while let Some(event) = queue.pop_front() {
        for effect in state.update(event) {
            match effect {
                Effect::Notify(notice) => notices.push(notice),
                Effect::Request(request) => queue.push_back(execute_roster(api.clone(), request).await),
            }
        }
    }
    notices
}

pub async fn drive_analyzer(
    state: &mut AnalyzerState,
    api: &Arc<dyn BackendApi>,
    event: AnalyzerEvent,
) -> Vec<Notice> {
    let mut queue = VecDeque::from([event]);
    let mut notices = Vec::new();
    while let Some(event) = queue.pop_front() {
        for effect in state.update(event) {
            match effect {
                Effect::Notify(notice) => notices.push(notice),
                Effect::Request(request) => queue.push_back(execute_analyzer(api.clone(), request).await),
            }
        }
    }
    notices
}
