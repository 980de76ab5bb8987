use log::{error, info};

use crate::client::models::effect::{Effect, Notice};
use crate::client::models::student::{Student, StudentId, UploadSummary};
use crate::client::services::api_client::ApiError;

pub const EMPTY_DRAFT_PROMPT: &str = "내용을 입력해주세요.";
pub const LOAD_FAILED: &str = "서버 연결 실패! 백엔드 서버가 켜져 있나요?";
pub const UPLOAD_FAILED_GENERIC: &str = "등록 실패! 형식을 확인해주세요.";
pub const DELETE_CONFIRM_PROMPT: &str = "삭제하시겠습니까?";
pub const DELETE_FAILED: &str = "삭제 실패";
pub const EMPTY_ROSTER: &str = "등록된 학생이 없습니다.";

#[derive(Debug, Clone, PartialEq)]
pub enum RosterRequest {
    FetchStudents,
    UploadBatch(String),
    DeleteStudent(StudentId),
}

#[derive(Debug, Clone)]
pub enum RosterEvent {
    LoadRequested,
    Loaded(Result<Vec<Student>, ApiError>),
    DraftChanged(String),
    SubmitPressed,
    Uploaded(Result<UploadSummary, ApiError>),
    DeletePressed(StudentId),
    DeleteConfirmed,
    DeleteCancelled,
    Deleted(StudentId, Result<(), ApiError>),
}

pub type RosterEffect = Effect<RosterRequest>;

/// Roster component: the student list as of the last successful fetch, the
/// bulk-register draft and the delete confirmation.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub draft_text: String,
    pub submitting: bool,
    pub pending_delete: Option<StudentId>,
}

impl RosterState {
    pub fn update(&mut self, event: RosterEvent) -> Vec<RosterEffect> {
        match event {
            RosterEvent::LoadRequested => vec![Effect::Request(RosterRequest::FetchStudents)],
            RosterEvent::Loaded(Ok(students)) => {
                info!("Roster loaded: {} students", students.len());
                self.students = students;
                vec![]
            }
            RosterEvent::Loaded(Err(e)) => {
                // previous list stays on screen
                error!("Failed to load roster: {}", e);
                vec![Effect::Notify(Notice::error(LOAD_FAILED))]
            }
            RosterEvent::DraftChanged(text) => {
                self.draft_text = text;
                vec![]
            }
            RosterEvent::SubmitPressed => {
                if self.submitting {
                    return vec![];
                }
                if self.draft_text.trim().is_empty() {
                    return vec![Effect::Notify(Notice::warning(EMPTY_DRAFT_PROMPT))];
                }
                self.submitting = true;
                vec![Effect::Request(RosterRequest::UploadBatch(self.draft_text.clone()))]
            }
            RosterEvent::Uploaded(result) => {
                self.submitting = false;
                match result {
                    Ok(summary) => {
                        self.draft_text.clear();
                        let message = match summary.count {
                            Some(count) => format!("{}명 등록 성공!", count),
                            None => "등록 성공!".to_string(),
                        };
                        vec![
                            Effect::Notify(Notice::success(message)),
                            Effect::Request(RosterRequest::FetchStudents),
                        ]
                    }
                    Err(e) => {
                        error!("Bulk register failed: {}", e);
                        let message = match e.server_message() {
                            Some(reason) => format!("등록 실패: {}", reason),
                            None => UPLOAD_FAILED_GENERIC.to_string(),
                        };
                        vec![Effect::Notify(Notice::error(message))]
                    }
                }
            }
            RosterEvent::DeletePressed(id) => {
                self.pending_delete = Some(id);
                vec![]
            }
            RosterEvent::DeleteCancelled => {
                self.pending_delete = None;
                vec![]
            }
            RosterEvent::DeleteConfirmed => match self.pending_delete.take() {
                Some(id) => vec![Effect::Request(RosterRequest::DeleteStudent(id))],
                None => vec![],
            },
            RosterEvent::Deleted(id, Ok(())) => {
                info!("Student {} deleted", id);
                vec![Effect::Request(RosterRequest::FetchStudents)]
            }
            RosterEvent::Deleted(id, Err(e)) => {
                error!("Failed to delete student {}: {}", id, e);
                vec![Effect::Notify(Notice::error(DELETE_FAILED))]
            }
        }
    }

    pub fn pending_student(&self) -> Option<&Student> {
        let id = self.pending_delete?;
        self.students.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::effect::NoticeLevel;

    fn student(id: i64, name: &str) -> Student {
        Student { id: StudentId(id), name: name.to_string(), base_fee: 250000, book_fee: 0, notes: String::new() }
    }

    #[test]
    fn whitespace_draft_is_rejected_locally() {
        let mut state = RosterState { draft_text: "  \n\t".into(), ..Default::default() };
        let effects = state.update(RosterEvent::SubmitPressed);
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::Notify(n) if n.level == NoticeLevel::Warning && n.message == EMPTY_DRAFT_PROMPT));
        assert!(!state.submitting);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = RosterState { draft_text: "김철수 250000".into(), ..Default::default() };
        assert_eq!(state.update(RosterEvent::SubmitPressed).len(), 1);
        assert!(state.submitting);
        assert!(state.update(RosterEvent::SubmitPressed).is_empty());
    }

    #[test]
    fn upload_failure_keeps_draft_and_resets_flag() {
        let mut state = RosterState { draft_text: "bad line".into(), submitting: true, ..Default::default() };
        let err = ApiError::Server { status: 400, message: Some("'bad line' 줄의 형식이 올바르지 않습니다.".into()) };
        let effects = state.update(RosterEvent::Uploaded(Err(err)));
        assert!(!state.submitting);
        assert_eq!(state.draft_text, "bad line");
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::error("등록 실패: 'bad line' 줄의 형식이 올바르지 않습니다."))]
        );
    }

    #[test]
    fn upload_failure_without_message_uses_generic_text() {
        let mut state = RosterState { submitting: true, ..Default::default() };
        let effects = state.update(RosterEvent::Uploaded(Err(ApiError::Network("refused".into()))));
        assert_eq!(effects, vec![Effect::Notify(Notice::error(UPLOAD_FAILED_GENERIC))]);
    }

    #[test]
    fn upload_success_without_count() {
        let mut state = RosterState { draft_text: "김철수 250000".into(), submitting: true, ..Default::default() };
        let effects = state.update(RosterEvent::Uploaded(Ok(UploadSummary::default())));
        assert_eq!(effects[0], Effect::Notify(Notice::success("등록 성공!")));
        assert_eq!(effects[1], Effect::Request(RosterRequest::FetchStudents));
        assert!(state.draft_text.is_empty());
    }

    #[test]
    fn failed_load_keeps_previous_roster() {
        let mut state = RosterState { students: vec![student(1, "김철수")], ..Default::default() };
        let effects = state.update(RosterEvent::Loaded(Err(ApiError::Network("down".into()))));
        assert_eq!(state.students.len(), 1);
        assert_eq!(effects, vec![Effect::Notify(Notice::error(LOAD_FAILED))]);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = RosterState { students: vec![student(3, "박민수")], ..Default::default() };
        assert!(state.update(RosterEvent::DeletePressed(StudentId(3))).is_empty());
        assert_eq!(state.pending_student().map(|s| s.name.as_str()), Some("박민수"));
        assert!(state.update(RosterEvent::DeleteCancelled).is_empty());
        assert_eq!(state.pending_delete, None);
        // confirming with nothing pending does nothing
        assert!(state.update(RosterEvent::DeleteConfirmed).is_empty());
    }

    #[test]
    fn failed_delete_does_not_reload() {
        let mut state = RosterState::default();
        let effects = state.update(RosterEvent::Deleted(StudentId(1), Err(ApiError::Network("x".into()))));
        assert_eq!(effects, vec![Effect::Notify(Notice::error(DELETE_FAILED))]);
    }
}
