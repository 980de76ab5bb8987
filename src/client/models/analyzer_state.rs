use log::{error, info};
use std::path::PathBuf;

use crate::client::models::analysis::{AnalysisLine, AnalysisReport, AnalysisRequest, ImageAttachment};
use crate::client::models::effect::{Effect, Notice};
use crate::client::services::api_client::ApiError;

pub const EMPTY_INPUT_PROMPT: &str = "텍스트나 이미지를 입력해주세요.";
pub const EMPTY_PATH_PROMPT: &str = "이미지 파일 경로를 입력해주세요.";
pub const GENERIC_SERVER_ERROR: &str = "서버 오류";
pub const NO_RESULTS: &str = "아직 분석 결과가 없습니다.";

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerRequest {
    LoadImage(PathBuf),
    Analyze(AnalysisRequest),
}

#[derive(Debug, Clone)]
pub enum AnalyzerEvent {
    TextChanged(String),
    ImagePathChanged(String),
    ImageRequested,
    ImageLoaded(Result<ImageAttachment, String>),
    ImageCleared,
    SubmitPressed,
    Analyzed(Result<AnalysisReport, ApiError>),
}

pub type AnalyzerEffect = Effect<AnalyzerRequest>;

#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    pub text_input: String,
    pub image_path: String,
    pub image: Option<ImageAttachment>,
    pub results: Vec<AnalysisLine>,
    pub summary: Option<String>,
    pub submitting: bool,
}

impl AnalyzerState {
    pub fn update(&mut self, event: AnalyzerEvent) -> Vec<AnalyzerEffect> {
        match event {
            AnalyzerEvent::TextChanged(text) => {
                self.text_input = text;
                vec![]
            }
            AnalyzerEvent::ImagePathChanged(path) => {
                self.image_path = path;
                vec![]
            }
            AnalyzerEvent::ImageRequested => {
                let path = self.image_path.trim();
                if path.is_empty() {
                    return vec![Effect::Notify(Notice::warning(EMPTY_PATH_PROMPT))];
                }
                vec![Effect::Request(AnalyzerRequest::LoadImage(PathBuf::from(path)))]
            }
            AnalyzerEvent::ImageLoaded(Ok(image)) => {
                info!("Attached {} ({} bytes)", image.file_name, image.bytes.len());
                self.image = Some(image);
                vec![]
            }
            AnalyzerEvent::ImageLoaded(Err(reason)) => {
                error!("Failed to read image: {}", reason);
                vec![Effect::Notify(Notice::error(format!("이미지를 불러오지 못했습니다: {}", reason)))]
            }
            AnalyzerEvent::ImageCleared => {
                self.image = None;
                vec![]
            }
            AnalyzerEvent::SubmitPressed => {
                if self.submitting {
                    return vec![];
                }
                let text = Some(self.text_input.clone()).filter(|t| !t.trim().is_empty());
                if text.is_none() && self.image.is_none() {
                    return vec![Effect::Notify(Notice::warning(EMPTY_INPUT_PROMPT))];
                }
                self.submitting = true;
                let request = AnalysisRequest { text, image: self.image.clone() };
                vec![Effect::Request(AnalyzerRequest::Analyze(request))]
            }
            AnalyzerEvent::Analyzed(Ok(report)) => {
                self.submitting = false;
                self.results = report.results;
                self.summary = report.message;
                match &self.summary {
                    Some(message) => vec![Effect::Notify(Notice::info(message.clone()))],
                    None => vec![],
                }
            }
            AnalyzerEvent::Analyzed(Err(e)) => {
                self.submitting = false;
                error!("Analysis failed: {}", e);
                let reason = e.server_message().unwrap_or(GENERIC_SERVER_ERROR);
                vec![Effect::Notify(Notice::error(format!("분석 실패: {}", reason)))]
            }
        }
    }
}
