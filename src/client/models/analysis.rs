use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const SUCCESS_KEYWORD: &str = "성공";
pub const SUGGESTION_KEYWORD: &str = "제안";

pub const TEXT_FIELD: &str = "text_input";
pub const IMAGE_FIELD: &str = "image_file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Suggestion,
    Failure,
}

impl ResultKind {
    /// Keyword classification of a free-text result. Anything unrecognised is a failure.
    pub fn classify(message: &str) -> Self {
        if message.contains(SUCCESS_KEYWORD) {
            ResultKind::Success
        } else if message.contains(SUGGESTION_KEYWORD) {
            ResultKind::Suggestion
        } else {
            ResultKind::Failure
        }
    }

    /// Status string of a structured line. Unknown statuses count as failures.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "success" => ResultKind::Success,
            "suggestion" => ResultKind::Suggestion,
            _ => ResultKind::Failure,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            ResultKind::Success => "[성공]",
            ResultKind::Suggestion => "[제안]",
            ResultKind::Failure => "[실패]",
        }
    }
}

/// A single entry of the analysis response.
///
/// The backend currently sends plain strings; a structured
/// `{"status": ..., "message": ...}` object is accepted as well and its
/// status takes precedence over keyword matching.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawLine")]
pub struct AnalysisLine {
    pub message: String,
    pub status: Option<ResultKind>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLine {
    Text(String),
    Structured { status: String, message: String },
}

impl From<RawLine> for AnalysisLine {
    fn from(raw: RawLine) -> Self {
        match raw {
            RawLine::Text(message) => AnalysisLine { message, status: None },
            RawLine::Structured { status, message } => {
                AnalysisLine { message, status: Some(ResultKind::from_status(&status)) }
            }
        }
    }
}

impl AnalysisLine {
    pub fn text(message: impl Into<String>) -> Self {
        AnalysisLine { message: message.into(), status: None }
    }

    // Computed on every render, never cached.
    pub fn kind(&self) -> ResultKind {
        self.status.unwrap_or_else(|| ResultKind::classify(&self.message))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<AnalysisLine>,
}

#[derive(Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_hint(Path::new(&file_name)).to_string();
        ImageAttachment { file_name, content_type, bytes }
    }
}

/// MIME type guessed from the extension. Only a hint for the multipart part.
pub fn content_type_hint(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Payload of one analysis submission. At least one side is present.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub text: Option<String>,
    pub image: Option<ImageAttachment>,
}

impl AnalysisRequest {
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.text.is_some() {
            fields.push(TEXT_FIELD);
        }
        if self.image.is_some() {
            fields.push(IMAGE_FIELD);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_classification() {
        assert_eq!(
            ResultKind::classify("✅ 이름 매칭 성공: '김철수' 학생 발견!"),
            ResultKind::Success
        );
        assert_eq!(
            ResultKind::classify("💡 합산 제안: 330000원 -> 김철수, 이영희 합산?"),
            ResultKind::Suggestion
        );
        assert_eq!(
            ResultKind::classify("❌ 매칭 실패: 인식된 이름이나 매칭되는 금액이 없습니다."),
            ResultKind::Failure
        );
        assert_eq!(ResultKind::classify("OCR 처리 실패: timeout"), ResultKind::Failure);
        // success keyword wins when both appear
        assert_eq!(ResultKind::classify("제안 성공"), ResultKind::Success);
    }

    #[test]
    fn report_accepts_plain_and_structured_lines() {
        let json = r#"{
            "message": "자동 매칭 완료",
            "results": [
                "💰 금액 매칭 성공: 250000원 -> 김철수",
                {"status": "failure", "message": "합산 성공 여부 불명"}
            ]
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.message.as_deref(), Some("자동 매칭 완료"));
        assert_eq!(report.results[0].kind(), ResultKind::Success);
        // structured status overrides the keyword in the text
        assert_eq!(report.results[1].kind(), ResultKind::Failure);
    }

    #[test]
    fn unknown_status_is_a_failure_not_a_decode_error() {
        let json = r#"{
            "message": "자동 매칭 완료",
            "results": [
                "✅ 이름 매칭 성공: 김철수",
                {"status": "error", "message": "OCR 실패"},
                {"status": "Suggestion", "message": "합산 확인 필요"}
            ]
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.results[0].kind(), ResultKind::Success);
        assert_eq!(report.results[1].kind(), ResultKind::Failure);
        assert_eq!(report.results[1].message, "OCR 실패");
        assert_eq!(report.results[2].kind(), ResultKind::Suggestion);
    }

    #[test]
    fn content_type_is_guessed_from_extension() {
        assert_eq!(content_type_hint(Path::new("receipt.JPG")), "image/jpeg");
        assert_eq!(content_type_hint(Path::new("scan.png")), "image/png");
        assert_eq!(content_type_hint(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(content_type_hint(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn field_names_follow_present_parts() {
        let image = ImageAttachment::new("r.png", vec![1, 2, 3]);
        let both = AnalysisRequest { text: Some("원주정산 220,000".into()), image: Some(image.clone()) };
        assert_eq!(both.field_names(), vec![TEXT_FIELD, IMAGE_FIELD]);
        let only_image = AnalysisRequest { text: None, image: Some(image) };
        assert_eq!(only_image.field_names(), vec![IMAGE_FIELD]);
    }
}
