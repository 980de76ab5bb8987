// Outputs of a component transition: backend requests and operator notices.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Success, message: message.into() }
    }
    pub fn info(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Info, message: message.into() }
    }
    pub fn warning(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Warning, message: message.into() }
    }
    pub fn error(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<R> {
    Request(R),
    Notify(Notice),
}
