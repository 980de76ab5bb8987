use iced::widget::{Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{notice_accent, notice_appearance, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY};
use crate::client::models::effect::{Notice, NoticeLevel};
use crate::client::models::messages::Message;

fn icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✅",
        NoticeLevel::Info => "ℹ️",
        NoticeLevel::Warning => "⚠️",
        NoticeLevel::Error => "❌",
    }
}

fn label(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "완료",
        NoticeLevel::Info => "안내",
        NoticeLevel::Warning => "확인",
        NoticeLevel::Error => "오류",
    }
}

/// Notice bar above the panes; empty when nothing is pending.
pub fn notice_bar(notice: Option<&Notice>) -> Element<'_, Message> {
    let Some(notice) = notice else {
        return Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };
    Container::new(
        Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new(icon(notice.level)).font(EMOJI_FONT).size(16))
            .push(Text::new(label(notice.level)).font(BOLD_FONT).size(14).style(notice_accent(notice.level)))
            .push(Text::new(&notice.message).size(15).style(TEXT_PRIMARY).width(Length::Fill)),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(notice_appearance(notice.level))))
    .into()
}
