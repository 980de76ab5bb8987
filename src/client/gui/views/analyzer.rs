use iced::widget::{text_editor, Button, Column, Container, Row, Scrollable, Text, TextInput};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{
    card_appearance, panel_appearance, result_appearance, BOLD_FONT, EMOJI_FONT, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::client::models::analysis::AnalysisLine;
use crate::client::models::analyzer_state::{AnalyzerEvent, AnalyzerState, NO_RESULTS};
use crate::client::models::messages::Message;

fn result_item<'a>(line: &'a AnalysisLine) -> Element<'a, Message> {
    Container::new(Text::new(&line.message).size(14))
        .padding(12)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(result_appearance(line.kind()))))
        .into()
}

fn image_section(state: &AnalyzerState) -> Element<'_, Message> {
    let path_input = TextInput::new("영수증 이미지 경로 (예: C:\\receipts\\0412.jpg)", &state.image_path)
        .on_input(|p| Message::Analyzer(AnalyzerEvent::ImagePathChanged(p)))
        .on_submit(Message::Analyzer(AnalyzerEvent::ImageRequested))
        .padding(10)
        .size(14)
        .width(Length::Fill);

    let attach = Button::new(Text::new("불러오기").size(13))
        .style(iced::theme::Button::Positive)
        .on_press(Message::Analyzer(AnalyzerEvent::ImageRequested))
        .padding([8, 12]);

    let mut section = Column::new()
        .spacing(6)
        .push(Text::new("또는 영수증 사진 업로드").size(13).style(TEXT_SECONDARY))
        .push(Row::new().spacing(8).align_items(Alignment::Center).push(path_input).push(attach));

    if let Some(image) = &state.image {
        section = section.push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("🖼️").font(EMOJI_FONT).size(14))
                .push(
                    Text::new(format!("{} ({} KB)", image.file_name, image.bytes.len().div_ceil(1024)))
                        .size(13)
                        .width(Length::Fill),
                )
                .push(
                    Button::new(Text::new("제거").size(12))
                        .style(iced::theme::Button::Secondary)
                        .on_press(Message::Analyzer(AnalyzerEvent::ImageCleared))
                        .padding([4, 10]),
                ),
        );
    }
    section.into()
}

pub fn view<'a>(state: &'a AnalyzerState, bank_text: &'a text_editor::Content) -> Element<'a, Message> {
    let title = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("🧾").font(EMOJI_FONT).size(22))
        .push(Text::new("영수증 / 이체내역 분석").font(BOLD_FONT).size(20).style(TEXT_PRIMARY));

    let editor = text_editor(bank_text)
        .on_action(Message::AnalyzerTextEdited)
        .height(Length::Fixed(110.0))
        .padding(10);

    let label = if state.submitting { "AI 분석 중..." } else { "분석 시작" };
    let mut submit = Button::new(
        Container::new(Text::new(label).font(BOLD_FONT).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Positive)
    .padding(12)
    .width(Length::Fill);
    if !state.submitting {
        submit = submit.on_press(Message::Analyzer(AnalyzerEvent::SubmitPressed));
    }

    let results: Element<'a, Message> = if state.results.is_empty() {
        Container::new(Text::new(NO_RESULTS).size(14).style(TEXT_SECONDARY))
            .width(Length::Fill)
            .center_x()
            .padding(40)
            .into()
    } else {
        state
            .results
            .iter()
            .fold(Column::new().spacing(8), |col, line| col.push(result_item(line)))
            .into()
    };

    let mut results_header = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("분석 결과").font(BOLD_FONT).size(16).style(TEXT_PRIMARY));
    if let Some(summary) = &state.summary {
        results_header = results_header.push(Text::new(format!("· {}", summary)).size(13).style(TEXT_SECONDARY));
    }

    let content = Column::new()
        .spacing(12)
        .push(title)
        .push(Text::new("은행 앱 텍스트 붙여넣기 (예: 원주정산 220,000)").size(13).style(TEXT_SECONDARY))
        .push(editor)
        .push(image_section(state))
        .push(submit)
        .push(results_header)
        .push(
            Container::new(Scrollable::new(Container::new(results).padding(12)).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(panel_appearance))),
        );

    Container::new(content)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .into()
}
