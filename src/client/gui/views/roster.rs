use iced::widget::{text_editor, Button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Element, Length};

use crate::client::gui::style::{
    card_appearance, panel_appearance, BOLD_FONT, DANGER, EMOJI_FONT, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::models::messages::Message;
use crate::client::models::roster_state::{RosterEvent, RosterState, DELETE_CONFIRM_PROMPT, EMPTY_ROSTER};
use crate::client::models::student::StudentRow;

const FORMAT_HINT: &str = "[이름] [수강료] [교재비]  예시: 김철수 250000 / 이영희 280000 교재비 30000";

fn cell<'a>(content: impl ToString, portion: u16) -> Element<'a, Message> {
    Text::new(content.to_string())
        .size(14)
        .width(Length::FillPortion(portion))
        .into()
}

fn header_row<'a>() -> Element<'a, Message> {
    let heading = |label: &str, portion: u16| -> Element<'a, Message> {
        Text::new(label.to_string())
            .font(BOLD_FONT)
            .size(13)
            .style(TEXT_SECONDARY)
            .width(Length::FillPortion(portion))
            .into()
    };
    Row::new()
        .spacing(8)
        .padding([8, 12])
        .push(heading("이름", 3))
        .push(heading("수강료", 3))
        .push(heading("교재비", 3))
        .push(heading("비고", 3))
        .push(heading("관리", 2))
        .into()
}

fn student_row<'a>(row: StudentRow, deleting: bool) -> Element<'a, Message> {
    let mut delete = Button::new(Text::new("삭제").font(BOLD_FONT).size(13))
        .style(iced::theme::Button::Destructive)
        .padding([4, 10]);
    if !deleting {
        delete = delete.on_press(Message::Roster(RosterEvent::DeletePressed(row.id)));
    }
    Row::new()
        .spacing(8)
        .padding([8, 12])
        .align_items(Alignment::Center)
        .push(cell(&row.name, 3))
        .push(cell(&row.base_fee, 3))
        .push(Text::new(row.book_fee).size(14).style(TEXT_SECONDARY).width(Length::FillPortion(3)))
        .push(Text::new(row.notes).size(12).style(TEXT_SECONDARY).width(Length::FillPortion(3)))
        .push(Container::new(delete).width(Length::FillPortion(2)))
        .into()
}

fn confirm_bar<'a>(state: &'a RosterState) -> Element<'a, Message> {
    let target = match state.pending_student() {
        Some(student) => format!("'{}' {}", student.name, DELETE_CONFIRM_PROMPT),
        None => DELETE_CONFIRM_PROMPT.to_string(),
    };
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(16))
            .push(Text::new(target).size(14).style(DANGER).width(Length::Fill))
            .push(
                Button::new(Text::new("삭제").font(BOLD_FONT).size(13))
                    .style(iced::theme::Button::Destructive)
                    .on_press(Message::Roster(RosterEvent::DeleteConfirmed))
                    .padding([6, 12]),
            )
            .push(
                Button::new(Text::new("취소").size(13))
                    .style(iced::theme::Button::Secondary)
                    .on_press(Message::Roster(RosterEvent::DeleteCancelled))
                    .padding([6, 12]),
            ),
    )
    .padding(12)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(panel_appearance)))
    .into()
}

pub fn view<'a>(state: &'a RosterState, draft: &'a text_editor::Content) -> Element<'a, Message> {
    let title = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("📝").font(EMOJI_FONT).size(22))
        .push(Text::new("학생 관리").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("새로고침").size(13))
                .style(iced::theme::Button::Secondary)
                .on_press(Message::Roster(RosterEvent::LoadRequested))
                .padding([6, 12]),
        );

    let editor = text_editor(draft)
        .on_action(Message::RosterDraftEdited)
        .height(Length::Fixed(140.0))
        .padding(10);

    // No on_press while a batch is in flight: the button renders disabled.
    let label = if state.submitting { "등록 중..." } else { "일괄 등록하기" };
    let mut submit = Button::new(
        Container::new(Text::new(label).font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .padding(12)
    .width(Length::Fill);
    if !state.submitting {
        submit = submit.on_press(Message::Roster(RosterEvent::SubmitPressed));
    }

    let mut table = Column::new().spacing(2);
    if state.students.is_empty() {
        table = table.push(
            Container::new(Text::new(EMPTY_ROSTER).size(14).style(TEXT_SECONDARY))
                .width(Length::Fill)
                .center_x()
                .padding(32),
        );
    } else {
        table = table.push(header_row());
        let deleting = state.pending_delete.is_some();
        for student in &state.students {
            table = table.push(student_row(StudentRow::from(student), deleting));
        }
    }

    let mut content = Column::new()
        .spacing(12)
        .push(title)
        .push(Text::new(FORMAT_HINT).size(13).style(TEXT_SECONDARY))
        .push(editor)
        .push(submit)
        .push(
            Text::new(format!("등록된 학생 ({}명)", state.students.len()))
                .font(BOLD_FONT)
                .size(16)
                .style(TEXT_PRIMARY),
        );
    if state.pending_delete.is_some() {
        content = content.push(confirm_bar(state));
    }
    content = content.push(
        Container::new(Scrollable::new(table).height(Length::Fill))
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
