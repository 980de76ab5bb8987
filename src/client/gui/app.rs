use std::sync::Arc;

use iced::widget::{text_editor, Column, Container, Row, Text};
use iced::{Alignment, Application, Command, Element, Length, Theme};
use log::info;

use crate::client::config::ClientConfig;
use crate::client::gui::style::{bg_main_appearance, header_appearance, BOLD_FONT, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::client::gui::views;
use crate::client::models::analyzer_state::{AnalyzerEffect, AnalyzerEvent, AnalyzerState};
use crate::client::models::effect::{Effect, Notice};
use crate::client::models::messages::Message;
use crate::client::models::roster_state::{RosterEffect, RosterEvent, RosterState};
use crate::client::services::api_client::BackendApi;
use crate::client::services::dispatcher::{execute_analyzer, execute_roster};

pub struct AppFlags {
    pub config: ClientConfig,
    pub api: Arc<dyn BackendApi>,
}

/// Root window: roster on the left, analyzer on the right. Holds the two
/// components side by side but passes nothing between them.
pub struct AcademyApp {
    api: Arc<dyn BackendApi>,
    config: ClientConfig,
    roster: RosterState,
    analyzer: AnalyzerState,
    roster_draft: text_editor::Content,
    bank_text: text_editor::Content,
    notice: NoticeSlot,
}

/// The one notice on screen. Each `show` bumps the generation so only the
/// timer of the latest notice may clear it.
#[derive(Debug, Default)]
struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    fn show(&mut self, notice: Notice) -> u64 {
        self.current = Some(notice);
        self.generation += 1;
        self.generation
    }

    fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.current = None;
        }
    }
}

// The editor always reports a trailing newline; the components want what the operator typed.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

impl AcademyApp {
    fn push_notice(&mut self, notice: Notice) -> Command<Message> {
        let generation = self.notice.show(notice);
        let delay = self.config.notice_timeout;
        Command::perform(
            async move {
                tokio::time::sleep(delay).await;
                generation
            },
            Message::ClearLog,
        )
    }

    fn apply_roster(&mut self, effects: Vec<RosterEffect>) -> Command<Message> {
        let mut commands = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify(notice) => commands.push(self.push_notice(notice)),
                Effect::Request(request) => {
                    commands.push(Command::perform(execute_roster(self.api.clone(), request), Message::Roster));
                }
            }
        }
        // The draft is cleared by the component after a successful upload
        if self.roster.draft_text.is_empty() && !editor_text(&self.roster_draft).trim().is_empty() {
            self.roster_draft = text_editor::Content::new();
        }
        Command::batch(commands)
    }

    fn apply_analyzer(&mut self, effects: Vec<AnalyzerEffect>) -> Command<Message> {
        let mut commands = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify(notice) => commands.push(self.push_notice(notice)),
                Effect::Request(request) => {
                    commands.push(Command::perform(execute_analyzer(self.api.clone(), request), Message::Analyzer));
                }
            }
        }
        Command::batch(commands)
    }
}

impl Application for AcademyApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let AppFlags { config, api } = flags;
        info!("Backend base URL: {}", config.api_base);
        let mut app = AcademyApp {
            api,
            config,
            roster: RosterState::default(),
            analyzer: AnalyzerState::default(),
            roster_draft: text_editor::Content::new(),
            bank_text: text_editor::Content::new(),
            notice: NoticeSlot::default(),
        };
        let effects = app.roster.update(RosterEvent::LoadRequested);
        let startup = app.apply_roster(effects);
        (app, startup)
    }

    fn title(&self) -> String {
        "학원 정산 관리자".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Roster(event) => {
                let effects = self.roster.update(event);
                self.apply_roster(effects)
            }
            Message::Analyzer(event) => {
                let effects = self.analyzer.update(event);
                self.apply_analyzer(effects)
            }
            Message::RosterDraftEdited(action) => {
                self.roster_draft.perform(action);
                let effects = self.roster.update(RosterEvent::DraftChanged(editor_text(&self.roster_draft)));
                self.apply_roster(effects)
            }
            Message::AnalyzerTextEdited(action) => {
                self.bank_text.perform(action);
                let effects = self.analyzer.update(AnalyzerEvent::TextChanged(editor_text(&self.bank_text)));
                self.apply_analyzer(effects)
            }
            Message::ClearLog(generation) => {
                self.notice.expire(generation);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let header = Container::new(
            Column::new()
                .spacing(4)
                .align_items(Alignment::Center)
                .push(Text::new("학원 정산 관리자").font(BOLD_FONT).size(28).style(TEXT_PRIMARY))
                .push(Text::new("학생 관리 및 영수증 처리 시스템").size(14).style(TEXT_SECONDARY)),
        )
        .padding([20, 24])
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(header_appearance)));

        let panes = Row::new()
            .spacing(24)
            .push(
                Container::new(views::roster::view(&self.roster, &self.roster_draft))
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
            )
            .push(
                Container::new(views::analyzer::view(&self.analyzer, &self.bank_text))
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
            )
            .height(Length::Fill);

        let content = Column::new()
            .push(header)
            .push(
                Column::new()
                    .spacing(16)
                    .padding(24)
                    .push(views::logger::notice_bar(self.notice.current.as_ref()))
                    .push(panes)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_notice_is_kept() {
        let mut slot = NoticeSlot::default();
        let generations: Vec<u64> = (0..100).map(|i| slot.show(Notice::info(format!("notice {}", i)))).collect();
        let last = generations[99];
        assert_eq!(slot.current, Some(Notice::info("notice 99")));
        // timers of replaced notices do nothing
        slot.expire(last - 1);
        assert!(slot.current.is_some());
        slot.expire(last);
        assert!(slot.current.is_none());
    }
}
