use iced::widget::text_editor;

use crate::client::models::analyzer_state::AnalyzerEvent;
use crate::client::models::roster_state::RosterEvent;

#[derive(Debug, Clone)]
pub enum Message {
    Roster(RosterEvent),
    Analyzer(AnalyzerEvent),
    // Raw editor actions; the app forwards the resulting text as a component event
    RosterDraftEdited(text_editor::Action),
    AnalyzerTextEdited(text_editor::Action),
    ClearLog(u64),
}
