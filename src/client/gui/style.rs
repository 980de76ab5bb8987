// Shared palette and container styles for the console views
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};
use iced::widget::container::Appearance;

use crate::client::models::analysis::ResultKind;
use crate::client::models::effect::NoticeLevel;

pub const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
pub const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for card bodies
pub const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
pub const DANGER: Color = Color::from_rgb(1.0, 0.35, 0.35);

pub const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
pub const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn bg_main_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn header_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border::default(),
        shadow: Shadow {
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        },
    }
}

pub fn card_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

pub fn panel_appearance(_: &Theme) -> Appearance {
    Appearance {
        background: Some(Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// (background, border, text) per result kind: blue for matches, amber for
/// suggestions, red for everything else.
pub fn result_colors(kind: ResultKind) -> (Color, Color, Color) {
    match kind {
        ResultKind::Success => (
            Color::from_rgb(0.86, 0.92, 1.0),
            Color::from_rgb(0.62, 0.76, 0.98),
            Color::from_rgb(0.12, 0.25, 0.55),
        ),
        ResultKind::Suggestion => (
            Color::from_rgb(1.0, 0.98, 0.86),
            Color::from_rgb(0.98, 0.88, 0.5),
            Color::from_rgb(0.52, 0.38, 0.05),
        ),
        ResultKind::Failure => (
            Color::from_rgb(1.0, 0.9, 0.9),
            Color::from_rgb(0.98, 0.7, 0.7),
            Color::from_rgb(0.6, 0.1, 0.1),
        ),
    }
}

pub fn result_appearance(kind: ResultKind) -> impl Fn(&Theme) -> Appearance {
    let (background, border, text) = result_colors(kind);
    move |_: &Theme| Appearance {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            width: 1.0,
            color: border,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Border and label color of the notice bar, bright enough for the dark panel.
pub fn notice_accent(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::from_rgb(0.35, 0.85, 0.55),
        NoticeLevel::Info => Color::from_rgb(0.5, 0.7, 1.0),
        NoticeLevel::Warning => Color::from_rgb(1.0, 0.8, 0.3),
        NoticeLevel::Error => DANGER,
    }
}

pub fn notice_appearance(level: NoticeLevel) -> impl Fn(&Theme) -> Appearance {
    let accent = notice_accent(level);
    move |_: &Theme| Appearance {
        background: Some(Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            width: 2.0,
            color: accent,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}
