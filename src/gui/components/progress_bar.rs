//! Progress bar component

use crate::downloader::SessionState;
use crate::gui::app::Message;
use crate::gui::theme::{self, ProgressBarStyle};
use iced::widget::{progress_bar as iced_progress_bar, row, text};
use iced::{Alignment, Element, Length};

/// Bar on a 0-100 scale with the percentage next to it
pub fn progress_bar(progress: f32, state: &SessionState) -> Element<'static, Message> {
    let style = match state {
        SessionState::Running => ProgressBarStyle::Running,
        SessionState::Completed => ProgressBarStyle::Complete,
        SessionState::Failed(_) => ProgressBarStyle::Failed,
        SessionState::Cancelled => ProgressBarStyle::Cancelled,
    };

    row![
        iced_progress_bar(0.0..=100.0, progress)
            .height(Length::Fixed(8.0))
            .style(iced::theme::ProgressBar::Custom(Box::new(style))),
        text(format!("{:.1}%", progress))
            .size(12)
            .width(Length::Fixed(48.0))
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}
