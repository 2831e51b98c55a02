//! One row per download session

use crate::downloader::{DownloadSession, SessionState};
use crate::gui::app::Message;
use crate::gui::components::progress_bar;
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

pub fn download_row(session: &DownloadSession) -> Element<'static, Message> {
    let label_color = match session.state {
        SessionState::Failed(_) => theme::RED_500,
        SessionState::Cancelled => theme::TEXT_SECONDARY,
        _ => theme::TEXT_PRIMARY,
    };

    let mut controls = row![].spacing(8);
    if session.is_running() {
        controls = controls.push(
            button(text("Cancel").size(12))
                .on_press(Message::CancelDownload(session.id))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::DestructiveButton))),
        );
    }
    if session.destination.is_some() {
        controls = controls.push(
            button(text("Show in Folder").size(12))
                .on_press(Message::ShowInFolder(session.id))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
        );
    }

    let content = column![
        row![
            text(session.label())
                .size(15)
                .width(Length::Fill)
                .style(iced::theme::Text::Color(label_color)),
            Space::with_width(8),
            controls,
        ]
        .align_items(Alignment::Center),
        progress_bar(session.progress, &session.state),
    ]
    .spacing(10)
    .width(Length::Fill);

    container(content)
        .padding(14)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::Card)))
        .into()
}
