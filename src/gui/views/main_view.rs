//! Main window layout

use crate::downloader::SessionList;
use crate::gui::app::Message;
use crate::gui::components::{download_row, quality_picker, url_input};
use crate::gui::theme;
use crate::quality::QualitySelection;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};
use std::path::Path;

/// Everything the main view reads from application state
pub struct MainViewState<'a> {
    pub url: &'a str,
    pub qualities: &'a QualitySelection,
    pub is_fetching: bool,
    pub download_folder: &'a Path,
    pub sessions: &'a SessionList,
    pub status_message: &'a str,
}

pub fn main_view(state: MainViewState<'_>) -> Element<'static, Message> {
    let input_section = container(
        column![
            text("Download Video")
                .size(26)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            url_input(state.url),
            quality_picker(
                state.qualities.labels(),
                state.qualities.selected_label(),
                state.is_fetching,
            ),
            row![
                button(text("Choose Folder").size(14))
                    .on_press(Message::ChooseFolder)
                    .padding([8, 14])
                    .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
                text(format!(
                    "Download Location: {}",
                    state.download_folder.display()
                ))
                .size(13)
                .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
            row![
                Space::with_width(Length::Fill),
                button(text("Download Video").size(16))
                    .on_press(Message::DownloadPressed)
                    .padding([12, 28])
                    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ],
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::Card)));

    let downloads: Element<'static, Message> = if state.sessions.is_empty() {
        container(
            text("Your downloads will appear here")
                .size(14)
                .style(iced::theme::Text::Color(theme::SLATE_400)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    } else {
        let rows = state
            .sessions
            .iter()
            .fold(column![].spacing(10), |col, session| {
                col.push(download_row(session))
            });

        scrollable(rows)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Scrollable::Custom(Box::new(
                theme::RowsScrollable,
            )))
            .into()
    };

    let status = text(state.status_message.to_string())
        .size(12)
        .style(iced::theme::Text::Color(theme::TEXT_SECONDARY));

    column![
        input_section,
        text("Downloads")
            .size(18)
            .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
        downloads,
        status,
    ]
    .spacing(16)
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(24)
    .into()
}
