//! URL input component

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// URL field with Paste and Clear buttons
pub fn url_input(value: &str) -> Element<'static, Message> {
    row![
        text_input("Paste video URL here...", value)
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::CheckQualities)
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::TextInput::Custom(Box::new(theme::UrlInputStyle))),
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton))),
    ]
    .spacing(8)
    .align_items(Alignment::Center)
    .into()
}
