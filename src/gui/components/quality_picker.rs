//! Quality check button and dropdown

use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::{button, pick_list, row, text};
use iced::{Alignment, Element, Length};

pub fn quality_picker(
    labels: Vec<String>,
    selected: Option<String>,
    is_fetching: bool,
) -> Element<'static, Message> {
    let check = button(
        text(if is_fetching {
            "Checking..."
        } else {
            "Check Available Qualities"
        })
        .size(14),
    )
    .on_press_maybe((!is_fetching).then_some(Message::CheckQualities))
    .padding([8, 14])
    .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton)));

    row![
        check,
        text("Video Quality:")
            .size(14)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY)),
        pick_list(labels, selected, Message::QualitySelected)
            .placeholder("Check qualities first")
            .text_size(14)
            .padding([6, 10])
            .width(Length::Fixed(180.0)),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
