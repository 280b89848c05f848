use iced::widget::{button, column, text, Row};
use iced::{Alignment, Element, Length, Theme};

use crate::state::tracking::TrackingToggle;
use crate::Message;

/// One button per status. Disabled toggles get no press handler,
/// so iced renders them inert.
pub fn view<'a>(toggles: &[TrackingToggle]) -> Element<'a, Message> {
    Row::with_children(toggles.iter().map(toggle_button))
        .spacing(16)
        .into()
}

fn toggle_button<'a>(toggle: &TrackingToggle) -> Element<'a, Message> {
    let content = column![
        text(toggle.count_text.clone()).size(18),
        text(toggle.status.code()).size(13),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let style: fn(&Theme, button::Status) -> button::Style = if toggle.selected {
        button::primary
    } else {
        button::secondary
    };

    button(content)
        .width(Length::Fixed(160.0))
        .padding(16)
        .style(style)
        .on_press_maybe(
            toggle
                .enabled
                .then_some(Message::StatusToggled(toggle.status)),
        )
        .into()
}
