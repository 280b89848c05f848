use iced::widget::{button, row, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Free-text filter input plus a button that clears both filters
pub fn view<'a>(filter_text: &str, any_filter: bool) -> Element<'a, Message> {
    let input = text_input("Filter Jobs", filter_text)
        .on_input(Message::FilterTextChanged)
        .width(Length::Fixed(240.0))
        .padding(8);

    let clear = button("Clear")
        .padding(8)
        .style(button::text)
        .on_press_maybe(any_filter.then_some(Message::ClearFilters));

    row![input, clear]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}
