//! Restaurant library screen.
//!
//! Shows only restaurants whose price-summary fetch succeeded; the
//! aggregation join happens in the API layer and this screen renders the
//! surviving entries in their original order.

use iced::widget::{Column, Space, column, scrollable, text};
use iced::{Element, Length};

use crate::api::LibraryEntry;
use crate::appearance::Palette;
use crate::message::Message;
use crate::remote::Remote;
use crate::widget::{self, restaurant_card};

/// State passed to the library screen view function.
pub struct LibraryScreenState<'a> {
    pub library: &'a Remote<Vec<LibraryEntry>>,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: LibraryScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let back = widget::back_button("Back to Home", Message::GoBack, palette);
    let header = widget::page_header_simple("Restaurant Library", palette);
    let content = view_content(&state, palette);

    column![
        back,
        Space::with_height(12),
        header,
        Space::with_height(24),
        content,
    ]
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_content<'a>(state: &LibraryScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    if state.library.is_loading() {
        return widget::loading_pane(state.spinner_frame, palette);
    }

    if state.library.error().is_some() {
        return text("Could not load the library")
            .size(14)
            .color(palette.text_muted)
            .into();
    }

    match state.library.ready() {
        Some(entries) if !entries.is_empty() => {
            let cards: Vec<Element<'a, Message>> = entries
                .iter()
                .map(|entry| restaurant_card(entry, palette))
                .collect();

            scrollable(Column::from_vec(cards).spacing(12).width(Length::Fill))
                .height(Length::Fill)
                .into()
        }
        _ => text("No restaurants with price data yet")
            .size(14)
            .color(palette.text_muted)
            .into(),
    }
}
