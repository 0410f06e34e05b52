//! Menu version detail screen: restaurant header plus the food item grid.

use carta_types::{MenuVersionDetail, Restaurant, format_price};
use iced::widget::{Column, Space, column, container, row, scrollable, text};
use iced::{Element, Length};

use crate::appearance::Palette;
use crate::message::Message;
use crate::remote::Remote;
use crate::util::date_format::format_long_date;
use crate::widget;

/// State passed to the menu detail view function.
pub struct MenuDetailState<'a> {
    /// Restaurant handed off by the previous screen, if any
    pub restaurant: Option<&'a Restaurant>,
    pub detail: &'a Remote<MenuVersionDetail>,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: MenuDetailState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let back = widget::back_button("Back to Library", Message::GoBack, palette);

    if state.detail.is_loading() {
        return column![back, widget::loading_pane(state.spinner_frame, palette)]
            .padding(32)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let Some(restaurant) = state.restaurant else {
        return column![back, no_data_pane("No restaurant data available", palette)]
            .padding(32)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let header = column![
        text(restaurant.name.as_str())
            .size(28)
            .color(palette.text)
            .font(iced::Font::MONOSPACE),
        Space::with_height(6),
        text(restaurant.location.as_str())
            .size(15)
            .color(palette.text_secondary),
        text(restaurant.schedule.as_str())
            .size(13)
            .color(palette.text_muted),
        text(restaurant.url.as_str()).size(13).color(palette.accent),
    ];

    let menu = view_menu(&state, palette);

    column![
        back,
        Space::with_height(12),
        header,
        Space::with_height(24),
        menu,
    ]
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn no_data_pane<'a>(message: &'a str, palette: &'a Palette) -> Element<'a, Message> {
    container(text(message).size(16).color(palette.text_muted))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_menu<'a>(state: &MenuDetailState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let Some(detail) = state.detail.ready() else {
        return text("No menu data available")
            .size(14)
            .color(palette.text_muted)
            .into();
    };

    let title = text("Menu").size(20).color(palette.text);
    let updated = text(format!(
        "Last updated: {}",
        format_long_date(&detail.menu_version.creation_date)
    ))
    .size(13)
    .color(palette.text_secondary);

    if detail.food_items.is_empty() {
        return column![
            title,
            Space::with_height(6),
            updated,
            Space::with_height(16),
            widget::card(
                text("No dishes found in this menu version")
                    .size(14)
                    .color(palette.text_secondary),
                palette,
            ),
        ]
        .into();
    }

    // Display order reverses the wire order.
    let cards: Vec<Element<'a, Message>> = detail
        .food_items
        .iter()
        .rev()
        .map(|item| {
            let price: Element<'a, Message> = match format_price(item.price) {
                Some(price) => text(price).size(14).color(palette.accent).into(),
                None => text("price unknown").size(12).color(palette.text_muted).into(),
            };
            widget::card(
                row![
                    text(item.name.as_str()).size(15).color(palette.text),
                    iced::widget::horizontal_space(),
                    price,
                ]
                .align_y(iced::Alignment::Center),
                palette,
            )
        })
        .collect();

    column![
        title,
        Space::with_height(6),
        updated,
        Space::with_height(16),
        scrollable(Column::from_vec(cards).spacing(10).width(Length::Fill)).height(Length::Fill),
    ]
    .into()
}
