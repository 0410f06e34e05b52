//! Restaurant detail screen: header plus the menu version list.
//!
//! The restaurant header renders from the entity handed off by the
//! library (when present) or from the detail fetch; when neither yields
//! anything the screen reports "no data available" instead of guessing.

use carta_types::{OpeningHours, Restaurant, RestaurantMenus};
use chrono::Local;
use iced::widget::{Column, Space, button, column, horizontal_space, row, scrollable, text};
use iced::{Element, Length};

use crate::appearance::{Palette, button::ButtonStyle};
use crate::message::Message;
use crate::remote::Remote;
use crate::widget;

/// State passed to the restaurant detail view function.
pub struct RestaurantDetailState<'a> {
    pub restaurant_id: i64,
    /// Entity handed off by the previous screen, if any
    pub restaurant: Option<&'a Restaurant>,
    pub menus: &'a Remote<RestaurantMenus>,
    pub spinner_frame: usize,
}

/// Restaurant header fields resolved from the fetch or the handoff.
struct Header<'a> {
    name: &'a str,
    location: &'a str,
    schedule: &'a str,
    url: &'a str,
}

impl<'a> RestaurantDetailState<'a> {
    fn header(&self) -> Option<Header<'a>> {
        if let Some(menus) = self.menus.ready() {
            if !menus.name.is_empty() {
                return Some(Header {
                    name: &menus.name,
                    location: &menus.location,
                    schedule: &menus.schedule,
                    url: &menus.url,
                });
            }
        }
        self.restaurant.map(|restaurant| Header {
            name: &restaurant.name,
            location: &restaurant.location,
            schedule: &restaurant.schedule,
            url: &restaurant.url,
        })
    }

    /// Restaurant to hand off when drilling into a menu version.
    fn handoff(&self) -> Option<Restaurant> {
        if let Some(restaurant) = self.restaurant {
            return Some(restaurant.clone());
        }
        self.menus.ready().map(|menus| Restaurant {
            id: self.restaurant_id,
            name: menus.name.clone(),
            location: menus.location.clone(),
            schedule: menus.schedule.clone(),
            url: menus.url.clone(),
            cuisine: menus.cuisine.clone(),
        })
    }
}

pub fn view<'a>(state: RestaurantDetailState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let back = widget::back_button("Back to Library", Message::GoBack, palette);

    if state.menus.is_loading() && state.restaurant.is_none() {
        return column![back, widget::loading_pane(state.spinner_frame, palette)]
            .padding(32)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let Some(header) = state.header() else {
        return column![
            back,
            no_data_pane(palette),
        ]
        .padding(32)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();
    };

    let header_view = view_header(&header, palette);
    let versions = view_versions(&state, palette);

    column![
        back,
        Space::with_height(12),
        header_view,
        Space::with_height(24),
        versions,
    ]
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn no_data_pane<'a>(palette: &'a Palette) -> Element<'a, Message> {
    iced::widget::container(
        text("No restaurant data available")
            .size(16)
            .color(palette.text_muted),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_header<'a>(header: &Header<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let open_now = OpeningHours::parse(header.schedule)
        .is_some_and(|hours| hours.contains(Local::now().time()));
    let (badge, badge_color) = if open_now {
        ("Currently Open", palette.success)
    } else {
        ("Currently Closed", palette.danger)
    };

    column![
        text(header.name).size(28).color(palette.text).font(iced::Font::MONOSPACE),
        Space::with_height(6),
        text(badge).size(14).color(badge_color),
        Space::with_height(6),
        text(header.location).size(15).color(palette.text_secondary),
        text(header.schedule).size(13).color(palette.text_muted),
        text(header.url).size(13).color(palette.accent),
    ]
    .into()
}

fn view_versions<'a>(
    state: &RestaurantDetailState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    if state.menus.is_loading() {
        return widget::loading_pane(state.spinner_frame, palette);
    }

    let Some(menus) = state.menus.ready() else {
        return text("No menu data available")
            .size(14)
            .color(palette.text_muted)
            .into();
    };

    if menus.menu_versions.is_empty() {
        return widget::card(
            text("No versions found")
                .size(14)
                .color(palette.text_secondary),
            palette,
        );
    }

    let handoff = state.handoff();
    let total = menus.menu_versions.len();

    let title = text("Menu Versions").size(20).color(palette.text);
    let cards: Vec<Element<'a, Message>> = menus
        .menu_versions
        .iter()
        .enumerate()
        .map(|(index, version)| {
            let mut label = row![
                text(format!("Version {}", total - index)).size(15).color(palette.text),
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center);
            if index == 0 {
                label = label.push(text("Latest").size(12).color(palette.accent));
            }

            let content = column![
                label,
                text(format!("Created: {}", version.creation_day()))
                    .size(13)
                    .color(palette.text_secondary),
            ]
            .spacing(4)
            .width(Length::Fill);

            button(content)
                .on_press(Message::OpenMenuVersion {
                    id: version.id,
                    restaurant: handoff.clone(),
                })
                .padding(14)
                .width(Length::Fill)
                .style(ButtonStyle::Card.style_fn())
                .into()
        })
        .collect();

    column![
        row![title, horizontal_space()],
        Space::with_height(12),
        scrollable(Column::from_vec(cards).spacing(10).width(Length::Fill)).height(Length::Fill),
    ]
    .into()
}
