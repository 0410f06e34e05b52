//! Landing screen with the three navigation cards.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};
use lucide_icons::Icon;

use crate::appearance::{Palette, button::ButtonStyle};
use crate::message::Message;
use crate::screen::Screen;
use crate::widget::icon;

/// Renders the home screen: title plus one card per destination.
pub fn view(palette: &Palette) -> Element<'_, Message> {
    let title = text("Carta")
        .size(36)
        .color(palette.text)
        .font(iced::Font::MONOSPACE);

    let cards = row![
        nav_card(
            Icon::Upload,
            "Upload Menu",
            "Add a new menu to your collection",
            Screen::Upload,
            palette,
        ),
        nav_card(
            Icon::Search,
            "Search Menus",
            "Search or analyze existing menus",
            Screen::Search,
            palette,
        ),
        nav_card(
            Icon::ChefHat,
            "Restaurant Library",
            "Explore a curated collection of menus",
            Screen::Library,
            palette,
        ),
    ]
    .spacing(24);

    let content = column![title, Space::with_height(40), cards].align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn nav_card<'a>(
    card_icon: Icon,
    title: &'a str,
    subtitle: &'a str,
    destination: Screen,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let content = column![
        icon(card_icon).size(32).color(palette.accent),
        Space::with_height(16),
        text(title).size(18).color(palette.text),
        Space::with_height(6),
        text(subtitle).size(13).color(palette.text_secondary),
    ]
    .align_x(iced::Alignment::Center)
    .width(Length::Fill);

    button(
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::Navigate(destination))
    .width(Length::Fixed(240.0))
    .height(Length::Fixed(220.0))
    .padding(24)
    .style(ButtonStyle::Card.style_fn())
    .into()
}
