//! Library card for one restaurant and its price summary.

use carta_types::format_price;
use iced::widget::{Space, button, column, text};
use iced::{Element, Length};

use crate::api::LibraryEntry;
use crate::appearance::{Palette, button::ButtonStyle};
use crate::message::Message;

/// Clickable card showing a restaurant's header and price aggregate.
/// Pressing it opens the detail screen with the restaurant handed off.
pub fn restaurant_card<'a>(entry: &'a LibraryEntry, palette: &'a Palette) -> Element<'a, Message> {
    let restaurant = &entry.restaurant;
    let prices = &entry.prices;

    let avg_line = format_price(prices.avg_food_price)
        .map(|avg| format!("Avg price: {}", avg))
        .unwrap_or_else(|| "Avg price unavailable".to_string());
    let range_line = match (
        format_price(prices.min_food_price),
        format_price(prices.max_food_price),
    ) {
        (Some(min), Some(max)) => format!("Price range: {} – {}", min, max),
        _ => String::new(),
    };

    let mut details = column![
        text(restaurant.name.as_str()).size(18).color(palette.text),
        Space::with_height(4),
        text(restaurant.location.as_str())
            .size(13)
            .color(palette.text_secondary),
        text(restaurant.schedule.as_str())
            .size(13)
            .color(palette.text_muted),
        Space::with_height(8),
        text(avg_line).size(13).color(palette.text_secondary),
    ]
    .width(Length::Fill);

    if !range_line.is_empty() {
        details = details.push(text(range_line).size(13).color(palette.text_secondary));
    }

    button(details)
        .on_press(Message::OpenRestaurant(restaurant.clone()))
        .padding(16)
        .width(Length::Fill)
        .style(ButtonStyle::Card.style_fn())
        .into()
}
