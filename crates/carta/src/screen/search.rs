//! Free-text allergy/ingredient search screen.
//!
//! The form dispatches the query as typed, empty input included; the
//! backend decides what an empty query means. Result cards expand and
//! collapse independently, keyed by list index.

use std::collections::HashSet;

use carta_types::{FoodItem, SearchResult, format_price};
use iced::widget::{Space, button, column, horizontal_space, row, scrollable, text};
use iced::{Element, Length};
use lucide_icons::Icon;

use crate::appearance::{Palette, button::ButtonStyle};
use crate::message::Message;
use crate::remote::Remote;
use crate::widget::{self, icon};

/// State passed to the search screen view function, borrowed from the
/// main application state.
pub struct SearchScreenState<'a> {
    pub query: &'a str,
    pub results: &'a Remote<Vec<SearchResult>>,
    pub expanded: &'a HashSet<usize>,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: SearchScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let back = widget::back_button("Back to Home", Message::GoBack, palette);
    let header = widget::page_header_simple("Search The Right Food", palette);
    let form = view_form(&state, palette);
    let results = view_results(&state, palette);

    column![
        back,
        Space::with_height(12),
        header,
        Space::with_height(16),
        form,
        Space::with_height(24),
        results,
    ]
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_form<'a>(state: &SearchScreenState<'a>, _palette: &'a Palette) -> Element<'a, Message> {
    let input = widget::styled_input("Tell me about your allergies", state.query)
        .on_input(Message::SearchQueryChanged)
        .on_submit(Message::SubmitSearch);

    let submit = button(icon(Icon::Search).size(16).color(iced::Color::WHITE))
        .on_press(Message::SubmitSearch)
        .padding([12, 16])
        .style(ButtonStyle::Primary.style_fn());

    row![input, submit]
        .spacing(12)
        .align_y(iced::Alignment::Center)
        .into()
}

fn view_results<'a>(state: &SearchScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    if state.results.is_loading() {
        return widget::loading_pane(state.spinner_frame, palette);
    }

    if state.results.error().is_some() {
        return text("Search failed")
            .size(14)
            .color(palette.text_muted)
            .into();
    }

    match state.results.ready() {
        None => Space::with_height(0).into(),
        Some(hits) if hits.is_empty() => text("No matching restaurants")
            .size(14)
            .color(palette.text_muted)
            .into(),
        Some(hits) => {
            let cards: Vec<Element<'a, Message>> = hits
                .iter()
                .enumerate()
                .map(|(index, hit)| view_result(index, hit, state.expanded.contains(&index), palette))
                .collect();

            scrollable(iced::widget::Column::from_vec(cards).spacing(16).width(Length::Fill))
                .height(Length::Fill)
                .into()
        }
    }
}

fn view_result<'a>(
    index: usize,
    hit: &'a SearchResult,
    expanded: bool,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let chevron = if expanded {
        Icon::ChevronUp
    } else {
        Icon::ChevronDown
    };

    let header = button(
        row![
            column![
                text(hit.name.as_str()).size(20).color(palette.text),
                text(hit.location.as_str())
                    .size(13)
                    .color(palette.text_secondary),
                text(hit.url.as_str()).size(13).color(palette.accent),
            ]
            .spacing(2),
            horizontal_space(),
            icon(chevron).size(18).color(palette.text_muted),
        ]
        .align_y(iced::Alignment::Center),
    )
    .on_press(Message::ToggleResultExpand(index))
    .width(Length::Fill)
    .style(ButtonStyle::Ghost.style_fn());

    let mut body = column![header].spacing(12);
    if expanded {
        if hit.foods.is_empty() {
            body = body.push(
                text("No matching dishes")
                    .size(13)
                    .color(palette.text_muted),
            );
        }
        for food in &hit.foods {
            body = body.push(view_food(food, palette));
        }
    }

    widget::card(body, palette)
}

fn view_food<'a>(food: &'a FoodItem, palette: &'a Palette) -> Element<'a, Message> {
    let mut details = column![text(food.name.as_str()).size(15).color(palette.text)].spacing(4);

    if let Some(description) = &food.description {
        details = details.push(
            text(description.as_str())
                .size(13)
                .color(palette.text_secondary),
        );
    }

    if let Some(price) = format_price(food.price) {
        details = details.push(text(price).size(13).color(palette.accent));
    }

    if !food.ingredients.is_empty() {
        details = details.push(
            text(food.ingredients.join(" · "))
                .size(12)
                .color(palette.text_muted),
        );
    }

    details.into()
}
