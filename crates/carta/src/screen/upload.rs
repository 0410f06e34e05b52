//! Menu upload screen.
//!
//! A PDF is attached via the native file dialog or a window drop, then
//! associated with either an existing restaurant (picked through the
//! suggestion field) or a brand new one (five required fields). Submitting
//! the new-restaurant path creates the restaurant first and uploads only
//! with the id that call returns.

use carta_types::{NewRestaurant, Restaurant};
use iced::widget::{Column, Space, button, column, container, radio, row, scrollable, text};
use iced::{Element, Length};
use lucide_icons::Icon;

use crate::api::PdfFile;
use crate::appearance::{Palette, button::ButtonStyle};
use crate::message::{Message, RestaurantOption};
use crate::remote::Remote;
use crate::widget::{self, icon};

/// Form state for the upload screen, owned by the application and reset
/// every time the screen is entered.
#[derive(Debug, Default)]
pub struct UploadForm {
    /// Restaurant list backing the suggestion field
    pub restaurants: Remote<Vec<Restaurant>>,
    pub option: RestaurantOption,
    /// Suggestion field text
    pub query: String,
    /// Current suggestions; refreshed on every keystroke, cleared on pick
    pub suggestions: Vec<Restaurant>,
    pub new_restaurant: NewRestaurant,
    pub file: Option<PdfFile>,
    /// Submit progress (covers both the create and upload steps)
    pub submit: Remote<()>,
}

/// What a submit would do, resolved from the current form state.
#[derive(Debug, Clone)]
pub struct UploadPlan {
    pub file: PdfFile,
    pub target: UploadTarget,
}

#[derive(Debug, Clone)]
pub enum UploadTarget {
    /// Upload straight to this restaurant id
    Existing(i64),
    /// Create the restaurant first, then upload with the returned id
    CreateThenUpload(NewRestaurant),
}

impl UploadForm {
    /// Restaurants whose names contain the query, case-insensitively.
    /// An empty query yields no suggestions, not the full list.
    pub fn filter_suggestions(&self) -> Vec<Restaurant> {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.restaurants
            .ready()
            .map(|all| {
                all.iter()
                    .filter(|restaurant| restaurant.name.to_lowercase().contains(&query))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Exact-name match against the fetched restaurant list.
    pub fn selected_existing_id(&self) -> Option<i64> {
        self.restaurants
            .ready()?
            .iter()
            .find(|restaurant| restaurant.name == self.query)
            .map(|restaurant| restaurant.id)
    }

    /// A plan exists only when a PDF is attached and the chosen path is
    /// complete; otherwise submit stays disabled.
    pub fn plan(&self) -> Option<UploadPlan> {
        let file = self.file.clone()?;
        let target = match self.option {
            RestaurantOption::Existing => UploadTarget::Existing(self.selected_existing_id()?),
            RestaurantOption::New => {
                if !self.new_restaurant.is_complete() {
                    return None;
                }
                UploadTarget::CreateThenUpload(self.new_restaurant.clone())
            }
        };
        Some(UploadPlan { file, target })
    }

    pub fn can_submit(&self) -> bool {
        self.plan().is_some() && !self.submit.is_loading()
    }
}

/// State passed to the upload screen view function.
pub struct UploadScreenState<'a> {
    pub form: &'a UploadForm,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: UploadScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let back = widget::back_button("Back to Home", Message::GoBack, palette);
    let header = widget::page_header_simple("Upload Menu", palette);

    let body = row![
        view_file_zone(state.form, palette),
        view_restaurant_pane(&state, palette),
    ]
    .spacing(24)
    .height(Length::Fill);

    column![
        back,
        Space::with_height(12),
        header,
        Space::with_height(24),
        body,
    ]
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Left half: the PDF drop/pick zone.
fn view_file_zone<'a>(form: &'a UploadForm, palette: &'a Palette) -> Element<'a, Message> {
    let content = match &form.file {
        Some(file) => column![
            icon(Icon::CircleCheck).size(40).color(palette.success),
            Space::with_height(12),
            text(file.name.as_str()).size(15).color(palette.text),
            text("File selected").size(13).color(palette.text_muted),
        ],
        None => column![
            icon(Icon::File).size(40).color(palette.text_muted),
            Space::with_height(12),
            text("Click to choose a PDF menu")
                .size(15)
                .color(palette.text),
            text("or drop one on the window. Only PDF files are accepted")
                .size(13)
                .color(palette.text_muted),
        ],
    }
    .align_x(iced::Alignment::Center);

    button(
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::PickMenuFile)
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .padding(24)
    .style(ButtonStyle::Card.style_fn())
    .into()
}

/// Right half: restaurant choice, its sub-form, and the submit button.
fn view_restaurant_pane<'a>(
    state: &UploadScreenState<'a>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let form = state.form;

    let option_label = text("Restaurant").size(14).color(palette.text_secondary);
    let options = row![
        radio(
            "Select existing restaurant",
            RestaurantOption::Existing,
            Some(form.option),
            Message::UploadOptionChanged,
        )
        .size(16)
        .text_size(14),
        radio(
            "Create new restaurant",
            RestaurantOption::New,
            Some(form.option),
            Message::UploadOptionChanged,
        )
        .size(16)
        .text_size(14),
    ]
    .spacing(24);

    let sub_form = match form.option {
        RestaurantOption::Existing => view_existing(state, palette),
        RestaurantOption::New => view_new(form, palette),
    };

    let status = view_status(form, palette);
    let submit = view_submit(form, palette);

    column![
        option_label,
        Space::with_height(8),
        options,
        Space::with_height(16),
        sub_form,
        status,
        Space::with_height(12),
        submit,
    ]
    .width(Length::FillPortion(1))
    .into()
}

/// Existing-restaurant path: search-as-you-type over the fetched list.
fn view_existing<'a>(state: &UploadScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let form = state.form;

    let label = text("Search restaurants")
        .size(12)
        .color(palette.text_secondary);
    let input = widget::styled_input("Type to search...", &form.query)
        .on_input(Message::UploadSearchChanged);

    let mut content = column![label, Space::with_height(6), input].width(Length::Fill);

    if form.restaurants.is_loading() {
        content = content.push(Space::with_height(8));
        content = content.push(widget::spinner(state.spinner_frame, palette));
    }

    if !form.suggestions.is_empty() {
        let items: Vec<Element<'a, Message>> = form
            .suggestions
            .iter()
            .map(|restaurant| {
                button(text(restaurant.name.as_str()).size(14).color(palette.text))
                    .on_press(Message::SuggestionPicked(restaurant.name.clone()))
                    .width(Length::Fill)
                    .padding([8, 12])
                    .style(ButtonStyle::Ghost.style_fn())
                    .into()
            })
            .collect();

        content = content.push(Space::with_height(8));
        content = content.push(widget::card(
            Column::from_vec(items).width(Length::Fill),
            palette,
        ));
    }

    content.into()
}

/// New-restaurant path: five required fields.
fn view_new<'a>(form: &'a UploadForm, palette: &'a Palette) -> Element<'a, Message> {
    let fields = column![
        view_text_field(
            "Restaurant Name *",
            "Name",
            &form.new_restaurant.name,
            Message::NewRestaurantNameChanged,
            palette,
        ),
        Space::with_height(12),
        view_text_field(
            "Location *",
            "Address or area",
            &form.new_restaurant.location,
            Message::NewRestaurantLocationChanged,
            palette,
        ),
        Space::with_height(12),
        view_text_field(
            "Schedule *",
            "09:00-17:00",
            &form.new_restaurant.schedule,
            Message::NewRestaurantScheduleChanged,
            palette,
        ),
        Space::with_height(12),
        view_text_field(
            "URL *",
            "https://...",
            &form.new_restaurant.url,
            Message::NewRestaurantUrlChanged,
            palette,
        ),
        Space::with_height(12),
        view_text_field(
            "Cuisine *",
            "Cuisine",
            &form.new_restaurant.cuisine,
            Message::NewRestaurantCuisineChanged,
            palette,
        ),
    ]
    .width(Length::Fill);

    scrollable(fields).height(Length::Fill).into()
}

/// Renders a labeled text input field.
fn view_text_field<'a, F>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: F,
    palette: &'a Palette,
) -> Element<'a, Message>
where
    F: Fn(String) -> Message + 'a,
{
    let label_text = text(label).size(12).color(palette.text_secondary);
    let input = widget::styled_input(placeholder, value).on_input(on_input);

    column![label_text, Space::with_height(6), input]
        .width(Length::Fill)
        .into()
}

fn view_status<'a>(form: &'a UploadForm, palette: &'a Palette) -> Element<'a, Message> {
    if form.submit.ready().is_some() {
        return column![
            Space::with_height(12),
            text("Menu uploaded").size(14).color(palette.success),
        ]
        .into();
    }
    if let Some(reason) = form.submit.error() {
        return column![
            Space::with_height(12),
            text(format!("Upload failed: {}", reason))
                .size(13)
                .color(palette.danger),
        ]
        .into();
    }
    Space::with_height(0).into()
}

fn view_submit<'a>(form: &'a UploadForm, _palette: &'a Palette) -> Element<'a, Message> {
    let label = if form.submit.is_loading() {
        "Uploading..."
    } else {
        "Upload Menu"
    };

    button(
        container(text(label).size(15)).center_x(Length::Fill),
    )
    .on_press_maybe(form.can_submit().then_some(Message::SubmitUpload))
    .width(Length::Fill)
    .padding(14)
    .style(ButtonStyle::Primary.style_fn())
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            location: String::new(),
            schedule: String::new(),
            url: String::new(),
            cuisine: String::new(),
        }
    }

    fn form_with_restaurants(restaurants: Vec<Restaurant>) -> UploadForm {
        let mut form = UploadForm::default();
        let generation = form.restaurants.begin();
        form.restaurants
            .resolve::<String>(generation, Ok(restaurants));
        form
    }

    fn pdf() -> PdfFile {
        PdfFile::new("menu.pdf".into(), b"%PDF-1.4".to_vec()).unwrap()
    }

    #[test]
    fn suggestions_match_case_insensitive_substrings() {
        let mut form = form_with_restaurants(vec![
            restaurant(1, "Bar Luna"),
            restaurant(2, "Trattoria Sole"),
            restaurant(3, "Lunar Kitchen"),
        ]);
        form.query = "LUN".into();

        let names: Vec<_> = form
            .filter_suggestions()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Bar Luna", "Lunar Kitchen"]);
    }

    #[test]
    fn empty_query_yields_no_suggestions() {
        let mut form = form_with_restaurants(vec![restaurant(1, "Bar Luna")]);
        form.query = "   ".into();
        assert!(form.filter_suggestions().is_empty());
    }

    #[test]
    fn unique_match_yields_exactly_one_suggestion() {
        let mut form = form_with_restaurants(vec![
            restaurant(1, "Bar Luna"),
            restaurant(2, "Trattoria Sole"),
        ]);
        form.query = "sole".into();
        assert_eq!(form.filter_suggestions().len(), 1);
    }

    #[test]
    fn plan_requires_a_file() {
        let mut form = form_with_restaurants(vec![restaurant(1, "Bar Luna")]);
        form.query = "Bar Luna".into();
        assert!(form.plan().is_none());

        form.file = Some(pdf());
        assert!(matches!(
            form.plan().map(|p| p.target),
            Some(UploadTarget::Existing(1))
        ));
    }

    #[test]
    fn existing_path_requires_exact_name_match() {
        let mut form = form_with_restaurants(vec![restaurant(1, "Bar Luna")]);
        form.file = Some(pdf());
        form.query = "Bar".into();
        assert!(form.plan().is_none());

        form.query = "Bar Luna".into();
        assert!(form.plan().is_some());
    }

    #[test]
    fn new_path_requires_every_field() {
        let mut form = UploadForm::default();
        form.option = RestaurantOption::New;
        form.file = Some(pdf());
        form.new_restaurant = NewRestaurant {
            name: "Bar Luna".into(),
            location: "Old Town".into(),
            schedule: "09:00-17:00".into(),
            url: "https://example.com".into(),
            cuisine: String::new(),
        };
        assert!(form.plan().is_none());

        form.new_restaurant.cuisine = "Italian".into();
        assert!(matches!(
            form.plan().map(|p| p.target),
            Some(UploadTarget::CreateThenUpload(_))
        ));
    }

    #[test]
    fn submit_is_blocked_while_in_flight() {
        let mut form = form_with_restaurants(vec![restaurant(1, "Bar Luna")]);
        form.query = "Bar Luna".into();
        form.file = Some(pdf());
        assert!(form.can_submit());

        form.submit.begin();
        assert!(!form.can_submit());
    }
}
