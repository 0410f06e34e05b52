use std::collections::HashSet;

use iced::widget::container;
use iced::{Element, Length, Subscription, Task};
use tracing::debug;

use carta_types::{MenuVersionDetail, NewRestaurant, Restaurant, RestaurantMenus, SearchResult};

use crate::api::{self, LibraryEntry, PdfFile};
use crate::appearance::{self, Palette};
use crate::config::CartaConfig;
use crate::message::{Message, RestaurantOption};
use crate::remote::Remote;
use crate::screen::upload::{UploadForm, UploadTarget};
use crate::screen::{self, Screen};
use crate::util;

#[derive(Debug)]
pub struct Carta {
    screen: Screen,
    screen_history: Vec<Screen>,
    config: CartaConfig,

    /// Current spinner animation frame (0-9)
    spinner_frame: usize,

    // Search screen
    search_query: String,
    search_results: Remote<Vec<SearchResult>>,
    expanded_results: HashSet<usize>,

    // Upload screen
    upload: UploadForm,

    // Library screen
    library: Remote<Vec<LibraryEntry>>,

    // Detail screens: the restaurant handed off by the previous screen
    // (if any) plus each screen's own fetch
    current_restaurant: Option<Restaurant>,
    restaurant_menus: Remote<RestaurantMenus>,
    menu_version: Remote<MenuVersionDetail>,
}

impl Carta {
    pub fn new() -> (Self, Task<Message>) {
        let config = CartaConfig::load();

        let carta = Self {
            screen: Screen::Home,
            screen_history: Vec::new(),
            config,
            spinner_frame: 0,

            // Search screen
            search_query: String::new(),
            search_results: Remote::default(),
            expanded_results: HashSet::new(),

            // Upload screen
            upload: UploadForm::default(),

            // Library screen
            library: Remote::default(),

            // Detail screens
            current_restaurant: None,
            restaurant_menus: Remote::default(),
            menu_version: Remote::default(),
        };

        (carta, Task::none())
    }

    fn base_url(&self) -> String {
        self.config.api_base_url.clone()
    }

    /// Reset the target screen's state and kick off its fetches. Shared by
    /// forward and back navigation, since both re-enter the screen.
    fn enter(&mut self, screen: Screen) -> Task<Message> {
        self.screen = screen.clone();
        match screen {
            Screen::Home => Task::none(),
            Screen::Search => {
                self.search_query.clear();
                self.search_results.reset();
                self.expanded_results.clear();
                Task::none()
            }
            Screen::Upload => {
                // Fresh form, but carry the generation counters forward so
                // fetches from a previous visit cannot resolve into it.
                let previous = std::mem::replace(&mut self.upload, UploadForm::default());
                self.upload.restaurants = previous.restaurants;
                self.upload.submit = previous.submit;
                self.upload.submit.reset();
                let generation = self.upload.restaurants.begin();
                Task::perform(api::list_restaurants(self.base_url()), move |result| {
                    Message::RestaurantsLoaded(generation, result)
                })
            }
            Screen::Library => {
                let generation = self.library.begin();
                Task::perform(api::load_library(self.base_url()), move |result| {
                    Message::LibraryLoaded(generation, result)
                })
            }
            Screen::RestaurantDetail { id } => {
                // Keep the handoff only when it matches the target id.
                if self.current_restaurant.as_ref().map(|r| r.id) != Some(id) {
                    self.current_restaurant = None;
                }
                let generation = self.restaurant_menus.begin();
                Task::perform(
                    api::get_restaurant_menus(self.base_url(), id),
                    move |result| Message::MenusLoaded(generation, result),
                )
            }
            Screen::MenuVersionDetail { id } => {
                let generation = self.menu_version.begin();
                Task::perform(
                    api::get_menu_version(self.base_url(), id),
                    move |result| Message::MenuVersionLoaded(generation, result),
                )
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                self.screen_history.push(self.screen.clone());
                self.enter(screen)
            }
            Message::GoBack => {
                if let Some(previous) = self.screen_history.pop() {
                    return self.enter(previous);
                }
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_frame = (self.spinner_frame + 1) % 10;
                Task::none()
            }

            // ========== Search ==========
            Message::SearchQueryChanged(query) => {
                self.search_query = query;
                Task::none()
            }
            Message::SubmitSearch => {
                // Empty queries round-trip to the backend as-is.
                self.expanded_results.clear();
                let generation = self.search_results.begin();
                let query = self.search_query.clone();
                Task::perform(api::search(self.base_url(), query), move |result| {
                    Message::SearchLoaded(generation, result)
                })
            }
            Message::SearchLoaded(generation, result) => {
                self.search_results.resolve(generation, result);
                Task::none()
            }
            Message::ToggleResultExpand(index) => {
                util::toggle_index(&mut self.expanded_results, index);
                Task::none()
            }

            // ========== Upload ==========
            Message::RestaurantsLoaded(generation, result) => {
                self.upload.restaurants.resolve(generation, result);
                Task::none()
            }
            Message::UploadOptionChanged(option) => {
                self.upload.option = option;
                Task::none()
            }
            Message::UploadSearchChanged(query) => {
                self.upload.query = query;
                self.upload.suggestions = self.upload.filter_suggestions();
                Task::none()
            }
            Message::SuggestionPicked(name) => {
                self.upload.query = name;
                self.upload.suggestions.clear();
                self.upload.option = RestaurantOption::Existing;
                Task::none()
            }
            Message::NewRestaurantNameChanged(value) => {
                self.upload.new_restaurant.name = value;
                Task::none()
            }
            Message::NewRestaurantLocationChanged(value) => {
                self.upload.new_restaurant.location = value;
                Task::none()
            }
            Message::NewRestaurantScheduleChanged(value) => {
                self.upload.new_restaurant.schedule = value;
                Task::none()
            }
            Message::NewRestaurantUrlChanged(value) => {
                self.upload.new_restaurant.url = value;
                Task::none()
            }
            Message::NewRestaurantCuisineChanged(value) => {
                self.upload.new_restaurant.cuisine = value;
                Task::none()
            }
            Message::PickMenuFile => Task::perform(pick_menu_file(), Message::MenuFileSelected),
            Message::MenuFileSelected(file) => {
                // A cancelled dialog or a non-PDF pick keeps the previous
                // selection.
                if file.is_some() {
                    self.upload.file = file;
                }
                Task::none()
            }
            Message::MenuFileDropped(path) => {
                if self.screen == Screen::Upload {
                    return Task::perform(PdfFile::read(path), Message::MenuFileSelected);
                }
                Task::none()
            }
            Message::SubmitUpload => {
                let Some(plan) = self.upload.plan() else {
                    return Task::none();
                };
                if self.upload.submit.is_loading() {
                    return Task::none();
                }
                let generation = self.upload.submit.begin();
                let base = self.base_url();
                match plan.target {
                    UploadTarget::Existing(restaurant_id) => Task::perform(
                        api::upload_menu(base, plan.file, restaurant_id),
                        move |result| Message::UploadFinished(generation, result),
                    ),
                    UploadTarget::CreateThenUpload(fields) => Task::perform(
                        api::create_restaurant(base, fields),
                        move |result| Message::RestaurantCreated(generation, result),
                    ),
                }
            }
            Message::RestaurantCreated(generation, result) => {
                if !self.upload.submit.is_current(generation) {
                    return Task::none();
                }
                match result {
                    Ok(restaurant_id) => {
                        debug!(restaurant_id, "restaurant created, uploading menu");
                        match self.upload.file.clone() {
                            Some(file) => Task::perform(
                                api::upload_menu(self.base_url(), file, restaurant_id),
                                move |result| Message::UploadFinished(generation, result),
                            ),
                            None => {
                                self.upload
                                    .submit
                                    .resolve(generation, Err::<(), _>("no file selected"));
                                Task::none()
                            }
                        }
                    }
                    Err(reason) => {
                        // Create failed: the upload step never runs.
                        self.upload.submit.resolve(generation, Err::<(), _>(reason));
                        Task::none()
                    }
                }
            }
            Message::UploadFinished(generation, result) => {
                let succeeded = result.is_ok();
                if self.upload.submit.resolve(generation, result) && succeeded {
                    // Fresh form for the next menu; keep the restaurant list.
                    self.upload.file = None;
                    self.upload.new_restaurant = NewRestaurant::default();
                }
                Task::none()
            }

            // ========== Library ==========
            Message::LibraryLoaded(generation, result) => {
                self.library.resolve(generation, result);
                Task::none()
            }
            Message::OpenRestaurant(restaurant) => {
                let id = restaurant.id;
                self.current_restaurant = Some(restaurant);
                self.update(Message::Navigate(Screen::RestaurantDetail { id }))
            }

            // ========== Restaurant detail ==========
            Message::MenusLoaded(generation, result) => {
                self.restaurant_menus.resolve(generation, result);
                Task::none()
            }
            Message::OpenMenuVersion { id, restaurant } => {
                if restaurant.is_some() {
                    self.current_restaurant = restaurant;
                }
                self.update(Message::Navigate(Screen::MenuVersionDetail { id }))
            }

            // ========== Menu version detail ==========
            Message::MenuVersionLoaded(generation, result) => {
                self.menu_version.resolve(generation, result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = appearance::palette();
        let content = self.view_content(palette);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(iced::Background::Color(palette.background)),
                ..Default::default()
            })
            .into()
    }

    /// Dispatches to the appropriate screen view based on current screen
    fn view_content<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        match &self.screen {
            Screen::Home => screen::home::view(palette),

            Screen::Search => {
                let state = screen::search::SearchScreenState {
                    query: &self.search_query,
                    results: &self.search_results,
                    expanded: &self.expanded_results,
                    spinner_frame: self.spinner_frame,
                };
                screen::search::view(state, palette)
            }

            Screen::Upload => {
                let state = screen::upload::UploadScreenState {
                    form: &self.upload,
                    spinner_frame: self.spinner_frame,
                };
                screen::upload::view(state, palette)
            }

            Screen::Library => {
                let state = screen::library::LibraryScreenState {
                    library: &self.library,
                    spinner_frame: self.spinner_frame,
                };
                screen::library::view(state, palette)
            }

            Screen::RestaurantDetail { id } => {
                let state = screen::restaurant_detail::RestaurantDetailState {
                    restaurant_id: *id,
                    restaurant: self.current_restaurant.as_ref(),
                    menus: &self.restaurant_menus,
                    spinner_frame: self.spinner_frame,
                };
                screen::restaurant_detail::view(state, palette)
            }

            Screen::MenuVersionDetail { .. } => {
                let state = screen::menu_detail::MenuDetailState {
                    restaurant: self.current_restaurant.as_ref(),
                    detail: &self.menu_version,
                    spinner_frame: self.spinner_frame,
                };
                screen::menu_detail::view(state, palette)
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        // Spinner animation: 100ms interval while any fetch is in flight
        if self.is_fetching() {
            subscriptions.push(
                iced::time::every(std::time::Duration::from_millis(100))
                    .map(|_| Message::SpinnerTick),
            );
        }

        // Window file drops feed the upload screen's PDF picker
        if self.screen == Screen::Upload {
            subscriptions.push(iced::event::listen_with(handle_window_event));
        }

        if subscriptions.is_empty() {
            Subscription::none()
        } else {
            Subscription::batch(subscriptions)
        }
    }

    /// Any fetch in flight anywhere in the app?
    fn is_fetching(&self) -> bool {
        self.search_results.is_loading()
            || self.upload.restaurants.is_loading()
            || self.upload.submit.is_loading()
            || self.library.is_loading()
            || self.restaurant_menus.is_loading()
            || self.menu_version.is_loading()
    }
}

fn handle_window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::MenuFileDropped(path))
        }
        _ => None,
    }
}

/// Native PDF picker; resolves to a validated file or nothing.
async fn pick_menu_file() -> Option<PdfFile> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Choose a PDF menu")
        .add_filter("PDF menu", &["pdf"])
        .pick_file()
        .await?;
    PdfFile::new(handle.file_name(), handle.read().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn app() -> Carta {
        Carta::new().0
    }

    fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            location: "Old Town".into(),
            schedule: "09:00-17:00".into(),
            url: "https://example.com".into(),
            cuisine: "Italian".into(),
        }
    }

    fn hit(name: &str) -> SearchResult {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    fn pdf() -> PdfFile {
        PdfFile::new("menu.pdf".into(), b"%PDF-1.4".to_vec()).unwrap()
    }

    #[test]
    fn stale_search_results_are_discarded() {
        let mut app = app();

        // Two submits: the first response arrives late and must not land.
        let _ = app.update(Message::SubmitSearch);
        let _ = app.update(Message::SubmitSearch);

        let _ = app.update(Message::SearchLoaded(1, Ok(vec![hit("Stale")])));
        assert!(app.search_results.is_loading());

        let _ = app.update(Message::SearchLoaded(2, Ok(vec![hit("Fresh")])));
        let results = app.search_results.ready().unwrap();
        assert_eq!(results[0].name, "Fresh");
    }

    #[test]
    fn result_arriving_after_leaving_the_screen_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Screen::Search));
        let _ = app.update(Message::SubmitSearch);

        // Leaving and re-entering resets the screen's state; the late
        // result is a no-op rather than a crash or a ghost update.
        let _ = app.update(Message::GoBack);
        let _ = app.update(Message::Navigate(Screen::Search));
        let _ = app.update(Message::SearchLoaded(2, Ok(vec![hit("Ghost")])));
        assert!(app.search_results.is_idle());
    }

    #[test]
    fn toggling_one_result_leaves_others_alone() {
        let mut app = app();
        let _ = app.update(Message::ToggleResultExpand(0));
        let _ = app.update(Message::ToggleResultExpand(2));
        assert!(app.expanded_results.contains(&0));
        assert!(!app.expanded_results.contains(&1));
        assert!(app.expanded_results.contains(&2));

        let _ = app.update(Message::ToggleResultExpand(0));
        assert!(!app.expanded_results.contains(&0));
        assert!(app.expanded_results.contains(&2));
    }

    #[test]
    fn restaurant_list_from_a_previous_visit_is_discarded() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Screen::Upload));
        let _ = app.update(Message::GoBack);
        let _ = app.update(Message::Navigate(Screen::Upload));

        // The first visit's fetch settles late; the re-entered form must
        // not accept it.
        let _ = app.update(Message::RestaurantsLoaded(1, Ok(vec![restaurant(1, "Ghost")])));
        assert!(app.upload.restaurants.is_loading());

        let _ = app.update(Message::RestaurantsLoaded(2, Ok(vec![restaurant(1, "Fresh")])));
        assert_eq!(
            app.upload.restaurants.ready().and_then(|r| r.first()).map(|r| r.name.as_str()),
            Some("Fresh")
        );
    }

    #[test]
    fn picking_a_suggestion_fills_the_field_and_clears_the_list() {
        let mut app = app();
        let generation = app.upload.restaurants.begin();
        app.upload.restaurants.resolve::<String>(
            generation,
            Ok(vec![restaurant(1, "Bar Luna"), restaurant(2, "Trattoria")]),
        );

        let _ = app.update(Message::UploadSearchChanged("lun".into()));
        assert_eq!(app.upload.suggestions.len(), 1);

        let _ = app.update(Message::SuggestionPicked("Bar Luna".into()));
        assert_eq!(app.upload.query, "Bar Luna");
        assert!(app.upload.suggestions.is_empty());
    }

    #[test]
    fn failed_create_fails_the_submit_and_keeps_the_file() {
        let mut app = app();
        app.upload.option = RestaurantOption::New;
        app.upload.file = Some(pdf());
        app.upload.new_restaurant = NewRestaurant {
            name: "Bar Luna".into(),
            location: "Old Town".into(),
            schedule: "09:00-17:00".into(),
            url: "https://example.com".into(),
            cuisine: "Italian".into(),
        };

        let _ = app.update(Message::SubmitUpload);
        assert!(app.upload.submit.is_loading());

        let _ = app.update(Message::RestaurantCreated(
            1,
            Err(ApiError::Server {
                status: 500,
                message: "boom".into(),
            }),
        ));
        assert!(app.upload.submit.error().is_some());
        assert!(app.upload.file.is_some());
    }

    #[test]
    fn successful_upload_clears_the_form() {
        let mut app = app();
        app.upload.option = RestaurantOption::New;
        app.upload.file = Some(pdf());
        app.upload.new_restaurant = NewRestaurant {
            name: "Bar Luna".into(),
            location: "Old Town".into(),
            schedule: "09:00-17:00".into(),
            url: "https://example.com".into(),
            cuisine: "Italian".into(),
        };

        let _ = app.update(Message::SubmitUpload);
        let _ = app.update(Message::RestaurantCreated(1, Ok(42)));
        assert!(app.upload.submit.is_loading());

        let _ = app.update(Message::UploadFinished(1, Ok(())));
        assert!(app.upload.submit.ready().is_some());
        assert!(app.upload.file.is_none());
        assert!(!app.upload.new_restaurant.is_complete());
    }

    #[test]
    fn stale_upload_outcome_is_discarded() {
        let mut app = app();
        app.upload.option = RestaurantOption::New;
        app.upload.file = Some(pdf());
        app.upload.new_restaurant = NewRestaurant {
            name: "Bar Luna".into(),
            location: "Old Town".into(),
            schedule: "09:00-17:00".into(),
            url: "https://example.com".into(),
            cuisine: "Italian".into(),
        };

        let _ = app.update(Message::SubmitUpload);
        let _ = app.update(Message::RestaurantCreated(
            7,
            Err(ApiError::Network("late".into())),
        ));
        // Wrong generation: the submit stays in flight.
        assert!(app.upload.submit.is_loading());
    }

    #[test]
    fn opening_a_restaurant_hands_the_entity_off() {
        let mut app = app();
        let _ = app.update(Message::OpenRestaurant(restaurant(5, "Bar Luna")));
        assert_eq!(app.screen, Screen::RestaurantDetail { id: 5 });
        assert_eq!(app.current_restaurant.as_ref().map(|r| r.id), Some(5));
        assert!(app.restaurant_menus.is_loading());
    }

    #[test]
    fn deep_navigation_without_handoff_drops_mismatched_entity() {
        let mut app = app();
        app.current_restaurant = Some(restaurant(5, "Bar Luna"));

        let _ = app.update(Message::Navigate(Screen::RestaurantDetail { id: 9 }));
        assert!(app.current_restaurant.is_none());
        assert!(app.restaurant_menus.is_loading());
    }

    #[test]
    fn go_back_returns_to_the_previous_screen() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Screen::Library));
        let _ = app.update(Message::Navigate(Screen::Search));
        let _ = app.update(Message::GoBack);
        assert_eq!(app.screen, Screen::Library);
        let _ = app.update(Message::GoBack);
        assert_eq!(app.screen, Screen::Home);
    }
}
