use std::path::PathBuf;

use carta_types::{MenuVersionDetail, Restaurant, RestaurantMenus, SearchResult};

use crate::api::{ApiError, LibraryEntry, PdfFile};
use crate::screen::Screen;

/// Which restaurant a menu upload is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestaurantOption {
    /// Pick an existing restaurant via the suggestion field
    #[default]
    Existing,
    /// Create a new restaurant first, then upload with its id
    New,
}

/// Top-level application message enum.
///
/// All user interactions and async operation results flow through this
/// enum. Completion messages carry the generation token handed out by the
/// screen's [`Remote`](crate::remote::Remote) so stale results are
/// discarded instead of clobbering fresher state.
#[derive(Debug, Clone)]
pub enum Message {
    // ========== Navigation ==========
    /// Navigate to a specific screen
    Navigate(Screen),
    /// Go back to previous screen in history
    GoBack,

    // ========== Animation ==========
    /// Animation tick for spinners (100ms interval)
    SpinnerTick,

    // ========== Search ==========
    /// Search query input changed
    SearchQueryChanged(String),
    /// Submit the search form (empty queries round-trip too)
    SubmitSearch,
    /// Search results finished loading
    SearchLoaded(u64, Result<Vec<SearchResult>, ApiError>),
    /// Toggle expansion of one result card
    ToggleResultExpand(usize),

    // ========== Upload ==========
    /// Restaurant list for the suggestion field finished loading
    RestaurantsLoaded(u64, Result<Vec<Restaurant>, ApiError>),
    /// Existing/new restaurant choice changed
    UploadOptionChanged(RestaurantOption),
    /// Restaurant suggestion query changed
    UploadSearchChanged(String),
    /// A suggestion was picked (fills the field, clears suggestions)
    SuggestionPicked(String),
    /// New restaurant form: name input changed
    NewRestaurantNameChanged(String),
    /// New restaurant form: location input changed
    NewRestaurantLocationChanged(String),
    /// New restaurant form: schedule input changed
    NewRestaurantScheduleChanged(String),
    /// New restaurant form: url input changed
    NewRestaurantUrlChanged(String),
    /// New restaurant form: cuisine input changed
    NewRestaurantCuisineChanged(String),
    /// Open the native file dialog for a PDF menu
    PickMenuFile,
    /// File dialog or drop handler produced a (validated) file, or nothing
    MenuFileSelected(Option<PdfFile>),
    /// A file was dropped on the window while the upload screen is active
    MenuFileDropped(PathBuf),
    /// Submit the upload form
    SubmitUpload,
    /// Create-restaurant step finished (new-restaurant path only)
    RestaurantCreated(u64, Result<i64, ApiError>),
    /// Menu upload finished
    UploadFinished(u64, Result<(), ApiError>),

    // ========== Library ==========
    /// Library aggregation (restaurants + price summaries) finished
    LibraryLoaded(u64, Result<Vec<LibraryEntry>, ApiError>),
    /// Open a restaurant's detail screen, handing off the fetched entity
    OpenRestaurant(Restaurant),

    // ========== Restaurant detail ==========
    /// Menu version list finished loading
    MenusLoaded(u64, Result<RestaurantMenus, ApiError>),
    /// Open a menu version's detail screen with the restaurant handed off
    OpenMenuVersion {
        id: i64,
        restaurant: Option<Restaurant>,
    },

    // ========== Menu version detail ==========
    /// Menu version detail finished loading
    MenuVersionLoaded(u64, Result<MenuVersionDetail, ApiError>),
}
