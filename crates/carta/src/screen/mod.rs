//! Screen modules for the Carta application.
//!
//! Each screen is a separate module with its own view function over state
//! borrowed from the main application. The Screen enum provides routing
//! between screens; drill-down variants carry the backend id so a screen
//! reached without a handed-off entity can fetch by id instead.

pub mod home;
pub mod library;
pub mod menu_detail;
pub mod restaurant_detail;
pub mod search;
pub mod upload;

/// Application screens for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen with the three navigation cards
    Home,
    /// Free-text allergy/ingredient search
    Search,
    /// Menu upload form (existing or new restaurant)
    Upload,
    /// Restaurant library with price summaries
    Library,
    /// Single restaurant with its menu versions
    RestaurantDetail { id: i64 },
    /// Single menu version with its food items
    MenuVersionDetail { id: i64 },
}
