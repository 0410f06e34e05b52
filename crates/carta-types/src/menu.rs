use serde::{Deserialize, Serialize};

use crate::prices::flexible_price;

/// A dated snapshot of a restaurant's menu. The backend returns versions
/// newest first; index 0 is the latest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuVersion {
    #[serde(default, alias = "menu_version_id")]
    pub id: i64,
    #[serde(default)]
    pub creation_date: String,
}

impl MenuVersion {
    /// Date portion ("YYYY-MM-DD") of the creation date, as shown in
    /// version lists. Falls back to the raw string for short values.
    pub fn creation_day(&self) -> &str {
        self.creation_date.get(..10).unwrap_or(&self.creation_date)
    }
}

/// A single dish entry. Wire fields are `food_`-prefixed; a missing or
/// zero price means "price unknown" and must not render as currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default, alias = "food_id")]
    pub id: i64,
    #[serde(alias = "food_name")]
    pub name: String,
    #[serde(default, alias = "food_description")]
    pub description: Option<String>,
    #[serde(default, alias = "food_price", deserialize_with = "flexible_price")]
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Menu version detail response: the version header plus its food items.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuVersionDetail {
    pub menu_version: MenuVersion,
    #[serde(default)]
    pub food_items: Vec<FoodItem>,
}

/// Restaurant detail response: header fields plus the menu version list.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantMenus {
    #[serde(default, alias = "restaurant_name")]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub menu_versions: Vec<MenuVersion>,
}
