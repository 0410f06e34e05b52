//! Search result types for the allergy/ingredient query endpoint.

use serde::Deserialize;

use crate::menu::FoodItem;

/// One search hit: a restaurant header plus the food items that matched
/// the query. Ephemeral; never persisted or joined with other screens.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_hit_with_matched_foods() {
        let hit: SearchResult = serde_json::from_value(json!({
            "name": "Bar Luna",
            "location": "Old Town",
            "url": "https://example.com",
            "foods": [
                { "food_name": "Margherita", "food_price": 8.5, "ingredients": ["tomato"] },
            ],
        }))
        .unwrap();
        assert_eq!(hit.foods.len(), 1);
        assert_eq!(hit.foods[0].name, "Margherita");
    }

    #[test]
    fn decodes_hit_without_foods() {
        let hit: SearchResult = serde_json::from_value(json!({ "name": "Bar Luna" })).unwrap();
        assert!(hit.foods.is_empty());
    }
}
