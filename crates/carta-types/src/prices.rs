use serde::{Deserialize, Deserializer};

/// Per-restaurant price aggregate fetched on demand for the library view.
/// Never cached beyond the screen that requested it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvgPriceSummary {
    #[serde(deserialize_with = "flexible_price")]
    pub avg_food_price: f64,
    #[serde(deserialize_with = "flexible_price")]
    pub min_food_price: f64,
    #[serde(deserialize_with = "flexible_price")]
    pub max_food_price: f64,
}

/// Currency formatting guard: unknown prices (absent, zero, negative, or
/// non-finite) must not render as currency.
pub fn format_price(price: f64) -> Option<String> {
    (price.is_finite() && price > 0.0).then(|| format!("${price:.2}"))
}

/// Decode a price that the backend may encode as a number, a decimal
/// string, or null. Anything unreadable degrades to 0.0 (price unknown)
/// rather than failing the whole payload.
pub fn flexible_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_numeric_prices() {
        let summary: AvgPriceSummary = serde_json::from_value(json!({
            "avg_food_price": 12.5,
            "min_food_price": 4,
            "max_food_price": 28.0,
        }))
        .unwrap();
        assert_eq!(summary.avg_food_price, 12.5);
        assert_eq!(summary.min_food_price, 4.0);
    }

    #[test]
    fn decodes_decimal_string_prices() {
        // Backends with decimal columns serialize prices as strings.
        let summary: AvgPriceSummary = serde_json::from_value(json!({
            "avg_food_price": "12.50",
            "min_food_price": "4.00",
            "max_food_price": "28.00",
        }))
        .unwrap();
        assert_eq!(summary.avg_food_price, 12.5);
        assert_eq!(summary.max_food_price, 28.0);
    }

    #[test]
    fn unreadable_price_degrades_to_unknown() {
        let summary: AvgPriceSummary = serde_json::from_value(json!({
            "avg_food_price": null,
            "min_food_price": "n/a",
            "max_food_price": 9.0,
        }))
        .unwrap();
        assert_eq!(summary.avg_food_price, 0.0);
        assert_eq!(summary.min_food_price, 0.0);
        assert_eq!(summary.max_food_price, 9.0);
    }

    #[test]
    fn format_price_skips_unknown_values() {
        assert_eq!(format_price(8.5).as_deref(), Some("$8.50"));
        assert_eq!(format_price(0.0), None);
        assert_eq!(format_price(-1.0), None);
        assert_eq!(format_price(f64::NAN), None);
    }
}
