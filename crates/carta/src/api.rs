//! Async functions for the menu backend HTTP API.
//!
//! One function per backend operation, each taking the API base URL plus
//! plain arguments. All requests and responses are JSON except the
//! multipart menu upload. Failures are typed ([`ApiError`]) and callers
//! degrade them to neutral UI states; nothing here panics on a bad
//! response.

use std::path::PathBuf;

use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

use carta_types::{
    AvgPriceSummary, MenuVersionDetail, NewRestaurant, Restaurant, RestaurantMenus, SearchResult,
};

/// Failure taxonomy for backend calls.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request could not complete at all.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status or an error payload.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The response arrived but did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A picked menu file, validated as PDF before it can be sent.
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub name: String,
    bytes: Vec<u8>,
}

impl PdfFile {
    const PDF_MAGIC: &'static [u8] = b"%PDF";

    /// Accepts the bytes only when they carry the PDF magic.
    pub fn new(name: String, bytes: Vec<u8>) -> Option<Self> {
        bytes
            .starts_with(Self::PDF_MAGIC)
            .then_some(Self { name, bytes })
    }

    /// Read and validate a file from disk (file dialog or window drop).
    pub async fn read(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let bytes = tokio::fs::read(&path).await.ok()?;
        Self::new(name, bytes)
    }
}

/// Restaurant paired with its price summary; produced by the library
/// aggregation and consumed by the library screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry {
    pub restaurant: Restaurant,
    pub prices: AvgPriceSummary,
}

// =============================================================================
// Core request helpers
// =============================================================================

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

async fn get_json(base: &str, path: &str) -> ApiResult<Value> {
    let client = reqwest::Client::new();
    let response = client
        .get(endpoint(base, path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn post_json(base: &str, path: &str, body: Value) -> ApiResult<Value> {
    let client = reqwest::Client::new();
    let response = client
        .post(endpoint(base, path))
        .json(&body)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn read_json(response: reqwest::Response) -> ApiResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Decode a JSON value with logging on failure
fn decode_logged<T: serde::de::DeserializeOwned>(value: Value, context: &str) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| {
        error!(context = context, error = %e, "failed to decode backend response");
        ApiError::Malformed(format!("{}: {}", context, e))
    })
}

// =============================================================================
// Backend operations
// =============================================================================

/// Free-text allergy/ingredient search. An empty query is dispatched as-is;
/// the backend decides what it means.
pub async fn search(base: String, query: String) -> ApiResult<Vec<SearchResult>> {
    let value = post_json(&base, "/api/q/", json!({ "query": query })).await?;
    Ok(parse_search_results(&value))
}

/// Coerce the `results` field to a list of hits. A missing or non-array
/// field renders as no results rather than an error, and individual
/// entries that fail to decode are skipped.
pub fn parse_search_results(value: &Value) -> Vec<SearchResult> {
    match value.get("results") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// List every known restaurant.
pub async fn list_restaurants(base: String) -> ApiResult<Vec<Restaurant>> {
    let value = get_json(&base, "/api/get-all-restaurants/").await?;
    let restaurants = value
        .get("restaurants")
        .cloned()
        .unwrap_or(Value::Array(Vec::new()));
    decode_logged(restaurants, "get-all-restaurants")
}

/// Create a restaurant and return its id.
pub async fn create_restaurant(base: String, fields: NewRestaurant) -> ApiResult<i64> {
    let body = serde_json::to_value(&fields)
        .map_err(|e| ApiError::Malformed(format!("create-restaurant request: {}", e)))?;
    let value = post_json(&base, "/api/create-restaurant/", body).await?;
    value
        .pointer("/restaurant/id")
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::Malformed("create-restaurant: missing restaurant id".to_string()))
}

/// Upload a PDF menu for a restaurant.
pub async fn upload_menu(base: String, file: PdfFile, restaurant_id: i64) -> ApiResult<()> {
    let part = reqwest::multipart::Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str("application/pdf")
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("restaurant_id", restaurant_id.to_string());

    let client = reqwest::Client::new();
    let response = client
        .post(endpoint(&base, "/api/upload-menu/"))
        .multipart(form)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }
    Ok(())
}

/// Price summary for one restaurant. `None` on any failure or an `{error}`
/// payload; callers drop the restaurant from price-dependent listings.
pub async fn get_avg_prices(base: String, restaurant_id: i64) -> Option<AvgPriceSummary> {
    let value = post_json(
        &base,
        "/api/get-summarized-avg-prices/",
        json!({ "restaurant_id": restaurant_id }),
    )
    .await
    .ok()?;
    parse_avg_prices(&value)
}

pub fn parse_avg_prices(value: &Value) -> Option<AvgPriceSummary> {
    if value.get("error").is_some() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

/// Menu version header plus its food items.
pub async fn get_menu_version(base: String, menu_version_id: i64) -> ApiResult<MenuVersionDetail> {
    let value = post_json(
        &base,
        "/api/get-menu-version/",
        json!({ "menu_version_id": menu_version_id }),
    )
    .await?;
    decode_logged(value, "get-menu-version")
}

/// Restaurant header fields plus its menu version list (newest first).
pub async fn get_restaurant_menus(base: String, restaurant_id: i64) -> ApiResult<RestaurantMenus> {
    let value = post_json(
        &base,
        "/api/get-menus-restaurant/",
        json!({ "restaurant_id": restaurant_id }),
    )
    .await?;
    decode_logged(value, "get-menus-restaurant")
}

// =============================================================================
// Library aggregation
// =============================================================================

/// Fetch the restaurant list, then every price summary concurrently, and
/// join the outcomes by position. `join_all` settles all sub-fetches and
/// preserves request order, so one failed summary neither aborts nor
/// reorders the others.
pub async fn load_library(base: String) -> ApiResult<Vec<LibraryEntry>> {
    let restaurants = list_restaurants(base.clone()).await?;
    let fetches = restaurants
        .iter()
        .map(|restaurant| get_avg_prices(base.clone(), restaurant.id));
    let outcomes = futures::future::join_all(fetches).await;
    Ok(join_priced(restaurants, outcomes))
}

/// Positional join of restaurants with their settled price outcomes,
/// keeping only the entries whose summary fetch succeeded.
pub fn join_priced(
    restaurants: Vec<Restaurant>,
    outcomes: Vec<Option<AvgPriceSummary>>,
) -> Vec<LibraryEntry> {
    restaurants
        .into_iter()
        .zip(outcomes)
        .filter_map(|(restaurant, prices)| prices.map(|prices| LibraryEntry { restaurant, prices }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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

    fn summary(avg: f64) -> AvgPriceSummary {
        serde_json::from_value(json!({
            "avg_food_price": avg,
            "min_food_price": avg - 1.0,
            "max_food_price": avg + 1.0,
        }))
        .unwrap()
    }

    #[test]
    fn search_results_tolerate_non_array_payloads() {
        assert!(parse_search_results(&json!({ "results": "nope" })).is_empty());
        assert!(parse_search_results(&json!({ "results": null })).is_empty());
        assert!(parse_search_results(&json!({})).is_empty());
        assert!(parse_search_results(&json!([])).is_empty());
    }

    #[test]
    fn search_results_decode_valid_hits() {
        let value = json!({
            "results": [
                { "name": "Bar Luna", "foods": [{ "food_name": "Margherita" }] },
                { "name": "Trattoria", "foods": [] },
            ],
        });
        let hits = parse_search_results(&value);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].foods[0].name, "Margherita");
    }

    #[test]
    fn search_results_skip_undecodable_entries() {
        let value = json!({ "results": [{ "name": "ok" }, 42] });
        let hits = parse_search_results(&value);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ok");
    }

    #[test]
    fn avg_prices_error_payload_is_none() {
        assert!(parse_avg_prices(&json!({ "error": "no menu yet" })).is_none());
        assert!(parse_avg_prices(&json!({ "unexpected": true })).is_none());
    }

    #[test]
    fn avg_prices_decode_valid_payload() {
        let prices = parse_avg_prices(&json!({
            "avg_food_price": "12.50",
            "min_food_price": 4,
            "max_food_price": 28,
        }))
        .unwrap();
        assert_eq!(prices.avg_food_price, 12.5);
    }

    #[test]
    fn join_keeps_only_priced_restaurants_in_order() {
        let restaurants = vec![
            restaurant(1, "First"),
            restaurant(2, "Second"),
            restaurant(3, "Third"),
        ];
        let outcomes = vec![Some(summary(10.0)), None, Some(summary(20.0))];

        let entries = join_priced(restaurants, outcomes);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].restaurant.name, "First");
        assert_eq!(entries[1].restaurant.name, "Third");
    }

    #[test]
    fn join_with_all_failures_is_empty() {
        let entries = join_priced(vec![restaurant(1, "Only")], vec![None]);
        assert!(entries.is_empty());
    }

    #[test]
    fn pdf_magic_is_enforced() {
        assert!(PdfFile::new("menu.pdf".into(), b"%PDF-1.7 ...".to_vec()).is_some());
        assert!(PdfFile::new("menu.pdf".into(), b"<html>".to_vec()).is_none());
        assert!(PdfFile::new("menu.pdf".into(), Vec::new()).is_none());
    }
}
