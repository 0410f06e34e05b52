use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Restaurant as returned by the backend JSON surface.
///
/// `id` is the only stable join key across screens; every drill-down
/// navigation either carries the full struct or re-fetches by this id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub cuisine: String,
}

impl Restaurant {
    pub fn opening_hours(&self) -> Option<OpeningHours> {
        OpeningHours::parse(&self.schedule)
    }

    /// Open at `now`? Unparseable schedules report closed.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        self.opening_hours().is_some_and(|hours| hours.contains(now))
    }
}

/// Fields for the create-restaurant request. The backend requires all of
/// them; the client only checks presence before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
    pub schedule: String,
    pub url: String,
    pub cuisine: String,
}

impl NewRestaurant {
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.location,
            &self.schedule,
            &self.url,
            &self.cuisine,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Daily opening window parsed from a "HH:MM-HH:MM" schedule string.
///
/// The window is same-day only: a schedule whose close time precedes its
/// open time (crossing midnight) never reports open. Known limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn parse(schedule: &str) -> Option<Self> {
        let (open, close) = schedule.trim().split_once('-')?;
        let open = NaiveTime::parse_from_str(open.trim(), "%H:%M").ok()?;
        let close = NaiveTime::parse_from_str(close.trim(), "%H:%M").ok()?;
        Some(Self { open, close })
    }

    /// Open iff `open <= now < close`.
    pub fn contains(&self, now: NaiveTime) -> bool {
        now >= self.open && now < self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn parses_plain_schedule() {
        let hours = OpeningHours::parse("09:00-17:00").unwrap();
        assert_eq!(hours.open, at(9, 0));
        assert_eq!(hours.close, at(17, 0));
    }

    #[test]
    fn parses_schedule_with_whitespace() {
        let hours = OpeningHours::parse(" 08:30 - 22:15 ").unwrap();
        assert_eq!(hours.open, at(8, 30));
        assert_eq!(hours.close, at(22, 15));
    }

    #[test]
    fn rejects_malformed_schedules() {
        assert!(OpeningHours::parse("").is_none());
        assert!(OpeningHours::parse("always open").is_none());
        assert!(OpeningHours::parse("9am-5pm").is_none());
        assert!(OpeningHours::parse("25:00-26:00").is_none());
    }

    #[test]
    fn open_within_window_only() {
        let hours = OpeningHours::parse("09:00-17:00").unwrap();
        assert!(hours.contains(at(12, 0)));
        assert!(!hours.contains(at(8, 0)));
        assert!(!hours.contains(at(18, 0)));
    }

    #[test]
    fn open_is_inclusive_close_is_exclusive() {
        let hours = OpeningHours::parse("09:00-17:00").unwrap();
        assert!(hours.contains(at(9, 0)));
        assert!(!hours.contains(at(17, 0)));
    }

    #[test]
    fn overnight_schedule_reports_closed() {
        // Same-day window only: 22:00-02:00 never contains any time.
        let hours = OpeningHours::parse("22:00-02:00").unwrap();
        assert!(!hours.contains(at(23, 0)));
        assert!(!hours.contains(at(1, 0)));
    }

    #[test]
    fn restaurant_with_bad_schedule_is_closed() {
        let restaurant = Restaurant {
            id: 1,
            name: "Trattoria".into(),
            location: String::new(),
            schedule: "whenever".into(),
            url: String::new(),
            cuisine: String::new(),
        };
        assert!(!restaurant.is_open_at(at(12, 0)));
    }

    #[test]
    fn new_restaurant_completeness_requires_every_field() {
        let mut fields = NewRestaurant {
            name: "Trattoria".into(),
            location: "Via Roma 1".into(),
            schedule: "09:00-17:00".into(),
            url: "https://example.com".into(),
            cuisine: "Italian".into(),
        };
        assert!(fields.is_complete());

        fields.cuisine = "   ".into();
        assert!(!fields.is_complete());
    }

    #[test]
    fn restaurant_decodes_with_missing_optional_fields() {
        let restaurant: Restaurant =
            serde_json::from_value(serde_json::json!({ "id": 7, "name": "Bar Luna" })).unwrap();
        assert_eq!(restaurant.id, 7);
        assert!(restaurant.schedule.is_empty());
    }
}
