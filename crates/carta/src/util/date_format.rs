use chrono::{DateTime, NaiveDate};

/// Marker rendered for unparseable dates.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO-ish date string as a long date (e.g., "15 January 2024").
/// Unparseable input renders the literal marker rather than failing.
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_date() {
        assert_eq!(format_long_date("2024-01-15"), "15 January 2024");
    }

    #[test]
    fn formats_timestamped_date() {
        assert_eq!(
            format_long_date("2024-03-05T10:30:00Z"),
            "5 March 2024"
        );
        assert_eq!(
            format_long_date("2024-03-05 10:30:00"),
            "5 March 2024"
        );
    }

    #[test]
    fn invalid_input_renders_marker() {
        assert_eq!(format_long_date(""), INVALID_DATE);
        assert_eq!(format_long_date("yesterday"), INVALID_DATE);
        assert_eq!(format_long_date("2024-13-40"), INVALID_DATE);
    }
}
