use chrono::{DateTime, NaiveDate, Utc};

/// Timestamp rendering for table cells.
pub fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Date rendering for table cells and `<input type="date">` values.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the value of an `<input type="date">`; empty means unset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formats_or_dashes() {
        let dt = DateTime::parse_from_rfc3339("2026-01-05T10:20:30Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(Some(dt)), "2026-01-05 10:20:30");
        assert_eq!(format_timestamp(None), "-");
    }

    #[test]
    fn date_round_trips_through_input_value() {
        let date = parse_date("2026-09-01");
        assert!(date.is_some());
        assert_eq!(format_date(date), "2026-09-01");
        assert_eq!(parse_date(""), None);
        assert_eq!(format_date(None), "");
    }
}
