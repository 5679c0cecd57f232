use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::model::{RawSighting, Sighting};

// ---------------------------------------------------------------------------
// Row cleaning: coerce coordinates + timestamp, drop what fails
// ---------------------------------------------------------------------------

/// Timestamp layouts accepted for the `Date_time` column. The first entry is
/// the NUFORC export layout; the rest cover re-exports from other tools.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only layouts, interpreted as midnight.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Coerce a coordinate cell to a finite `f64`.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a `Date_time` cell against the accepted layouts.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Clean a single row. Returns `None` when latitude, longitude, or timestamp
/// fails to coerce; there is no imputation.
pub fn clean_record(raw: RawSighting) -> Option<Sighting> {
    let latitude = parse_coordinate(&raw.latitude)?;
    let longitude = parse_coordinate(&raw.longitude)?;
    let timestamp = parse_timestamp(&raw.date_time)?;

    Some(Sighting {
        city: raw.city,
        state: raw.state,
        shape: raw.shape,
        description: raw.description,
        latitude,
        longitude,
        year: timestamp.year(),
        timestamp,
    })
}

/// Clean a raw table. Input order is preserved minus the dropped rows.
pub fn clean_records(raw: Vec<RawSighting>) -> Vec<Sighting> {
    raw.into_iter().filter_map(clean_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date_time: &str, latitude: &str, longitude: &str) -> RawSighting {
        RawSighting {
            date_time: date_time.into(),
            city: "phoenix".into(),
            state: Some("az".into()),
            shape: "light".into(),
            description: "v-shaped formation".into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    #[test]
    fn surviving_rows_are_fully_coerced() {
        let rows = vec![
            raw("3/13/1997 20:30", "33.4484", "-112.0740"),
            raw("3/13/1997 20:45", " 33.6 ", " -111.9 "),
        ];
        let clean = clean_records(rows);
        assert_eq!(clean.len(), 2);
        for s in &clean {
            assert!(s.latitude.is_finite());
            assert!(s.longitude.is_finite());
            assert_eq!(s.year, s.timestamp.year());
            assert_eq!(s.year, 1997);
        }
    }

    #[test]
    fn bad_latitude_drops_the_row() {
        let rows = vec![
            raw("6/1/2000 22:00", "not-a-number", "-112.0"),
            raw("6/1/2000 22:00", "33.4", "-112.0"),
        ];
        let clean = clean_records(rows);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].latitude, 33.4);
    }

    #[test]
    fn bad_timestamp_drops_the_row() {
        // NUFORC exports contain 24:00 times.
        let rows = vec![
            raw("10/10/1998 24:00", "47.6", "-122.3"),
            raw("", "47.6", "-122.3"),
            raw("10/10/1998 23:59", "47.6", "-122.3"),
        ];
        let clean = clean_records(rows);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean[0].year, 1998);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("-33.9"), Some(-33.9));
    }

    #[test]
    fn date_only_rows_parse_at_midnight() {
        let ts = parse_timestamp("7/4/1947").unwrap();
        assert_eq!(ts.year(), 1947);
        assert_eq!(ts.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn cleaning_is_idempotent() {
        let rows = vec![
            raw("3/13/1997 20:30", "33.4484", "-112.0740"),
            raw("bad", "33.0", "-112.0"),
            raw("1/1/2005 03:15", "61.2", "-149.9"),
        ];
        let once = clean_records(rows);

        // Render the clean table back to raw text and clean it again.
        let rendered: Vec<RawSighting> = once
            .iter()
            .map(|s| RawSighting {
                date_time: s.timestamp.format("%m/%d/%Y %H:%M").to_string(),
                city: s.city.clone(),
                state: s.state.clone(),
                shape: s.shape.clone(),
                description: s.description.clone(),
                latitude: s.latitude.to_string(),
                longitude: s.longitude.to_string(),
            })
            .collect();
        let twice = clean_records(rendered);
        assert_eq!(once, twice);
    }
}
