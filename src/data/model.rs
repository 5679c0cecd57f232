use chrono::NaiveDateTime;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawSighting – one row as read from the input file
// ---------------------------------------------------------------------------

/// A sighting row before any coercion: every field is kept as text so the
/// cleaner can decide what survives. Column names follow the NUFORC export;
/// extra columns in the input are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSighting {
    /// Combined date + time, e.g. `6/24/1995 21:00`.
    #[serde(rename = "Date_time")]
    pub date_time: String,
    pub city: String,
    #[serde(rename = "state/province", default)]
    pub state: Option<String>,
    /// Reported object shape, e.g. `disk`. May be empty.
    #[serde(rename = "UFO_shape", default)]
    pub shape: String,
    #[serde(default)]
    pub description: String,
    /// Numeric-like text; malformed values are common.
    pub latitude: String,
    pub longitude: String,
}

// ---------------------------------------------------------------------------
// Sighting – a row that passed cleaning
// ---------------------------------------------------------------------------

/// A sighting whose coordinates and timestamp all parsed. Rows failing any
/// of the three coercions never become a `Sighting`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    pub city: String,
    pub state: Option<String>,
    pub shape: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: NaiveDateTime,
    /// Year component of `timestamp`.
    pub year: i32,
}

// ---------------------------------------------------------------------------
// SightingDataset – the complete cleaned dataset
// ---------------------------------------------------------------------------

/// The cleaned table with pre-computed lookup data for the controls.
#[derive(Debug, Clone)]
pub struct SightingDataset {
    /// All cleaned sightings, input order preserved.
    pub sightings: Vec<Sighting>,
    /// Distinct non-empty shape labels in order of first appearance.
    pub shapes: Vec<String>,
}

impl SightingDataset {
    /// Build the shape index from cleaned rows.
    pub fn from_sightings(sightings: Vec<Sighting>) -> Self {
        let mut shapes: Vec<String> = Vec::new();
        for s in &sightings {
            if !s.shape.is_empty() && !shapes.iter().any(|have| have == &s.shape) {
                shapes.push(s.shape.clone());
            }
        }
        SightingDataset { sightings, shapes }
    }

    /// Minimum and maximum year present, `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.sightings.iter().map(|s| s.year).min()?;
        let max = self.sightings.iter().map(|s| s.year).max()?;
        Some((min, max))
    }

    /// Number of sightings.
    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sighting(shape: &str, year: i32) -> Sighting {
        let timestamp = NaiveDate::from_ymd_opt(year, 6, 1)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        Sighting {
            city: "roswell".into(),
            state: Some("nm".into()),
            shape: shape.into(),
            description: "bright object".into(),
            latitude: 33.39,
            longitude: -104.52,
            timestamp,
            year,
        }
    }

    #[test]
    fn shapes_are_first_seen_order_without_duplicates() {
        let ds = SightingDataset::from_sightings(vec![
            sighting("light", 1999),
            sighting("disk", 1997),
            sighting("light", 2001),
            sighting("", 2002),
            sighting("triangle", 2003),
        ]);
        assert_eq!(ds.shapes, vec!["light", "disk", "triangle"]);
    }

    #[test]
    fn year_bounds_span_the_data() {
        let ds = SightingDataset::from_sightings(vec![
            sighting("disk", 1965),
            sighting("light", 2010),
            sighting("disk", 1984),
        ]);
        assert_eq!(ds.year_bounds(), Some((1965, 2010)));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = SightingDataset::from_sightings(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.year_bounds(), None);
        assert!(ds.shapes.is_empty());
    }
}
