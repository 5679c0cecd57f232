use std::collections::BTreeSet;

use super::model::SightingDataset;

// ---------------------------------------------------------------------------
// Filter criteria: year range + selected shapes
// ---------------------------------------------------------------------------

/// User-selected restriction, immutable per evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive `(min, max)` year bounds.
    pub year_range: (i32, i32),
    /// Selected shape labels. An empty set matches nothing.
    pub shapes: BTreeSet<String>,
}

/// Default year selection, intersected with the data's bounds.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1990, 2014);

/// Default shape selection, intersected with the shapes present.
pub const DEFAULT_SHAPES: [&str; 3] = ["disk", "light", "triangle"];

/// Initial [`FilterCriteria`] for a freshly loaded dataset.
///
/// The `(1990, 2014)` default range is clamped into the data's year bounds;
/// when it does not intersect the data at all, the full range is used.
/// Default shapes absent from the data are silently dropped.
pub fn default_criteria(dataset: &SightingDataset) -> FilterCriteria {
    let year_range = match dataset.year_bounds() {
        Some((min, max)) if DEFAULT_YEAR_RANGE.0 <= max && DEFAULT_YEAR_RANGE.1 >= min => (
            DEFAULT_YEAR_RANGE.0.clamp(min, max),
            DEFAULT_YEAR_RANGE.1.clamp(min, max),
        ),
        Some((min, max)) => (min, max),
        None => (0, 0),
    };

    let shapes = DEFAULT_SHAPES
        .iter()
        .filter(|want| dataset.shapes.iter().any(|have| have == *want))
        .map(|s| s.to_string())
        .collect();

    FilterCriteria { year_range, shapes }
}

/// Return indices of sightings matching the criteria, input order preserved.
///
/// A sighting matches when its year lies within the inclusive range and its
/// shape is in the selected set. An empty shape set or an inverted year
/// range (`min > max`) yields an empty result.
pub fn filtered_indices(dataset: &SightingDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let (min_year, max_year) = criteria.year_range;
    if min_year > max_year || criteria.shapes.is_empty() {
        return Vec::new();
    }

    dataset
        .sightings
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            (min_year..=max_year).contains(&s.year) && criteria.shapes.contains(&s.shape)
        })
        .map(|(i, _)| i)
        .collect()
}
