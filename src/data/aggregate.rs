use std::collections::{BTreeMap, HashMap};

use super::model::SightingDataset;

// ---------------------------------------------------------------------------
// Aggregations over a filtered view
// ---------------------------------------------------------------------------

/// Number of entries kept in the shape ranking.
pub const TOP_SHAPES: usize = 10;

/// Count sightings per shape over the given view, ranked by count
/// descending. Ties keep the order in which each shape was first seen in the
/// view (stable sort). At most [`TOP_SHAPES`] entries are returned.
pub fn shape_counts(dataset: &SightingDataset, indices: &[usize]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for &i in indices {
        let shape = &dataset.sightings[i].shape;
        match counts.get_mut(shape) {
            Some(n) => *n += 1,
            None => {
                counts.insert(shape.clone(), 1);
                order.push(shape.clone());
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|shape| {
            let n = counts[&shape];
            (shape, n)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_SHAPES);
    ranked
}

/// Count sightings per year over the given view, ascending by year. Years
/// with no matching rows do not appear.
pub fn year_counts(dataset: &SightingDataset, indices: &[usize]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.sightings[i].year).or_default() += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use crate::data::model::Sighting;
    use chrono::NaiveDate;

    fn sighting(shape: &str, year: i32) -> Sighting {
        let timestamp = NaiveDate::from_ymd_opt(year, 8, 20)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        Sighting {
            city: "rachel".into(),
            state: Some("nv".into()),
            shape: shape.into(),
            description: "pulsing glow".into(),
            latitude: 37.64,
            longitude: -115.74,
            timestamp,
            year,
        }
    }

    fn view(ds: &SightingDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn disk_disk_light_scenario() {
        let ds = SightingDataset::from_sightings(vec![
            sighting("disk", 1995),
            sighting("disk", 1995),
            sighting("light", 2000),
        ]);
        let criteria = FilterCriteria {
            year_range: (1995, 2000),
            shapes: ["disk".to_string(), "light".to_string()].into_iter().collect(),
        };
        let indices = filtered_indices(&ds, &criteria);
        assert_eq!(indices.len(), 3);
        assert_eq!(
            shape_counts(&ds, &indices),
            vec![("disk".to_string(), 2), ("light".to_string(), 1)]
        );
        assert_eq!(year_counts(&ds, &indices), vec![(1995, 2), (2000, 1)]);
    }

    #[test]
    fn shape_counts_sorted_non_increasing_and_capped() {
        let mut rows = Vec::new();
        // 12 distinct shapes with counts 12, 11, ..., 1.
        for (rank, shape) in (0..12).map(|i| (i, format!("shape{i:02}"))) {
            for _ in 0..(12 - rank) {
                rows.push(sighting(&shape, 1990));
            }
        }
        let ds = SightingDataset::from_sightings(rows);
        let counts = shape_counts(&ds, &view(&ds));

        assert_eq!(counts.len(), TOP_SHAPES);
        assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(counts[0], ("shape00".to_string(), 12));
    }

    #[test]
    fn fewer_than_ten_shapes_are_all_returned() {
        let ds = SightingDataset::from_sightings(vec![
            sighting("disk", 1990),
            sighting("oval", 1991),
        ]);
        assert_eq!(shape_counts(&ds, &view(&ds)).len(), 2);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ds = SightingDataset::from_sightings(vec![
            sighting("cigar", 1990),
            sighting("chevron", 1990),
            sighting("cigar", 1991),
            sighting("chevron", 1991),
            sighting("sphere", 1992),
        ]);
        assert_eq!(
            shape_counts(&ds, &view(&ds)),
            vec![
                ("cigar".to_string(), 2),
                ("chevron".to_string(), 2),
                ("sphere".to_string(), 1),
            ]
        );
    }

    #[test]
    fn year_counts_are_strictly_increasing_and_complete() {
        let ds = SightingDataset::from_sightings(vec![
            sighting("disk", 2001),
            sighting("disk", 1999),
            sighting("light", 2001),
            sighting("disk", 1999),
            sighting("light", 1975),
        ]);
        let counts = year_counts(&ds, &view(&ds));
        assert_eq!(counts, vec![(1975, 1), (1999, 2), (2001, 2)]);
        assert!(counts.windows(2).all(|w| w[0].0 < w[1].0));
        // No zero-count years are synthesized between 1975 and 1999.
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn empty_view_yields_empty_aggregates() {
        let ds = SightingDataset::from_sightings(vec![sighting("disk", 1990)]);
        assert!(shape_counts(&ds, &[]).is_empty());
        assert!(year_counts(&ds, &[]).is_empty());
    }
}
