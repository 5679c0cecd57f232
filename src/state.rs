use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::color::ShapeColors;
use crate::data::aggregate;
use crate::data::filter::{default_criteria, filtered_indices, FilterCriteria};
use crate::data::loader;
use crate::data::model::SightingDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Maximum description length carried into a map hover label.
const HOVER_DESCRIPTION_CHARS: usize = 90;

/// One plotted sighting with its prepared hover text.
#[derive(Debug, Clone)]
pub struct MapPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub shape: String,
    pub label: String,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Replaced wholesale on
    /// each successful load, never mutated in place.
    pub dataset: Option<SightingDataset>,

    /// Current year-range + shape selection.
    pub criteria: FilterCriteria,

    /// Indices of sightings passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Ranked shape counts over the visible sightings (cached).
    pub shape_counts: Vec<(String, usize)>,

    /// Per-year counts over the visible sightings (cached).
    pub year_counts: Vec<(i32, usize)>,

    /// Visible sightings prepared for the map, shared with the plot's hover
    /// formatter.
    pub map_points: Arc<Vec<MapPoint>>,

    /// Shape → colour assignment for the loaded dataset.
    pub shape_colors: Option<ShapeColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria {
                year_range: (0, 0),
                shapes: BTreeSet::new(),
            },
            visible_indices: Vec::new(),
            shape_counts: Vec::new(),
            year_counts: Vec::new(),
            map_points: Arc::new(Vec::new()),
            shape_colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset criteria to the defaults, assign
    /// shape colours, and compute the derived views.
    pub fn set_dataset(&mut self, dataset: SightingDataset) {
        self.criteria = default_criteria(&dataset);
        self.shape_colors = Some(ShapeColors::new(&dataset.shapes));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Load a file into the state, keeping the previous dataset on failure.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "{}: {} sightings, {} shapes",
                    path.display(),
                    dataset.len(),
                    dataset.shapes.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Recompute every derived view after a criteria change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = filtered_indices(ds, &self.criteria);
        self.shape_counts = aggregate::shape_counts(ds, &self.visible_indices);
        self.year_counts = aggregate::year_counts(ds, &self.visible_indices);

        let points = self
            .visible_indices
            .iter()
            .map(|&i| {
                let s = &ds.sightings[i];
                let place = match &s.state {
                    Some(state) => format!("{}, {}", s.city, state),
                    None => s.city.clone(),
                };
                let description: String =
                    s.description.chars().take(HOVER_DESCRIPTION_CHARS).collect();
                MapPoint {
                    longitude: s.longitude,
                    latitude: s.latitude,
                    shape: s.shape.clone(),
                    label: format!(
                        "{place} — {}\n{description}",
                        s.timestamp.format("%Y-%m-%d %H:%M")
                    ),
                }
            })
            .collect();
        self.map_points = Arc::new(points);
    }

    /// Update the inclusive year range.
    pub fn set_year_range(&mut self, min_year: i32, max_year: i32) {
        self.criteria.year_range = (min_year, max_year);
        self.refilter();
    }

    /// Toggle a single shape in the selection.
    pub fn toggle_shape(&mut self, shape: &str) {
        if !self.criteria.shapes.remove(shape) {
            self.criteria.shapes.insert(shape.to_string());
        }
        self.refilter();
    }

    /// Select every shape present in the dataset.
    pub fn select_all_shapes(&mut self) {
        if let Some(ds) = &self.dataset {
            self.criteria.shapes = ds.shapes.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Clear the shape selection (which hides every sighting).
    pub fn select_no_shapes(&mut self) {
        self.criteria.shapes.clear();
        self.refilter();
    }
}
