use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: shape label → Color32
// ---------------------------------------------------------------------------

/// Maps each shape label of the loaded dataset to a distinct colour, used
/// consistently by the map points, the bar chart, and the sidebar swatches.
#[derive(Debug, Clone)]
pub struct ShapeColors {
    mapping: HashMap<String, Color32>,
    default_color: Color32,
}

impl ShapeColors {
    /// Build a colour map over the dataset's shape labels. Assignment
    /// follows the given order, so colours are stable across filter changes.
    pub fn new(shapes: &[String]) -> Self {
        let palette = generate_palette(shapes.len());
        let mapping: HashMap<String, Color32> = shapes
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ShapeColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a shape label. Unknown labels (e.g. the empty
    /// shape) fall back to grey.
    pub fn color_for(&self, shape: &str) -> Color32 {
        self.mapping
            .get(shape)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_entries() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_shape_falls_back_to_default() {
        let colors = ShapeColors::new(&["disk".to_string(), "light".to_string()]);
        assert_ne!(colors.color_for("disk"), colors.color_for("light"));
        assert_eq!(colors.color_for(""), Color32::GRAY);
    }
}
