use std::collections::BTreeMap;

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
// Color mapping: label value → Color32
// ---------------------------------------------------------------------------

/// Maps the dataset's label values (personality types) to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given label values (assumed sorted).
    pub fn new(label_values: &[String]) -> Self {
        let palette = generate_palette(label_values.len());
        let mapping: BTreeMap<String, Color32> = label_values
            .iter()
            .cloned()
            .zip(palette)
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given label value.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(2);
        assert_eq!(palette.len(), 2);
        assert_ne!(palette[0], palette[1]);
    }

    #[test]
    fn unknown_label_gets_the_default() {
        let cm = ColorMap::new(&["Extrovert".to_string(), "Introvert".to_string()]);
        assert_ne!(cm.color_for("Extrovert"), cm.color_for("Introvert"));
        assert_eq!(cm.color_for("Ambivert"), Color32::GRAY);
    }
}
