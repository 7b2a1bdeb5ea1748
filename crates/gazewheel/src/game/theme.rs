use crate::config::HexColor;
use cairo::Context;
use palette::Srgba;

/// Colors for everything that is not a palette sector.
pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub outline: Srgba<f64>,
    pub highlight: Srgba<f64>,
    pub ray: Srgba<f64>,
    pub center_circle: Srgba<f64>,
    pub text: Srgba<f64>,
    /// Used when a sector's label is missing from the palette.
    pub unknown_sector: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: Srgba::new(0.07, 0.07, 0.09, 1.0),
            outline: Srgba::new(1.0, 1.0, 1.0, 0.85),
            highlight: Srgba::new(1.0, 0.95, 0.6, 1.0),
            ray: Srgba::new(1.0, 1.0, 1.0, 0.9),
            center_circle: Srgba::new(0.95, 0.95, 0.95, 1.0),
            text: Srgba::new(1.0, 1.0, 1.0, 1.0),
            unknown_sector: Srgba::new(0.3, 0.3, 0.3, 1.0),
        }
    }
}

impl ThemeColors {
    pub fn sector(&self, color: Option<HexColor>) -> Srgba<f64> {
        color
            .map(|c| {
                let (r, g, b) = c.components();
                Srgba::new(r, g, b, 1.0)
            })
            .unwrap_or(self.unknown_sector)
    }
}

pub fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}
