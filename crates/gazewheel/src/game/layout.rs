use super::{RAY_REACH, REFERENCE_HEIGHT, WHEEL_FILL};
use crate::wheel::HeadingVector;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel geometry of the wheel for one viewport size. Angles live in the
/// [`SectorWheel`](crate::wheel::SectorWheel) and never change here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub width: u32,
    pub height: u32,
    pub center: Point,
    pub radius: f64,
    pub scale: f64,
}

impl WheelLayout {
    pub fn fit(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            width,
            height,
            center: Point::new(w / 2.0, h / 2.0),
            radius: w.min(h) * WHEEL_FILL,
            scale: h / REFERENCE_HEIGHT,
        }
    }

    /// End of the drawn ray. Length follows the heading magnitude, capped at the rim.
    pub fn ray_tip(&self, ray: HeadingVector) -> Point {
        let magnitude = ray.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return self.center;
        }
        let length = (magnitude / RAY_REACH).min(1.0) * self.radius;
        Point::new(
            self.center.x + ray.x / magnitude * length,
            self.center.y + ray.y / magnitude * length,
        )
    }
}
