use derive_more::{AsRef, Deref, From, Into};
use serde::{Deserialize, Serialize};

/// A tracker landmark in normalized camera-plane coordinates; `z` is relative depth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

/// All landmarks of one detected face, indexed by the tracker's anatomical numbering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Deref, From, Into, AsRef)]
#[serde(transparent)]
pub struct LandmarkSet(Vec<Point3>);

impl LandmarkSet {
    pub fn new(points: Vec<Point3>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point3> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_set_deserialization() {
        let json = r#"[{"x": 0.5, "y": 0.25, "z": -0.1}, {"x": 1.0, "y": 0.0}]"#;
        let set: LandmarkSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set[0], Point3::new(0.5, 0.25, -0.1));
        assert_eq!(set[1].z, 0.0);
    }

    #[test]
    fn test_midpoint() {
        let a = Point3::new(0.25, 0.5, 0.0);
        let b = Point3::new(0.75, 1.0, -0.5);
        assert_eq!(a.midpoint(b), Point3::new(0.5, 0.75, -0.25));
    }
}
