use gazectl::{LandmarkSet, Point3};
use strum::{Display as StrumDisplay, EnumIter};
use thiserror::Error;

/// The three face-mesh points the heading is built from.
///
/// Indices follow the 468-point face mesh numbering used by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum FaceLandmark {
    #[strum(serialize = "nose tip")]
    NoseTip,
    #[strum(serialize = "left tragion")]
    LeftTragion,
    #[strum(serialize = "right tragion")]
    RightTragion,
}

impl FaceLandmark {
    pub const fn index(self) -> usize {
        match self {
            Self::NoseTip => 1,
            Self::LeftTragion => 234,
            Self::RightTragion => 454,
        }
    }

    fn locate(self, landmarks: &LandmarkSet) -> Result<Point3, HeadingError> {
        landmarks
            .get(self.index())
            .copied()
            .ok_or(HeadingError::MissingLandmark(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeadingError {
    #[error("{} (landmark {}) missing from frame", .0, .0.index())]
    MissingLandmark(FaceLandmark),
}

/// Planar face-forward direction. The magnitude grows with head deviation and is
/// only used to size the drawn ray; sector resolution looks at the angle alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingVector {
    pub x: f64,
    pub y: f64,
}

impl HeadingVector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingEstimator {
    sensitivity: f64,
}

impl HeadingEstimator {
    pub fn new(sensitivity: f64) -> Self {
        Self { sensitivity }
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Offset of the nose tip from the midpoint between the ears, depth dropped,
    /// scaled by the sensitivity. Not normalized.
    pub fn estimate(&self, landmarks: &LandmarkSet) -> Result<HeadingVector, HeadingError> {
        let nose = FaceLandmark::NoseTip.locate(landmarks)?;
        let left = FaceLandmark::LeftTragion.locate(landmarks)?;
        let right = FaceLandmark::RightTragion.locate(landmarks)?;

        let mid = left.midpoint(right);
        Ok(HeadingVector::new(
            (nose.x - mid.x) * self.sensitivity,
            (nose.y - mid.y) * self.sensitivity,
        ))
    }
}

/// A full face mesh with the ears level at y = 0.5 and the nose tip shifted by `(dx, dy)`.
#[cfg(test)]
pub(crate) fn face_looking(dx: f64, dy: f64) -> LandmarkSet {
    let mut points = vec![Point3::new(0.5, 0.5, 0.0); 468];
    points[FaceLandmark::NoseTip.index()] = Point3::new(0.5 + dx, 0.5 + dy, -0.08);
    points[FaceLandmark::LeftTragion.index()] = Point3::new(0.375, 0.5, 0.02);
    points[FaceLandmark::RightTragion.index()] = Point3::new(0.625, 0.5, 0.04);
    LandmarkSet::new(points)
}
