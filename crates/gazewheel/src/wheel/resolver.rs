use super::heading::HeadingVector;
use super::sector::SectorWheel;
use super::{END_ANGLE, START_ANGLE};
use std::f64::consts::TAU;

/// Wraps an angle into `[START_ANGLE, END_ANGLE)`. Non-finite input is returned as is.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut angle = angle;
    while angle < START_ANGLE {
        angle += TAU;
    }
    while angle >= END_ANGLE {
        angle -= TAU;
    }
    angle
}

/// Maps a heading onto the wheel sector the participant sees the ray pointing at.
///
/// When the display is mirrored the on-screen ray is the heading flipped
/// horizontally, and classification must follow what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GazeResolver {
    display_mirrored: bool,
}

impl GazeResolver {
    pub fn new(display_mirrored: bool) -> Self {
        Self { display_mirrored }
    }

    pub fn display_mirrored(&self) -> bool {
        self.display_mirrored
    }

    /// The ray as drawn on screen.
    pub fn displayed_ray(&self, heading: HeadingVector) -> HeadingVector {
        if self.display_mirrored {
            HeadingVector::new(-heading.x, heading.y)
        } else {
            heading
        }
    }

    pub fn ray_angle(&self, heading: HeadingVector) -> f64 {
        let ray = self.displayed_ray(heading);
        normalize_angle(ray.y.atan2(ray.x))
    }

    /// `None` when no wheel has been generated yet.
    pub fn resolve(&self, heading: HeadingVector, wheel: Option<&SectorWheel>) -> Option<usize> {
        wheel.map(|w| w.sector_at(self.ray_angle(heading)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{ColorLabel, WeightRange};
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn abc_wheel() -> SectorWheel {
        let labels = ["A", "B", "C"].map(|s| ColorLabel::new(s)).to_vec();
        SectorWheel::from_parts(labels, vec![1.0, 1.0, 1.0]).unwrap()
    }

    fn index_containing(wheel: &SectorWheel, angle: f64) -> usize {
        wheel
            .sectors()
            .iter()
            .position(|s| s.contains(angle))
            .unwrap()
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(START_ANGLE), START_ANGLE);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(-PI), PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(-0.75 * PI), 1.25 * PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(END_ANGLE), START_ANGLE, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(5.0 * TAU + 1.0), 1.0, epsilon = 1e-9);
        assert!(normalize_angle(f64::NAN).is_nan());

        for k in -200..200 {
            let a = normalize_angle(k as f64 * 0.1);
            assert!((START_ANGLE..END_ANGLE).contains(&a), "{} -> {}", k, a);
        }
    }

    #[test]
    fn test_mirror_flips_horizontal_component() {
        let heading = HeadingVector::new(3.0, -2.0);
        assert_eq!(
            GazeResolver::new(true).displayed_ray(heading),
            HeadingVector::new(-3.0, -2.0)
        );
        assert_eq!(GazeResolver::new(false).displayed_ray(heading), heading);
    }

    #[test]
    fn test_mirrored_right_heading_points_left() {
        let wheel = abc_wheel();
        let heading = HeadingVector::new(1.0, 0.0);
        let mirrored = GazeResolver::new(true);

        assert_eq!(mirrored.ray_angle(heading), PI);
        assert_eq!(
            mirrored.resolve(heading, Some(&wheel)),
            Some(index_containing(&wheel, PI))
        );
        assert_eq!(mirrored.resolve(heading, Some(&wheel)), Some(2));
        assert_eq!(GazeResolver::new(false).resolve(heading, Some(&wheel)), Some(0));
    }

    #[test]
    fn test_straight_up_resolves_to_first_sector() {
        let wheel = abc_wheel();
        let resolver = GazeResolver::new(true);
        let heading = HeadingVector::new(0.0, -1.0);

        assert_eq!(resolver.ray_angle(heading), -FRAC_PI_2);
        assert_eq!(resolver.resolve(heading, Some(&wheel)), Some(0));
    }

    #[test]
    fn test_straight_down_follows_cumulative_spans() {
        let labels: Vec<_> = ["A", "B", "C", "D"].map(|s| ColorLabel::new(s)).to_vec();
        let resolver = GazeResolver::new(true);
        let heading = HeadingVector::new(0.0, 1.0);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let wheel =
                SectorWheel::generate(&labels, 9, WeightRange::default(), &mut rng).unwrap();

            let mut edge = START_ANGLE;
            let expected = wheel
                .sectors()
                .iter()
                .position(|s| {
                    edge += s.weight / wheel.total_weight() * TAU;
                    FRAC_PI_2 < edge
                })
                .unwrap();

            assert_relative_eq!(resolver.ray_angle(heading), FRAC_PI_2);
            assert_eq!(resolver.resolve(heading, Some(&wheel)), Some(expected));
        }
    }

    #[test]
    fn test_every_direction_resolves_to_containing_sector() {
        let labels: Vec<_> = ["A", "B", "C"].map(|s| ColorLabel::new(s)).to_vec();
        let mut rng = StdRng::seed_from_u64(99);
        let wheel = SectorWheel::generate(&labels, 8, WeightRange::default(), &mut rng).unwrap();
        let resolver = GazeResolver::new(true);

        for k in 0..3600 {
            let theta = TAU * k as f64 / 3600.0;
            let heading = HeadingVector::new(12.0 * theta.cos(), 12.0 * theta.sin());
            let angle = resolver.ray_angle(heading);
            let index = resolver.resolve(heading, Some(&wheel)).unwrap();

            assert!(wheel.sectors()[index].contains(angle));
        }
    }

    #[test]
    fn test_magnitude_does_not_change_resolution() {
        let wheel = abc_wheel();
        let resolver = GazeResolver::new(true);

        for scale in [0.001, 1.0, 250.0] {
            let heading = HeadingVector::new(0.2 * scale, 0.6 * scale);
            assert_eq!(resolver.resolve(heading, Some(&wheel)), Some(1));
        }
    }

    #[test]
    fn test_no_wheel_resolves_to_nothing() {
        let resolver = GazeResolver::new(true);
        assert_eq!(resolver.resolve(HeadingVector::new(1.0, 1.0), None), None);
    }
}
