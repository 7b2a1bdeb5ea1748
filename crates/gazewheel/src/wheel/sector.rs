use super::prize::ColorLabel;
use super::{DEFAULT_WEIGHT_MAX, DEFAULT_WEIGHT_MIN, END_ANGLE, START_ANGLE};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    #[error("palette has no colors")]
    EmptyPalette,
    #[error("wheel needs at least one sector")]
    NoSectors,
    #[error("{count} sectors cannot show all {palette} palette colors")]
    TooFewSectors { count: usize, palette: usize },
    #[error("weight range [{min}, {max}) must be positive and non-empty")]
    InvalidWeightRange { min: f64, max: f64 },
    #[error("sector weight {0} must be positive and finite")]
    InvalidWeight(f64),
    #[error("{labels} labels but {weights} weights")]
    LengthMismatch { labels: usize, weights: usize },
}

/// Half-open range sector weights are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_WEIGHT_MIN,
            max: DEFAULT_WEIGHT_MAX,
        }
    }
}

impl WeightRange {
    pub fn validate(&self) -> Result<(), WheelError> {
        let valid =
            self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min < self.max;
        if valid {
            Ok(())
        } else {
            Err(WheelError::InvalidWeightRange {
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub end: f64,
    pub weight: f64,
    pub label: ColorLabel,
}

impl Sector {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Half-open: a shared edge belongs to the sector that starts there.
    pub fn contains(&self, angle: f64) -> bool {
        self.start <= angle && angle < self.end
    }
}

/// A weighted partition of `[START_ANGLE, END_ANGLE)` into labeled sectors.
///
/// Sectors are contiguous and ordered clockwise on screen; each one spans
/// `weight / total_weight` of a full turn.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorWheel {
    sectors: Vec<Sector>,
    total_weight: f64,
}

impl SectorWheel {
    /// Builds a random wheel in which every palette color appears at least once.
    pub fn generate(
        palette: &[ColorLabel],
        sector_count: usize,
        weights: WeightRange,
        rng: &mut impl Rng,
    ) -> Result<Self, WheelError> {
        if palette.is_empty() {
            return Err(WheelError::EmptyPalette);
        }
        if sector_count < palette.len() {
            return Err(WheelError::TooFewSectors {
                count: sector_count,
                palette: palette.len(),
            });
        }
        weights.validate()?;

        let labels = assign_labels(palette, sector_count, rng);
        let drawn = (0..sector_count)
            .map(|_| rng.gen_range(weights.min..weights.max))
            .collect();

        Self::from_parts(labels, drawn)
    }

    /// Lays out sectors in order from 12 o'clock. The last sector is closed
    /// exactly at [`END_ANGLE`] so accumulated rounding never leaves a gap.
    pub fn from_parts(labels: Vec<ColorLabel>, weights: Vec<f64>) -> Result<Self, WheelError> {
        if labels.len() != weights.len() {
            return Err(WheelError::LengthMismatch {
                labels: labels.len(),
                weights: weights.len(),
            });
        }
        if labels.is_empty() {
            return Err(WheelError::NoSectors);
        }
        if let Some(&bad) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(WheelError::InvalidWeight(bad));
        }

        let total_weight: f64 = weights.iter().sum();
        if !total_weight.is_finite() {
            return Err(WheelError::InvalidWeight(total_weight));
        }

        let last = labels.len() - 1;
        let mut sectors = Vec::with_capacity(labels.len());
        let mut start = START_ANGLE;
        let mut cumulative = 0.0;

        for (i, (label, weight)) in labels.into_iter().zip(weights).enumerate() {
            cumulative += weight;
            let end = if i == last {
                END_ANGLE
            } else {
                START_ANGLE + cumulative / total_weight * TAU
            };
            sectors.push(Sector {
                start,
                end,
                weight,
                label,
            });
            start = end;
        }

        Ok(Self {
            sectors,
            total_weight,
        })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn get(&self, index: usize) -> Option<&Sector> {
        self.sectors.get(index)
    }

    /// Index of the sector containing `angle`, which must already be normalized.
    ///
    /// Anything past the final edge (float residue at `END_ANGLE`, NaN) lands in
    /// the last sector, since the partition closes there.
    pub fn sector_at(&self, angle: f64) -> usize {
        self.sectors
            .iter()
            .position(|s| s.contains(angle))
            .unwrap_or(self.sectors.len() - 1)
    }
}

/// One of each palette color, topped up with random picks, then shuffled.
fn assign_labels(palette: &[ColorLabel], count: usize, rng: &mut impl Rng) -> Vec<ColorLabel> {
    let mut labels = palette.to_vec();
    labels.extend(
        (palette.len()..count).map(|_| palette[rng.gen_range(0..palette.len())].clone()),
    );
    labels.shuffle(rng);
    labels
}
