use super::layout::WheelLayout;
use crate::config::{Config, HexColor, PaletteEntry};
use crate::wheel::{
    ColorLabel, GazeResolver, HeadingError, HeadingEstimator, HeadingVector, PrizeTable, Sector,
    SectorWheel, WheelError,
};
use gazectl::LandmarkSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error(transparent)]
    Heading(#[from] HeadingError),
    #[error("no wheel has been generated yet")]
    UninitializedWheel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameAction {
    pub sector_changed: bool,
    pub prize_changed: bool,
}

/// Owns the wheel for one game and everything derived from it each frame.
///
/// The wheel is only replaced by [`Session::reset`]. Resizing and config
/// reloads leave its sectors untouched.
pub struct Session {
    config: Config,
    estimator: HeadingEstimator,
    resolver: GazeResolver,
    wheel: Option<SectorWheel>,
    wheel_palette: Vec<PaletteEntry>,
    prizes: PrizeTable,
    layout: WheelLayout,
    rng: StdRng,
    heading: Option<HeadingVector>,
    hover_index: Option<usize>,
    prize: Option<u32>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let rng = config
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            estimator: HeadingEstimator::new(config.sensitivity),
            resolver: GazeResolver::new(config.display_mirrored),
            wheel: None,
            wheel_palette: config.palette.clone(),
            prizes: config.prize_table(),
            layout: WheelLayout::fit(config.viewport.width, config.viewport.height),
            rng,
            heading: None,
            hover_index: None,
            prize: None,
            config,
        }
    }

    /// Generates a fresh wheel from the current palette, sector count and
    /// weight range. On failure the previous wheel stays in play.
    pub fn reset(&mut self) -> Result<&SectorWheel, WheelError> {
        let wheel = SectorWheel::generate(
            &self.config.labels(),
            self.config.sector_count,
            self.config.weights,
            &mut self.rng,
        )?;
        log::info!(
            "Generated wheel: {} sectors, total weight {:.3}",
            wheel.sector_count(),
            wheel.total_weight()
        );

        self.wheel_palette = self.config.palette.clone();
        self.prizes = self.config.prize_table();
        self.hover_index = None;
        self.prize = None;
        Ok(&*self.wheel.insert(wheel))
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.layout = WheelLayout::fit(width, height);
    }

    /// Sensitivity and mirroring apply at once; palette, prizes, sector count
    /// and weights wait for the next reset.
    pub fn apply_config(&mut self, config: Config) {
        self.estimator = HeadingEstimator::new(config.sensitivity);
        self.resolver = GazeResolver::new(config.display_mirrored);

        let wheel_settings_changed = config.palette != self.config.palette
            || config.sector_count != self.config.sector_count
            || config.weights != self.config.weights;
        if wheel_settings_changed {
            log::info!("Wheel settings changed; they apply on the next reset");
        }
        self.config = config;
    }

    /// Runs one frame from the tracker. Only the first face plays.
    pub fn process_frame(&mut self, faces: &[LandmarkSet]) -> Result<FrameAction, FrameError> {
        let Some(face) = faces.first() else {
            return Ok(FrameAction::default());
        };

        let heading = self.estimator.estimate(face)?;
        self.heading = Some(heading);

        let index = self
            .resolver
            .resolve(heading, self.wheel.as_ref())
            .ok_or(FrameError::UninitializedWheel)?;
        let prize = self.prizes.lookup(&self.sectors()[index].label);

        let action = FrameAction {
            sector_changed: self.hover_index != Some(index),
            prize_changed: self.prize != Some(prize),
        };
        self.hover_index = Some(index);
        self.prize = Some(prize);
        Ok(action)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn wheel(&self) -> Option<&SectorWheel> {
        self.wheel.as_ref()
    }

    pub fn sectors(&self) -> &[Sector] {
        self.wheel.as_ref().map(SectorWheel::sectors).unwrap_or_default()
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn resolver(&self) -> &GazeResolver {
        &self.resolver
    }

    pub fn heading(&self) -> Option<HeadingVector> {
        self.heading
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn prize(&self) -> Option<u32> {
        self.prize
    }

    /// Color of a label in the palette the current wheel was generated from.
    pub fn color_of(&self, label: &ColorLabel) -> Option<HexColor> {
        self.wheel_palette
            .iter()
            .find(|e| &e.label == label)
            .map(|e| e.color)
    }
}
