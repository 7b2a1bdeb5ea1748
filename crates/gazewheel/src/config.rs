use crate::events::AppEvent;
use crate::wheel::{
    ColorLabel, DEFAULT_SECTOR_COUNT, DEFAULT_SENSITIVITY, PrizeTable, WeightRange,
};
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgb;
use palette::rgb::FromHexError;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// An sRGB color written as `#rrggbb` (or `#rgb`) in the config file.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(pub Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Channels scaled to `0.0..=1.0` for drawing.
    pub fn components(&self) -> (f64, f64, f64) {
        self.0.into_format::<f64>().into_components()
    }
}

impl FromStr for HexColor {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaletteEntry {
    pub label: ColorLabel,
    pub color: HexColor,
    pub prize: u32,
}

impl PaletteEntry {
    pub fn new(label: &str, color: HexColor, prize: u32) -> Self {
        Self {
            label: ColorLabel::new(label),
            color,
            prize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Gain applied to the nose offset before it becomes a heading.
    pub sensitivity: f64,
    pub sector_count: usize,
    pub weights: WeightRange,
    /// The camera image is shown flipped horizontally, like a mirror.
    pub display_mirrored: bool,
    /// Fixed seed for wheel generation; random when absent.
    pub seed: Option<u64>,
    pub viewport: Viewport,
    pub palette: Vec<PaletteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            sector_count: DEFAULT_SECTOR_COUNT,
            weights: WeightRange::default(),
            display_mirrored: true,
            seed: None,
            viewport: Viewport::default(),
            palette: vec![
                PaletteEntry::new("gold", HexColor::new(0xf5, 0xc5, 0x18), 500),
                PaletteEntry::new("crimson", HexColor::new(0xd6, 0x28, 0x39), 100),
                PaletteEntry::new("azure", HexColor::new(0x1e, 0x88, 0xe5), 50),
                PaletteEntry::new("emerald", HexColor::new(0x2e, 0x7d, 0x32), 25),
                PaletteEntry::new("violet", HexColor::new(0x7b, 0x1f, 0xa2), 10),
                PaletteEntry::new("slate", HexColor::new(0x54, 0x6e, 0x7a), 5),
            ],
        }
    }
}

impl Config {
    pub fn labels(&self) -> Vec<ColorLabel> {
        self.palette.iter().map(|e| e.label.clone()).collect()
    }

    pub fn prize_table(&self) -> PrizeTable {
        PrizeTable::new(self.palette.iter().map(|e| (e.label.clone(), e.prize)))
    }

    pub fn color_of(&self, label: &ColorLabel) -> Option<HexColor> {
        self.palette
            .iter()
            .find(|e| &e.label == label)
            .map(|e| e.color)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "gazewheel", "gazewheel")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&get_config_path()?)
}

/// File values override defaults, `GAZEWHEEL_*` variables override the file.
/// Nested keys use a double underscore, e.g. `GAZEWHEEL_WEIGHTS__MIN`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(
            config::Environment::with_prefix("GAZEWHEEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Writes the commented default file on first start, then loads.
pub fn load_or_setup() -> Config {
    if let Err(e) = write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }

    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return Ok(());
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return Ok(());
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {}", config_dir.display());

    while let Ok(res) = bridge_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::error!("Watch error: {}", e);
                continue;
            }
        };

        let touches_config = matches!(
            event.kind,
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
        ) && event.paths.iter().any(|p| p == &config_path);

        if touches_config && tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_toml(text: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_file_matches_built_in_defaults() {
        assert_eq!(parse_toml(DEFAULT_CONFIG), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = parse_toml(
            r##"
sector_count = 8
display_mirrored = false

[weights]
min = 0.5
max = 2.0

[[palette]]
label = "red"
color = "#ff0000"
prize = 7

[[palette]]
label = "blue"
color = "00f"
prize = 3
"##,
        );

        assert_eq!(config.sector_count, 8);
        assert!(!config.display_mirrored);
        assert_eq!(config.weights, WeightRange { min: 0.5, max: 2.0 });
        assert_eq!(config.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.palette[1].color, HexColor::new(0, 0, 0xff));
    }

    #[test]
    fn test_hex_color_deserialization() {
        let cases = vec![
            ("\"#f5c518\"", HexColor::new(0xf5, 0xc5, 0x18)),
            ("\"F5C518\"", HexColor::new(0xf5, 0xc5, 0x18)),
            ("\"#0f0\"", HexColor::new(0, 0xff, 0)),
        ];

        for (json, expected) in cases {
            let deserialized: HexColor = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        assert!(serde_json::from_str::<HexColor>("\"purple\"").is_err());
        assert_eq!(HexColor::new(0xd6, 0x28, 0x39).to_string(), "#d62839");
    }

    #[test]
    fn test_palette_lookups() {
        let config = Config::default();
        let gold = ColorLabel::new("gold");

        assert_eq!(config.labels().len(), 6);
        assert_eq!(config.prize_table().lookup(&gold), 500);
        assert_eq!(config.color_of(&gold), Some(HexColor::new(0xf5, 0xc5, 0x18)));
        assert_eq!(config.color_of(&ColorLabel::new("mauve")), None);
    }
}
