pub mod app;
pub mod layout;
pub mod session;
pub mod theme;
pub mod view;

pub use app::App;
pub use layout::{Point, WheelLayout};
pub use session::{FrameAction, FrameError, Session};
pub use view::{SnapshotError, draw, render_png};

pub const REFERENCE_HEIGHT: f64 = 1080.0;
pub const WHEEL_FILL: f64 = 0.45; // wheel radius relative to the shorter viewport side
pub const RAY_REACH: f64 = 40.0; // heading magnitude that reaches the rim
pub const CENTER_CIRCLE_RADIUS: f64 = 18.0;
pub const OUTLINE_WIDTH: f64 = 3.0;
pub const HIGHLIGHT_WIDTH: f64 = 8.0;
pub const RAY_WIDTH: f64 = 6.0;
pub const PRIZE_FONT_SIZE: f64 = 48.0;
