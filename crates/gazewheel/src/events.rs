use gazectl::{LandmarkSet, Request};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Frame(Vec<LandmarkSet>),
    Reset,
    Resize { width: u32, height: u32 },
    Snapshot(PathBuf),
    ConfigReload,
}

impl AppEvent {
    /// Requests that change the game. `prize` is answered by the server itself.
    pub fn from_request(request: Request) -> Option<Self> {
        match request {
            Request::Frame(faces) => Some(Self::Frame(faces)),
            Request::Reset => Some(Self::Reset),
            Request::Resize { width, height } => Some(Self::Resize { width, height }),
            Request::Snapshot(path) => Some(Self::Snapshot(path)),
            Request::Prize => None,
        }
    }
}
