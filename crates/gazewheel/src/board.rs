use parking_lot::RwLock;
use std::sync::Arc;

/// The prize on display, shared with the socket server so status queries
/// never have to reach into the game loop.
#[derive(Debug, Clone, Default)]
pub struct PrizeBoard(Arc<RwLock<Option<u32>>>);

impl PrizeBoard {
    pub fn get(&self) -> Option<u32> {
        *self.0.read()
    }

    pub fn set(&self, prize: Option<u32>) {
        *self.0.write() = prize;
    }
}
