use super::session::Session;
use super::theme::ThemeColors;
use super::view;
use crate::board::PrizeBoard;
use crate::config;
use crate::events::AppEvent;
use async_channel::Receiver;

/// Applies events to the session, one at a time, on the calling thread.
pub struct App {
    session: Session,
    theme: ThemeColors,
    board: PrizeBoard,
}

impl App {
    pub fn new(session: Session, board: PrizeBoard) -> Self {
        board.set(session.prize());
        Self {
            session,
            theme: ThemeColors::default(),
            board,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(mut self, rx: Receiver<AppEvent>) {
        while let Ok(event) = rx.recv_blocking() {
            self.update(event);
        }
        log::info!("Event channel closed, shutting down");
    }

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Frame(faces) => match self.session.process_frame(&faces) {
                Ok(action) => {
                    if action.prize_changed {
                        self.board.set(self.session.prize());
                        if let Some(prize) = self.session.prize() {
                            log::info!("Prize: {}", prize);
                        }
                    }
                    if action.sector_changed {
                        log::debug!("Pointing at sector {:?}", self.session.hover_index());
                    }
                }
                Err(e) => log::debug!("Skipping frame: {}", e),
            },
            AppEvent::Reset => match self.session.reset() {
                Ok(_) => self.board.set(None),
                Err(e) => log::error!("Failed to generate wheel: {}", e),
            },
            AppEvent::Resize { width, height } => {
                self.session.resize(width, height);
                log::debug!("Viewport resized to {}x{}", width, height);
            }
            AppEvent::Snapshot(path) => {
                match view::render_png(&self.session, &self.theme, &path) {
                    Ok(()) => log::info!("Saved snapshot to {}", path.display()),
                    Err(e) => log::error!("Failed to save snapshot {}: {}", path.display(), e),
                }
            }
            AppEvent::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.session.apply_config(new_config);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::wheel::FaceLandmark;
    use crate::wheel::heading::face_looking;
    use gazectl::{LandmarkSet, Point3};

    fn app() -> (App, PrizeBoard) {
        let board = PrizeBoard::default();
        let session = Session::new(Config {
            seed: Some(3),
            ..Config::default()
        });
        (App::new(session, board.clone()), board)
    }

    #[test]
    fn test_board_follows_displayed_prize() {
        let (mut app, board) = app();
        app.update(AppEvent::Reset);
        assert_eq!(board.get(), None);

        app.update(AppEvent::Frame(vec![face_looking(0.02, -0.03)]));
        assert!(board.get().is_some());
        assert_eq!(board.get(), app.session().prize());

        app.update(AppEvent::Reset);
        assert_eq!(board.get(), None);
    }

    #[test]
    fn test_skipped_frames_leave_board_alone() {
        let (mut app, board) = app();
        app.update(AppEvent::Frame(vec![face_looking(0.02, -0.03)]));
        assert_eq!(board.get(), None);

        app.update(AppEvent::Reset);
        app.update(AppEvent::Frame(vec![face_looking(0.02, -0.03)]));
        let shown = board.get();

        let face: Vec<Point3> = face_looking(-0.04, 0.0).into();
        let broken = LandmarkSet::new(face[..FaceLandmark::RightTragion.index()].to_vec());
        app.update(AppEvent::Frame(vec![broken]));
        assert_eq!(board.get(), shown);
    }

    #[test]
    fn test_resize_event_keeps_wheel() {
        let (mut app, _) = app();
        app.update(AppEvent::Reset);
        let wheel = app.session().wheel().cloned();

        app.update(AppEvent::Resize {
            width: 800,
            height: 600,
        });
        assert_eq!(app.session().wheel().cloned(), wheel);
        assert_eq!(app.session().layout().height, 600);
    }
}
