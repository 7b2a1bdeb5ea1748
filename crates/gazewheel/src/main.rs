use gazewheel::board::PrizeBoard;
use gazewheel::config;
use gazewheel::game::{App, Session};
use gazewheel::sys::runtime;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let mut session = Session::new(config);
    if let Err(e) = session.reset() {
        log::error!("Failed to generate wheel, waiting for a reset: {}", e);
    }

    let board = PrizeBoard::default();
    let (tx, rx) = async_channel::bounded(64);

    // Start Background Services
    runtime::start_background_services(tx, board.clone());

    App::new(session, board).run(rx);
}
