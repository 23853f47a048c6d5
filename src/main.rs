//! Headless coin toss: plays one toss at 60 fps and logs every event.
//!
//! Usage: `tosscoin [options.toml]`. Set `RUST_LOG=info` to see the events.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tosscoin::controller::TossController;
use tosscoin::options::Options;
use tosscoin::toss::{CoinView, LogListener, SharedListener};
use tosscoin::util::frame_timing::FrameTiming;

const VIEW_SIZE: u32 = 256;
const TARGET_FPS: u32 = 60;

fn load_options() -> Result<Options, String> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))
            .map_err(|e| format!("failed to load {path}: {e}")),
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut view = match CoinView::from_options(Some("front"), &options.toss)
    {
        Ok(view) => view,
        Err(e) => {
            log::error!("invalid toss options: {e}");
            std::process::exit(1);
        }
    };
    view.set_reverse_image("reverse");
    view.set_size(VIEW_SIZE, VIEW_SIZE);
    let listener: SharedListener = Rc::new(RefCell::new(LogListener));
    view.set_listener(listener);

    let controller = TossController::new(options.flight);
    let outcome = controller.toss(&mut view, &mut rand::rng());
    log::info!("tossing, will land on {outcome}");

    let mut clock = FrameTiming::new(TARGET_FPS);
    while view.tick(clock.wait_next()) {}

    log::info!(
        "landed on {} after {} frames",
        view.image().unwrap_or("nothing"),
        clock.frame_count()
    );
}
