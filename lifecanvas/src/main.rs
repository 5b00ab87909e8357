// main.rs - entry point: logging, config, window

use eframe::egui;
use lifecanvas_core::Config;

mod app;
mod render;

use app::LifeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = Config::load(None);
    log::info!(
        "lifecanvas: {}x{} grid, {}ms playback period",
        config.rows,
        config.cols,
        config.interval_ms
    );
    log::info!("Controls:");
    log::info!("  Left drag   - Draw or erase cells");
    log::info!("  Right drag  - Pan");
    log::info!("  Scroll      - Zoom at cursor");
    log::info!("  Use the button row for playback, speed and patterns.");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Life Canvas",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(config))),
    )
}
