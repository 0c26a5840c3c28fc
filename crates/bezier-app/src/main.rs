//! Main application entry point.

use bezier_app::{App, AppConfig, ShortcutRegistry};

fn main() {
    env_logger::init();
    log::info!("Starting Bezier editor");

    let config = match std::env::args().nth(1) {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    ShortcutRegistry::print_all();

    if let Err(e) = App::run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
