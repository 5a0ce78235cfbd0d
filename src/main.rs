use std::process;

use log::error;

use ta::Engine;
use ta::config;

fn main() {
    config::init_logging();

    let engine = match Engine::new() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to build the map: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = engine.run() {
        error!("terminal I/O failed: {e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
