//! fibdev — latency benchmark client for the Fibonacci device.

use fibdev_cli::presenter::CLITracePresenter;
use fibdev_core::constants::exit_codes;
use fibdev_lib::{app, config, logging};

fn main() {
    logging::init();

    let config = config::AppConfig::parse();
    let presenter = CLITracePresenter::new(config.device_path.clone(), config.quiet);
    let code = app::execute(&config, &presenter);
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}
