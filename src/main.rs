mod app;
mod audio;
mod catalog;
mod config;
mod mpris;
mod player;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug for verbose output. Defaults to warnings only so
    // stray log lines do not corrupt the terminal UI.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    runtime::run()
}
