//! Stdout diagnostics for placement and turn routing.

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Logger for the game's own diagnostics. Records from other crates are
/// dropped so board output stays readable even at `debug`.
struct GameLogger;

impl Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("flotilla")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: GameLogger = GameLogger;

/// Install the game logger, with the level taken from the `FLOTILLA_LOG`
/// environment variable. Defaults to `warn` so diagnostics stay out of
/// game output.
pub fn init_logging() {
    let level = env::var("FLOTILLA_LOG")
        .ok()
        .as_deref()
        .map(str::parse)
        .and_then(Result::ok)
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
