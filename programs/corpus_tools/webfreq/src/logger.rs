//! Minimal `log` backend. Everything goes to stdout, next to the progress
//! lines, with the level tag coloured.

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;

struct Console;

static CONSOLE: Console = Console;

impl Log for Console {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("{} {}", tag(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn tag(level: Level) -> String {
    match level {
        Level::Error => "error".red().bold().to_string(),
        Level::Warn => "warn".yellow().bold().to_string(),
        Level::Info => "info".green().to_string(),
        Level::Debug => "debug".blue().to_string(),
        Level::Trace => "trace".dimmed().to_string(),
    }
}

/// Installs the console logger. Calling it again only adjusts the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&CONSOLE);
    log::set_max_level(level);
}

#[test]
fn test_init_twice() {
    init(LevelFilter::Debug);
    init(LevelFilter::Warn);
    assert_eq!(log::max_level(), LevelFilter::Warn);
}
