#![cfg(feature = "std")]

//! Stderr logger for the binaries. Log lines go to stderr so they never mix
//! with the boards printed on stdout.

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Level used when `SEA_BATTLE_LOG` is unset or unreadable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level written either as a name (`debug`, `trace`, `off`, ...) or
/// as a verbosity digit from `0` (off) to `5` (trace). `quiet` is accepted
/// as an alias for `off`.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("quiet") {
        return Some(LevelFilter::Off);
    }
    match raw.parse::<usize>() {
        Ok(verbosity) => LevelFilter::iter().nth(verbosity),
        Err(_) => raw.parse().ok(),
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target.strip_prefix("sea_battle::").unwrap_or(target);
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:<5} {}] {}",
            record.level(),
            module,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with the level from `SEA_BATTLE_LOG`, falling
/// back to [`DEFAULT_LEVEL`] so the game board is not drowned out. Calling it
/// twice keeps the first logger.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LEVEL);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
