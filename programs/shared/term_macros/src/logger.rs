use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::{OwoColorize, Stream};

const LEVEL_VAR: &str = "RUST_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

fn label(level: Level) -> String {
    let name = level.as_str();
    match level {
        Level::Error => name.if_supports_color(Stream::Stderr, |t| t.red()).to_string(),
        Level::Warn => name.if_supports_color(Stream::Stderr, |t| t.yellow()).to_string(),
        Level::Info => name.if_supports_color(Stream::Stderr, |t| t.green()).to_string(),
        Level::Debug => name.if_supports_color(Stream::Stderr, |t| t.blue()).to_string(),
        Level::Trace => name.if_supports_color(Stream::Stderr, |t| t.dimmed()).to_string(),
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", label(record.level()), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// `warn` unless the variable names another level.
pub fn level_from(filter: Option<&str>) -> LevelFilter {
    filter.and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Installs the stderr logger; later calls are no-ops.
pub fn init() {
    let level = level_from(std::env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[test]
fn levels() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" OFF ")), LevelFilter::Off);
    assert_eq!(level_from(Some("chatty")), LevelFilter::Warn);
}
