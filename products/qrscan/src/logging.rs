use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

/// Logger that writes to stdout with an uptime timestamp.
struct StdoutLogger {
    started: Instant,
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!(
            "{:>9.3} [{}] {} - {}",
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Install the stdout logger.
///
/// Debug builds log Debug and up, release builds Info and up. Subsequent
/// calls are silently ignored.
pub fn init() {
    static LOGGER: OnceLock<StdoutLogger> = OnceLock::new();
    let logger = LOGGER.get_or_init(|| StdoutLogger {
        started: Instant::now(),
    });

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(logger).is_ok() {
        log::set_max_level(max_level);
    }
}
