use crate::chronometer::Chronometer;
use log::LevelFilter;
use std::io::Write;

/// Installs an `env_logger` backend writing to stderr, each line prefixed
/// with the time elapsed since startup.
pub fn configure_logger(level: LevelFilter) {
    let chronometer = Chronometer::new();
    env_logger::Builder::new()
        .format(move |buf, record| {
            writeln!(buf, "{} [{}] {}", chronometer.elapsed(), record.level(), record.args())
        })
        .filter(None, level)
        .init();
}
