//! Console Logger
//!
//! `log` backend for the browser: records go to `console.*` on wasm32 and
//! to stderr elsewhere (native test runs).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{timestamp}] {level:<5} {target}: {message}")
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Parse a level name, falling back to `Info` for anything unknown.
pub fn parse_level(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the logger. Fails if another logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
