//! Console Logger
//!
//! Routes the `log` facade to the browser console so the client crate's
//! `log::error!` calls end up next to panics from the panic hook.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Debug builds log everything down to `debug!`, release builds stop at `info!`
    pub fn default_level() -> LevelFilter {
        if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Install as the global logger. Calling twice is harmless.
    pub fn init(max_level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(max_level);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
