//! Console logging setup.

use log::Level;

/// Debug builds log everything down to `debug`, release builds stop at `info`.
#[must_use]
pub const fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Route `log` records to the browser console. Later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
