//! Console Logging
//!
//! Routes `log` records to the browser console through `wasm_logger`.

use log::LevelFilter;

/// Only this crate's records; dependency chatter stays out of the console
const MODULE_PREFIX: &str = "todo_ui";

/// Install the console logger at `level`. `Off` installs nothing.
pub fn init(level: LevelFilter) {
    match level.to_level() {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level).module_prefix(MODULE_PREFIX)),
        None => log::set_max_level(LevelFilter::Off),
    }
}
