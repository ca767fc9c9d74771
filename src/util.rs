use crate::config::GuardConfig;

/// Installs the browser console logger at the configured level. Later calls
/// only adjust the level.
pub fn init_logging(config: &GuardConfig) {
    let filter = config.level_filter().unwrap_or(log::LevelFilter::Info);
    let level = filter.to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(filter);
}
