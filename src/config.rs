//! Guard settings, persisted as JSON in `localStorage`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuardError;
use crate::model::Position;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const STORAGE_KEY: &str = "cc_guard_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Element id the camera is looked up by.
    pub camera_id: String,
    /// DOM event the guard runs on.
    pub event: String,
    pub safe_position: Position,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            camera_id: "camera".to_string(),
            event: "mousemove".to_string(),
            safe_position: Position::ORIGIN,
            log_level: "info".to_string(),
        }
    }
}

impl GuardConfig {
    pub fn from_json(raw: &str) -> Result<Self, GuardError> {
        let cfg: Self =
            serde_json::from_str(raw).map_err(|e| GuardError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GuardError> {
        if self.camera_id.trim().is_empty() {
            return Err(GuardError::InvalidConfig("camera_id is empty".into()));
        }
        if self.event.trim().is_empty() {
            return Err(GuardError::InvalidConfig("event is empty".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, GuardError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| GuardError::InvalidConfig(format!("unknown log level {:?}", self.log_level)))
    }

    /// Raw stored config, if `localStorage` is reachable and holds one.
    pub fn read_storage() -> Option<String> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten())
    }

    /// Builds the config from the stored value. Falls back to defaults when
    /// it is absent or unreadable; the parse error is handed back so it can
    /// be reported once logging is up.
    pub fn from_stored(raw: Option<&str>) -> (Self, Option<GuardError>) {
        match raw.map(Self::from_json) {
            Some(Ok(cfg)) => (cfg, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        }
    }
}
