/// Startup failures for the camera guard. Event handling itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("camera element not found: #{id}")]
    MissingCamera { id: String },
    #[error("camera element #{id} has no position object")]
    MissingPosition { id: String },
    #[error("could not register listener: {0}")]
    Listener(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl GuardError {
    pub(crate) fn from_js(err: &wasm_bindgen::JsValue) -> Self {
        Self::Listener(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}
