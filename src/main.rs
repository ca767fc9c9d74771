use camera_guard::components::app::{App, AppProps};
use camera_guard::config::{GuardConfig, STORAGE_KEY};
use camera_guard::util::init_logging;

fn main() {
    let (config, problem) = GuardConfig::from_stored(GuardConfig::read_storage().as_deref());
    init_logging(&config);
    if let Some(e) = problem {
        log::warn!("ignoring stored {STORAGE_KEY}: {e}");
    }
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
