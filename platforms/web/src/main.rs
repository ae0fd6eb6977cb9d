mod app;
mod assets;
mod components;
mod dom;

use app::App;
use components::StrictMode;
use dom::{DomDocument, YewRuntime};
use ncd_ui::{BootConfig, BootError, Bootstrap};
use yew::html;

fn main() {
    // Fall back to the built-in defaults if the shipped configuration is broken
    let (config, config_error) = match BootConfig::from_json(assets::BOOT_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (BootConfig::default(), Some(e)),
    };

    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }

    if let Err(e) = run(config) {
        log::error!("Bootstrap failed: {}", e);
    }
}

fn run(config: BootConfig) -> Result<(), BootError> {
    let mut document = DomDocument::current()?;
    let mut runtime = YewRuntime;

    let mounted = Bootstrap::new(config)?.mount(&mut document, &mut runtime, || {
        html! {
            <StrictMode>
                <App />
            </StrictMode>
        }
    })?;

    log::debug!(
        "#{} is {} with {} stylesheets",
        mounted.mount_point(),
        mounted.phase(),
        mounted.stylesheets()
    );
    Ok(())
}
