use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use web_sys::window;

/// Location path of the page, read once at start-up.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Full page navigation; there is no client-side router.
pub fn redirect_to(path: &str) {
    log::debug!("Redirecting to {}", path);
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub pathname: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            pathname: RwSignal::new(current_path()),
            left_open: RwSignal::new(true),
            config: StoredValue::new(config),
        }
    }

    pub fn title(&self) -> String {
        self.config.with_value(|c| c.app.title.clone())
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
