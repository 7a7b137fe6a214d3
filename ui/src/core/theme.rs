//! Dark/light theme preference.
//!
//! The flag is read once at start (`get_initial`) and written back on every
//! toggle. Storage problems are logged and the store carries on in memory.

use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};

use super::storage::PreferenceBackend;

/// Storage key holding `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Value used when nothing has been stored yet.
pub const DEFAULT_DARK: bool = true;

/// Class placed on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

pub struct ThemeStore {
    backend: Rc<dyn PreferenceBackend>,
    is_dark: bool,
}

impl ThemeStore {
    pub fn new(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self {
            backend,
            is_dark: DEFAULT_DARK,
        }
    }

    /// Resolve the stored preference. A first run persists the default.
    pub fn get_initial(&mut self) -> bool {
        self.is_dark = match self.backend.load(DARK_MODE_KEY) {
            Ok(Some(raw)) => raw == "true",
            Ok(None) => {
                self.persist(DEFAULT_DARK);
                DEFAULT_DARK
            }
            Err(err) => {
                warn!("[theme] {err}; using the default for this session");
                DEFAULT_DARK
            }
        };
        debug!("[theme] initial dark={}", self.is_dark);
        self.is_dark
    }

    /// Flip the flag, persist it and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.persist(self.is_dark);
        self.is_dark
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    fn persist(&self, is_dark: bool) {
        let value = if is_dark { "true" } else { "false" };
        if let Err(err) = self.backend.store(DARK_MODE_KEY, value) {
            warn!("[theme] could not persist preference: {err}");
        }
    }
}

/// Script that puts the document root in line with `is_dark`.
pub fn root_class_script(is_dark: bool) -> String {
    format!("document.documentElement.classList.toggle('{DARK_CLASS}', {is_dark});")
}
