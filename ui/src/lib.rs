//! Shared UI crate for Folio. Every section, the localization layer and the
//! preference store live here; platform crates only launch and provide
//! contexts.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod icons;
pub mod projects;
pub mod views;

pub mod components {
    // Localized navbar with theme toggle and language picker (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::Navbar;

    pub use crate::projects::ProjectCard;
}

mod hero;
pub use hero::Hero;


/// Shared theme stylesheet (linked on web, inlined by the desktop crate).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Project list served next to the web bundle.
pub const PROJECTS_DATA: Asset = asset!("/assets/data/projects.json");

/// Directory holding `data/` and `theme/` for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn resource_dir() -> std::path::PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        std::path::PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| std::path::PathBuf::from("assets"))
    }
}
