#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::Navbar;
use ui::core::storage::Preferences;
use ui::projects::ProjectSource;
use ui::views::Home;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Folio – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(ui::resource_dir()),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    compile_error!("folio-desktop needs the `desktop` feature");
}

#[component]
fn App() -> Element {
    ui::i18n::use_i18n_provider(ui::i18n::requested_language);
    use_context_provider(Preferences::platform_default);
    use_context_provider(|| {
        let source = ProjectSource::platform_default();
        info!("[desktop] projects from {source:?}");
        source
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Navbar {}
        Home {}
    }
}
