use dioxus::prelude::*;

use ui::components::Navbar;
use ui::core::storage::Preferences;
use ui::i18n;
use ui::projects::ProjectSource;
use ui::views::Home;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Browser locale picks the first language; the navbar can switch it.
    i18n::use_i18n_provider(i18n::requested_language);
    use_context_provider(Preferences::platform_default);
    use_context_provider(ProjectSource::platform_default);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Navbar {}
        Home {}
    }
}
