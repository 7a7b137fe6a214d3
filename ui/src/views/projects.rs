use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::menu::Section;
use crate::i18n::use_i18n;
use crate::projects::{load_projects, LoadState, ProjectGrid, ProjectSource};
use crate::t;

/// Project gallery. Fetches the project list once per mount.
#[component]
pub fn Projects() -> Element {
    let i18n = use_i18n();
    let source = try_use_context::<ProjectSource>().unwrap_or_else(ProjectSource::platform_default);
    let mut state = use_signal(LoadState::default);

    use_hook(move || {
        spawn(async move {
            if !state.write().begin() {
                return;
            }
            let result = load_projects(&source).await;
            // Owner gone: discard the result.
            match state.try_write() {
                Ok(mut current) => {
                    current.settle(result);
                }
                Err(_) => debug!("[projects] section unmounted before the fetch settled"),
            }
        });
    });

    let projects = state.read().projects().to_vec();

    rsx! {
        section { id: Section::Projects.id(), class: "section projects",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {t!(i18n, "projects.title")} }
                    p { class: "section__subtitle", {t!(i18n, "projects.subtitle")} }
                }

                ProjectGrid { projects }
            }
        }
    }
}
