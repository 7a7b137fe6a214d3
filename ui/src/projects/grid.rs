use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::t;

use super::{card::ProjectCard, model::Project};

/// Cards in source order, or the empty-state placeholder.
#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> Element {
    let i18n = use_i18n();

    rsx! {
        if projects.is_empty() {
            div { class: "projects__placeholder",
                p { {t!(i18n, "projects.loading")} }
            }
        } else {
            div { class: "projects__grid",
                for (idx, project) in projects.into_iter().enumerate() {
                    ProjectCard { key: "{idx}-{project.id}", project }
                }
            }
        }
    }
}
