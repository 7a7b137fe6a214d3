use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::icons::{Icon, IconGlyph};
use crate::t;

use super::model::Project;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let i18n = use_i18n();
    let description = project.describe(i18n.language()).to_string();
    let initial = project.initial();

    rsx! {
        article { class: "project-card",
            div { class: "project-card__media",
                if let Some(src) = project.image() {
                    img {
                        class: "project-card__image",
                        src: "{src}",
                        alt: "{project.title}",
                    }
                } else {
                    div { class: "project-card__initial", "{initial}" }
                }
                div { class: "project-card__overlay" }
            }

            div { class: "project-card__body",
                h3 { class: "project-card__title", "{project.title}" }
                p { class: "project-card__description", "{description}" }

                if !project.technologies.is_empty() {
                    ul { class: "project-card__tags",
                        for (idx, tech) in project.technologies.iter().enumerate() {
                            li { key: "{idx}", class: "tag", "{tech}" }
                        }
                    }
                }

                div { class: "project-card__links",
                    if let Some(href) = project.github_url() {
                        a {
                            class: "button button--dark",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            IconGlyph { icon: Icon::Github, size: 18 }
                            span { {t!(i18n, "projects.view_code")} }
                        }
                    }
                    if let Some(href) = project.demo_url() {
                        a {
                            class: "button button--primary",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            IconGlyph { icon: Icon::ExternalLink, size: 18 }
                            span { {t!(i18n, "projects.live_demo")} }
                        }
                    }
                }
            }
        }
    }
}
