use dioxus::prelude::*;

use crate::core::{menu::Section, site::OWNER_NAME};
use crate::i18n::use_i18n;
use crate::icons::{Icon, IconGlyph};
use crate::t;

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div { class: "hero__backdrop",
                span { class: "hero__blob hero__blob--one" }
                span { class: "hero__blob hero__blob--two" }
                span { class: "hero__blob hero__blob--three" }
            }

            div { class: "hero__content",
                p { class: "hero__greeting", {t!(i18n, "hero.greeting")} }
                h1 { class: "hero__heading",
                    span { class: "hero__name", "{OWNER_NAME}" }
                    span { class: "hero__title text-gradient", {t!(i18n, "hero.title")} }
                }
                p { class: "hero__description", {t!(i18n, "hero.description")} }

                div { class: "hero__actions",
                    a { class: "button button--primary button--large", href: Section::Projects.anchor(),
                        span { {t!(i18n, "hero.cta_projects")} }
                        IconGlyph { icon: Icon::ArrowRight, class: "hero__arrow" }
                    }
                    a { class: "button button--ghost button--large", href: Section::Contact.anchor(),
                        {t!(i18n, "hero.cta_contact")}
                    }
                }

                a {
                    class: "hero__scroll",
                    href: Section::Skills.anchor(),
                    aria_label: t!(i18n, "hero.scroll"),
                    span { class: "hero__scroll-dot" }
                }
            }
        }
    }
}
