use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::menu::Section;
use crate::core::site::{ContactLink, CONTACT_LINKS, OWNER_MAILTO, OWNER_NAME};
use crate::i18n::use_i18n;
use crate::icons::{Icon, IconGlyph};
use crate::t;

#[component]
pub fn Contact() -> Element {
    let i18n = use_i18n();

    rsx! {
        section { id: Section::Contact.id(), class: "section section--muted contact",
            div { class: "section__inner section__inner--narrow",
                header { class: "section__header",
                    h2 { class: "section__title", {t!(i18n, "contact.title")} }
                    p { class: "section__subtitle", {t!(i18n, "contact.subtitle")} }
                }

                div { class: "contact__grid",
                    for link in CONTACT_LINKS.iter() {
                        {contact_card(link, i18n.tr(link.label_key))}
                    }
                }

                div { class: "contact__cta",
                    IconGlyph { icon: Icon::Send, size: 48, class: "contact__cta-icon" }
                    h3 { class: "contact__cta-title", {t!(i18n, "contact.cta_title")} }
                    p { class: "contact__cta-body", {t!(i18n, "contact.cta_body")} }
                    a { class: "button button--inverse", href: OWNER_MAILTO,
                        {t!(i18n, "contact.cta_button")}
                    }
                }
            }

            Footer {}
        }
    }
}

fn contact_card(link: &ContactLink, label: String) -> Element {
    rsx! {
        a {
            key: "{link.href}",
            class: "contact-card",
            href: link.href,
            target: "_blank",
            rel: "noopener noreferrer",
            span { class: "contact-card__badge {link.accent}",
                IconGlyph { icon: link.icon, size: 24 }
            }
            h3 { class: "contact-card__label", "{label}" }
            p { class: "contact-card__value", "{link.value}" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let i18n = use_i18n();
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "footer",
            p { {t!(i18n, "contact.footer", year = year, owner = OWNER_NAME)} }
        }
    }
}
