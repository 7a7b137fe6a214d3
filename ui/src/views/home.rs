use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::i18n::use_i18n;
use crate::views::{Contact, Projects, Skills};
use crate::Hero;

/// The single portfolio page: every section, top to bottom.
#[component]
pub fn Home() -> Element {
    // Reading the language subscribes the page to language changes.
    let lang = use_i18n().language();
    debug!("[i18n] Home render (lang={lang})");

    rsx! {
        main { class: "page page-home", lang: lang.code(),
            Hero {}
            Skills {}
            Projects {}
            Contact {}
        }
    }
}
