use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::menu::{MenuState, Section};
use crate::core::storage::Preferences;
use crate::core::theme::{root_class_script, ThemeStore};
use crate::i18n::{use_i18n, I18n, Language};
use crate::icons::{Icon, IconGlyph};
use crate::t;

/// Fixed top bar: brand, section links, language picker, theme toggle and
/// the mobile menu.
///
/// The navbar owns the theme preference (loaded once on mount, persisted on
/// every toggle) and both menu flags. Language changes go through the shared
/// `I18n` context so every section re-renders.
///
/// Platforms may provide a `Preferences` context to choose the storage
/// backend; without one the platform default is used.
#[component]
pub fn Navbar() -> Element {
    let i18n = use_i18n();
    let prefs = try_use_context::<Preferences>().unwrap_or_else(Preferences::platform_default);

    let theme = use_signal(move || {
        let mut store = ThemeStore::new(prefs.backend());
        store.get_initial();
        store
    });
    let mut menu = use_signal(MenuState::default);

    // Initial root class; toggles update it from the handler.
    use_effect(move || apply_root_class(theme.peek().is_dark()));

    let is_dark = theme.read().is_dark();
    let MenuState {
        mobile_open,
        language_open,
    } = menu();
    let current = i18n.language();
    debug!("[navbar] render lang={current} dark={is_dark} mobile={mobile_open} language={language_open}");

    let on_toggle_theme = move |_: MouseEvent| {
        toggle_theme(theme);
    };
    let theme_icon = if is_dark { Icon::Sun } else { Icon::Moon };
    let theme_label = t!(i18n, "nav.toggle_theme");
    let menu_icon = if mobile_open { Icon::X } else { Icon::Menu };
    let nav_class = if is_dark { "navbar navbar--dark" } else { "navbar navbar--light" };

    rsx! {
        nav {
            id: "navbar",
            class: nav_class,
            div { class: "navbar__inner",
                // Brand
                a { class: "navbar__brand text-gradient", href: Section::Home.anchor(),
                    {t!(i18n, "nav.brand")}
                }

                // Desktop links
                div { class: "navbar__links",
                    for section in Section::ALL {
                        a {
                            key: "{section.id()}",
                            class: "navbar__link",
                            href: section.anchor(),
                            {i18n.tr(section.label_key())}
                        }
                    }
                }

                // Desktop controls
                div { class: "navbar__controls",
                    div { class: "navbar__locale",
                        button {
                            r#type: "button",
                            class: "navbar__icon-button",
                            aria_label: t!(i18n, "nav.language_label"),
                            aria_expanded: "{language_open}",
                            onclick: move |_| menu.write().toggle_language(),
                            IconGlyph { icon: Icon::Globe }
                            span { class: "navbar__flag", "{current.flag()}" }
                        }

                        if language_open {
                            div { class: "navbar__dropdown",
                                {language_options(i18n, menu, "navbar__dropdown-item")}
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__icon-button",
                        aria_label: "{theme_label}",
                        onclick: on_toggle_theme,
                        IconGlyph { icon: theme_icon }
                    }
                }

                // Mobile controls
                div { class: "navbar__mobile-controls",
                    button {
                        r#type: "button",
                        class: "navbar__icon-button",
                        aria_label: "{theme_label}",
                        onclick: on_toggle_theme,
                        IconGlyph { icon: theme_icon }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__icon-button",
                        aria_label: t!(i18n, "nav.toggle_menu"),
                        aria_expanded: "{mobile_open}",
                        onclick: move |_| menu.write().toggle_mobile(),
                        IconGlyph { icon: menu_icon, size: 24 }
                    }
                }
            }

            if mobile_open {
                div { class: "navbar__mobile-menu",
                    for section in Section::ALL {
                        a {
                            key: "{section.id()}",
                            class: "navbar__mobile-link",
                            href: section.anchor(),
                            onclick: move |_| follow_link(menu),
                            {i18n.tr(section.label_key())}
                        }
                    }

                    div { class: "navbar__mobile-locale",
                        div { class: "navbar__mobile-heading", {t!(i18n, "nav.language_heading")} }
                        {language_options(i18n, menu, "navbar__mobile-language")}
                    }
                }
            }
        }
    }
}

/// One button per supported language; the active one carries `--active`.
fn language_options(i18n: I18n, menu: Signal<MenuState>, class: &'static str) -> Element {
    let current = i18n.language();

    rsx! {
        {Language::ALL.into_iter().map(move |lang| {
            let item_class = if lang == current {
                format!("{class} {class}--active")
            } else {
                class.to_string()
            };
            rsx! {
                button {
                    key: "{lang.code()}",
                    r#type: "button",
                    class: "{item_class}",
                    onclick: move |_| choose_language(i18n, menu, lang),
                    span { "{lang.flag()}" }
                    span { "{lang.native_name()}" }
                }
            }
        })}
    }
}

fn apply_root_class(is_dark: bool) {
    let _ = document::eval(&root_class_script(is_dark));
}

/// Flip and persist the theme, then restyle the document root.
fn toggle_theme(mut theme: Signal<ThemeStore>) -> bool {
    let dark = theme.write().toggle();
    apply_root_class(dark);
    debug!("[navbar] theme toggled, dark={dark}");
    dark
}

fn follow_link(mut menu: Signal<MenuState>) {
    menu.write().select_nav_link();
}

fn choose_language(i18n: I18n, mut menu: Signal<MenuState>, lang: Language) {
    i18n.change_language(lang.code());
    menu.write().select_language();
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::storage::MemoryBackend;
    use crate::core::theme::DARK_MODE_KEY;
    use crate::i18n::Catalog;

    /// Run `f` inside the root scope of an empty dom so signals can be created.
    fn in_scope(f: impl FnOnce()) {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();
        dom.in_runtime(|| ScopeId::ROOT.in_runtime(f));
    }

    #[test]
    fn theme_handler_flips_and_persists() {
        in_scope(|| {
            let backend = MemoryBackend::new();
            let mut store = ThemeStore::new(Rc::new(backend.clone()));
            store.get_initial();
            let theme = Signal::new(store);

            assert!(!toggle_theme(theme));
            assert!(!theme.peek().is_dark());
            assert_eq!(backend.get(DARK_MODE_KEY).as_deref(), Some("false"));

            assert!(toggle_theme(theme));
            assert_eq!(backend.get(DARK_MODE_KEY).as_deref(), Some("true"));
        });
    }

    #[test]
    fn link_handler_closes_mobile_menu_only() {
        in_scope(|| {
            let menu = Signal::new(MenuState {
                mobile_open: true,
                language_open: true,
            });

            follow_link(menu);

            assert!(!menu.peek().mobile_open);
            assert!(menu.peek().language_open);
        });
    }

    #[test]
    fn language_handler_switches_and_closes_both_menus() {
        in_scope(|| {
            let i18n = I18n::new(Catalog::embedded(), Language::English);
            let menu = Signal::new(MenuState {
                mobile_open: true,
                language_open: true,
            });

            choose_language(i18n, menu, Language::German);

            assert_eq!(i18n.language(), Language::German);
            assert_eq!(i18n.tr("nav.home"), "Start");
            assert_eq!(*menu.peek(), MenuState::default());
        });
    }
}
