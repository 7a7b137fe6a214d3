//! Internationalization (i18n) support for `folio-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message lookup + formatting)
//! - `i18n-embed` (platform locale requesters only)
//! - `unic-langid` (language identifiers)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/folio-ui.ftl   (fallback/reference)
//!   de/folio-ui.ftl
//!   es/folio-ui.ftl
//! ```
//!
//! Keys are dotted paths (`nav.home`, `skills.categories.tools`). Fluent ids
//! cannot contain dots, so every `.` maps to `-` in the `.ftl` files
//! (`skills-categories-tools`). Segment names themselves use `_`.
//!
//! Lookup order for a key: active language, then English, then the key path
//! itself so a missing string is visible on the page instead of blank.
//!
//! Usage in a component (the platform `App` calls `use_i18n_provider` once):
//! ```ignore
//! let i18n = use_i18n();
//! let label = t!(i18n, "nav.home");
//! let footer = t!(i18n, "contact.footer", year = 2026, owner = "Pablo");
//! ```
//!
//! To add a new locale:
//! 1. Add a variant to [`Language`].
//! 2. Copy `en/folio-ui.ftl` to `i18n/<code>/folio-ui.ftl` and translate each value.
//! 3. Run tests to ensure completeness.
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use fluent::FluentArgs;

/// Ergonomic translation macro.
/// Examples:
///     t!(i18n, "nav.home")
///     t!(i18n, "contact.footer", year = 2026, owner = "Pablo")
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:literal) => {
        $i18n.tr($key)
    };
    ($i18n:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {{
        let mut args = $crate::i18n::FluentArgs::new();
        $( args.set(stringify!($arg), $value); )+
        $i18n.tr_args($key, &args)
    }};
}

/// Fluent "domain" (matches the crate / the per-locale FTL filename).
const DOMAIN: &str = "folio-ui";

/// Language used whenever the active one lacks a string.
pub const FALLBACK_LANGUAGE: Language = Language::English;

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Supported languages. The set is closed; anything else is rejected by
/// [`Language::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    German,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::German, Language::Spanish];

    /// Short code used for the locale folder and in project descriptions.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::Spanish => "es",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
            Language::Spanish => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            Language::German => "🇩🇪",
            Language::Spanish => "🇪🇸",
        }
    }

    /// Exact (case-insensitive) match against the supported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Match a requested locale (`de-AT`, `es-419`, ...) on its primary subtag.
    pub fn from_identifier(id: &LanguageIdentifier) -> Option<Self> {
        Self::from_code(id.language.as_str())
    }

    fn identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl Default for Language {
    fn default() -> Self {
        FALLBACK_LANGUAGE
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a dotted key path onto the Fluent message id that stores it.
pub fn message_id(key: &str) -> String {
    key.replace('.', "-")
}

/// Parsed string tables, one Fluent bundle per language.
pub struct Catalog {
    bundles: Vec<(Language, FluentBundle<FluentResource>)>,
}

impl Catalog {
    /// Catalog built from the `.ftl` files embedded in the binary.
    pub fn embedded() -> Self {
        let sources = Language::ALL.into_iter().filter_map(|lang| {
            let path = format!("{}/{DOMAIN}.ftl", lang.code());
            match Localizations::get(&path) {
                Some(file) => Some((lang, String::from_utf8_lossy(&file.data).into_owned())),
                None => {
                    warn!("[i18n] no embedded resource at {path}");
                    None
                }
            }
        });
        Self::from_sources(sources)
    }

    /// Catalog built from raw Fluent sources. Parse errors are logged and the
    /// valid part of each resource is kept.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        let bundles = sources
            .into_iter()
            .map(|(lang, source)| (lang, build_bundle(lang, source.into())))
            .collect();
        Self { bundles }
    }

    /// Resolve `key` for `lang`: active language, then English, then the key.
    pub fn translate(&self, lang: Language, key: &str) -> String {
        self.resolve(lang, key, None)
    }

    /// [`Catalog::translate`] with named Fluent arguments.
    pub fn translate_with(&self, lang: Language, key: &str, args: &FluentArgs) -> String {
        self.resolve(lang, key, Some(args))
    }

    /// Whether `lang` itself defines `key` (no fallback).
    pub fn contains(&self, lang: Language, key: &str) -> bool {
        self.lookup(lang, key, None).is_some()
    }

    fn resolve(&self, lang: Language, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(value) = self.lookup(lang, key, args) {
            return value;
        }
        if lang != FALLBACK_LANGUAGE {
            if let Some(value) = self.lookup(FALLBACK_LANGUAGE, key, args) {
                debug!("[i18n] `{key}` missing for {lang}; using {FALLBACK_LANGUAGE}");
                return value;
            }
        }
        warn!("[i18n] no translation for `{key}`");
        key.to_string()
    }

    fn lookup(&self, lang: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self
            .bundles
            .iter()
            .find(|(candidate, _)| *candidate == lang)
            .map(|(_, bundle)| bundle)?;
        let message = bundle.get_message(&message_id(key))?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!("[i18n] formatting `{key}` for {lang}: {errors:?}");
        }
        if value.is_empty() {
            None
        } else {
            Some(value.into_owned())
        }
    }
}

fn build_bundle(lang: Language, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            warn!("[i18n] {} parse error(s) in {lang} resource", errors.len());
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![lang.identifier()]);
    // Plain text output: no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        warn!("[i18n] {} duplicate message(s) in {lang} resource", errors.len());
    }
    bundle
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// First platform-requested locale we support, else the fallback.
pub fn requested_language() -> Language {
    requested_languages()
        .iter()
        .find_map(Language::from_identifier)
        .unwrap_or(FALLBACK_LANGUAGE)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Localization context shared down the component tree.
///
/// Reading through it subscribes the calling component to the active
/// language, so a language change re-renders every consumer.
#[derive(Clone, Copy)]
pub struct I18n {
    catalog: Signal<Catalog>,
    language: Signal<Language>,
}

impl I18n {
    /// Signals are owned by the current scope.
    pub fn new(catalog: Catalog, language: Language) -> Self {
        Self {
            catalog: Signal::new(catalog),
            language: Signal::new(language),
        }
    }

    pub fn language(&self) -> Language {
        (self.language)()
    }

    pub fn tr(&self, key: &str) -> String {
        let lang = self.language();
        self.catalog.read().translate(lang, key)
    }

    pub fn tr_args(&self, key: &str, args: &FluentArgs) -> String {
        let lang = self.language();
        self.catalog.read().translate_with(lang, key, args)
    }

    /// Switch the active language. Unknown codes leave the state untouched and
    /// return `false`.
    pub fn change_language(&self, code: &str) -> bool {
        let Some(next) = Language::from_code(code) else {
            debug!("[i18n] ignoring unsupported language code {code:?}");
            return false;
        };
        let mut language = self.language;
        if *language.peek() != next {
            info!("[i18n] language -> {next}");
            language.set(next);
        }
        true
    }
}

/// Create the localization context for this subtree. Call once, at the root.
pub fn use_i18n_provider(initial: impl FnOnce() -> Language) -> I18n {
    use_context_provider(|| I18n::new(Catalog::embedded(), initial()))
}

/// Localization context provided by an ancestor.
pub fn use_i18n() -> I18n {
    if let Some(i18n) = try_use_context::<I18n>() {
        return i18n;
    }

    // Mis-ordered providers: keep rendering with a local English context.
    warn!("[i18n] missing I18n context, using a local {FALLBACK_LANGUAGE} catalog");
    use_i18n_provider(|| FALLBACK_LANGUAGE)
}
