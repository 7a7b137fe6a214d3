//! Server-side renders of the page sections against in-memory contexts.

use dioxus::prelude::*;
use futures::executor::block_on;

use ui::components::Navbar;
use ui::core::storage::{MemoryBackend, Preferences};
use ui::core::theme::DARK_MODE_KEY;
use ui::i18n::{use_i18n_provider, Language};
use ui::projects::{parse_projects, Project, ProjectGrid, ProjectSource};
use ui::views::Home;

const TWO_PROJECTS: &str = r#"[
    {"id": 1, "title": "Churn Model", "description": {"en": "Predicts churn", "de": "Sagt Kündigungen voraus"},
     "technologies": ["Python", "XGBoost"], "githubUrl": "https://github.com/pabloogl/churn"},
    {"id": 2, "title": "Event Pipeline", "description": {"en": "Streams events"},
     "technologies": ["Kafka"], "demoUrl": "https://example.com/demo"}
]"#;

#[derive(Props, Clone, PartialEq)]
struct PageProps {
    lang: Language,
    backend: MemoryBackend,
    source: ProjectSource,
}

#[allow(non_snake_case)]
fn Page(props: PageProps) -> Element {
    let lang = props.lang;
    use_i18n_provider(move || lang);
    use_context_provider(|| Preferences::new(props.backend.clone()));
    use_context_provider(|| props.source.clone());

    rsx! {
        Navbar {}
        Home {}
    }
}

#[derive(Props, Clone, PartialEq)]
struct GridProps {
    lang: Language,
    projects: Vec<Project>,
}

#[allow(non_snake_case)]
fn Grid(props: GridProps) -> Element {
    let lang = props.lang;
    use_i18n_provider(move || lang);

    rsx! {
        ProjectGrid { projects: props.projects.clone() }
    }
}

fn page(lang: Language, backend: MemoryBackend, source: ProjectSource) -> VirtualDom {
    let mut dom = VirtualDom::new_with_props(
        Page,
        PageProps {
            lang,
            backend,
            source,
        },
    );
    dom.rebuild_in_place();
    dom
}

fn grid(lang: Language, projects: Vec<Project>) -> String {
    let mut dom = VirtualDom::new_with_props(Grid, GridProps { lang, projects });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn grid_renders_one_card_per_record_in_order() {
    let html = grid(Language::English, parse_projects(TWO_PROJECTS).unwrap());

    assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
    let first = html.find("Churn Model").unwrap();
    let second = html.find("Event Pipeline").unwrap();
    assert!(first < second);
    assert!(!html.contains("Loading projects..."));
}

#[test]
fn grid_shows_links_only_when_present() {
    let html = grid(Language::English, parse_projects(TWO_PROJECTS).unwrap());

    assert_eq!(html.matches("View Code").count(), 1);
    assert_eq!(html.matches("Live Demo").count(), 1);
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    // Decorative icons stay out of the accessibility tree.
    assert!(html.contains(r#"aria-hidden="true""#));
}

#[test]
fn card_description_follows_language_with_english_fallback() {
    let html = grid(Language::German, parse_projects(TWO_PROJECTS).unwrap());

    assert!(html.contains("Sagt Kündigungen voraus"));
    // No German text for the second record.
    assert!(html.contains("Streams events"));
}

#[test]
fn empty_grid_shows_placeholder() {
    let html = grid(Language::English, vec![]);

    assert!(html.contains("Loading projects..."));
    assert!(!html.contains(r#"class="project-card""#));
}

#[test]
fn first_render_persists_dark_default() {
    let backend = MemoryBackend::new();
    let dom = page(
        Language::English,
        backend.clone(),
        ProjectSource::Inline("[]".into()),
    );
    let html = dioxus_ssr::render(&dom);

    assert_eq!(backend.get(DARK_MODE_KEY).as_deref(), Some("true"));
    assert!(html.contains("navbar--dark"));
    assert!(html.contains("Home"));
    assert!(html.contains("Loading projects..."));
}

#[test]
fn stored_light_preference_is_restored() {
    let backend = MemoryBackend::with_entry(DARK_MODE_KEY, "false");
    let dom = page(
        Language::English,
        backend.clone(),
        ProjectSource::Inline("[]".into()),
    );
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("navbar--light"));
    assert_eq!(backend.get(DARK_MODE_KEY).as_deref(), Some("false"));
}

#[test]
fn german_page_uses_german_strings() {
    let dom = page(
        Language::German,
        MemoryBackend::new(),
        ProjectSource::Inline("[]".into()),
    );
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Start"));
    assert!(html.contains("Projekte"));
    assert!(html.contains(r#"lang="de""#));
    assert!(!html.contains("Loading projects..."));
}

#[test]
fn projects_section_renders_fetched_records() {
    let mut dom = page(
        Language::English,
        MemoryBackend::new(),
        ProjectSource::Inline(TWO_PROJECTS.into()),
    );
    assert!(dioxus_ssr::render(&dom).contains("Loading projects..."));

    block_on(dom.wait_for_work());
    dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
    assert!(!html.contains("Loading projects..."));
}

#[test]
fn malformed_data_leaves_placeholder() {
    let mut dom = page(
        Language::English,
        MemoryBackend::new(),
        ProjectSource::Inline("{ not json".into()),
    );

    block_on(dom.wait_for_work());
    dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Loading projects..."));
    assert!(html.contains("Skills"));
}

#[test]
fn any_numeric_id_still_renders_every_card() {
    let mut dom = page(
        Language::English,
        MemoryBackend::new(),
        ProjectSource::Inline(r#"[{"id":-1,"title":"Negative"},{"id":1.5,"title":"Fraction"}]"#.into()),
    );

    block_on(dom.wait_for_work());
    dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches(r#"class="project-card""#).count(), 2);
    assert!(html.contains("Negative"));
    assert!(html.contains("Fraction"));
}
