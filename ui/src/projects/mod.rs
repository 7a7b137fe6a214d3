mod card;
pub use card::ProjectCard;

mod grid;
pub use grid::ProjectGrid;

mod model;
pub use model::{Project, ProjectId};

mod source;
pub use source::{load_projects, parse_projects, ProjectError, ProjectSource, PROJECTS_FILE};

use dioxus::logger::tracing::{debug, error};

/// Lifecycle of the one project fetch a `Projects` section performs.
///
/// `Idle -> Loading -> Loaded | Failed`; once settled it never changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Project>),
    Failed(String),
}

impl LoadState {
    /// Move to `Loading`. Only the first call from `Idle` succeeds.
    pub fn begin(&mut self) -> bool {
        if *self != LoadState::Idle {
            return false;
        }
        *self = LoadState::Loading;
        true
    }

    /// Record the fetch outcome. Ignored unless the fetch is in flight.
    pub fn settle(&mut self, result: Result<Vec<Project>, ProjectError>) -> bool {
        if *self != LoadState::Loading {
            debug!("[projects] ignoring result while {}", self.label());
            return false;
        }
        *self = match result {
            Ok(projects) => {
                debug!("[projects] loaded {} project(s)", projects.len());
                LoadState::Loaded(projects)
            }
            Err(err) => {
                error!("[projects] error loading projects: {err}");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    /// Records to render; empty until loaded.
    pub fn projects(&self) -> &[Project] {
        match self {
            LoadState::Loaded(projects) => projects,
            _ => &[],
        }
    }

    /// Whether the empty-state placeholder should be shown.
    pub fn shows_placeholder(&self) -> bool {
        self.projects().is_empty()
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}
