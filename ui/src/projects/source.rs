use std::path::PathBuf;

use super::model::Project;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("could not fetch `{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("`{url}' answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read `{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode project data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fetching `{0}' over HTTP is not supported on this platform")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, ProjectError>;

/// Where the project list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// HTTP fetch (web builds).
    Url(String),
    /// File on disk (desktop builds).
    File(PathBuf),
    /// Raw JSON held in memory.
    Inline(String),
}

impl ProjectSource {
    /// The bundled `projects.json` asset, fetched like any other static file.
    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self::Url(crate::PROJECTS_DATA.to_string())
    }

    /// `projects.json` inside the resource directory next to the binary.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        Self::File(crate::resource_dir().join(PROJECTS_FILE))
    }
}

/// Path of the data file relative to the resource directory.
pub const PROJECTS_FILE: &str = "data/projects.json";

/// Parse the data file: a JSON array of project records, order preserved.
pub fn parse_projects(raw: &str) -> Result<Vec<Project>> {
    Ok(serde_json::from_str(raw)?)
}

/// Fetch and parse the project list once.
pub async fn load_projects(source: &ProjectSource) -> Result<Vec<Project>> {
    let raw = match source {
        ProjectSource::Url(url) => fetch_text(url).await?,
        ProjectSource::File(path) => std::fs::read_to_string(path).map_err(|source| {
            ProjectError::Io {
                path: path.clone(),
                source,
            }
        })?,
        ProjectSource::Inline(raw) => raw.clone(),
    };
    parse_projects(&raw)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let fail = |err: JsValue| ProjectError::Fetch {
        url: url.to_string(),
        reason: format!("{err:?}"),
    };

    let window = web_sys::window().ok_or_else(|| ProjectError::Fetch {
        url: url.to_string(),
        reason: "window unavailable".into(),
    })?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fail)?
        .dyn_into()
        .map_err(fail)?;

    if !response.ok() {
        return Err(ProjectError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fail)?)
        .await
        .map_err(fail)?;
    body.as_string().ok_or_else(|| ProjectError::Fetch {
        url: url.to_string(),
        reason: "response body is not text".into(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<String> {
    Err(ProjectError::Unsupported(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn inline_array_keeps_source_order() {
        let source = ProjectSource::Inline(
            r#"[{"id":2,"title":"B"},{"id":1,"title":"A"},{"id":3,"title":"C"}]"#.into(),
        );
        let projects = block_on(load_projects(&source)).unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn empty_array_is_not_an_error() {
        let source = ProjectSource::Inline("[]".into());
        assert!(block_on(load_projects(&source)).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let source = ProjectSource::Inline("<!doctype html>".into());
        assert!(matches!(
            block_on(load_projects(&source)),
            Err(ProjectError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ProjectSource::File(dir.path().join("missing.json"));
        assert!(matches!(
            block_on(load_projects(&source)),
            Err(ProjectError::Io { .. })
        ));
    }

    #[test]
    fn file_source_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        std::fs::write(&path, r#"[{"id":1,"title":"On disk"}]"#).unwrap();
        let projects = block_on(load_projects(&ProjectSource::File(path))).unwrap();
        assert_eq!(projects[0].title, "On disk");
    }

    #[test]
    fn url_source_is_unsupported_natively() {
        let source = ProjectSource::Url("./projects.json".into());
        assert!(matches!(
            block_on(load_projects(&source)),
            Err(ProjectError::Unsupported(_))
        ));
    }

    #[test]
    fn schema_mismatch_is_reported_as_decode_failure() {
        let err = parse_projects(r#"[{"id":true,"title":"A"}]"#).unwrap_err();
        assert!(matches!(err, ProjectError::Parse(_)));
        assert!(err.to_string().starts_with("could not decode project data"));
    }
}
