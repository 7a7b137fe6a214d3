use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::i18n::{Language, FALLBACK_LANGUAGE};

/// Project identifier; the data file may use any JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of `projects.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Language code -> description.
    #[serde(default)]
    pub description: BTreeMap<String, String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

impl Project {
    /// Description for `lang`, else the fallback language's, else empty.
    pub fn describe(&self, lang: Language) -> &str {
        self.description_for(lang)
            .or_else(|| self.description_for(FALLBACK_LANGUAGE))
            .unwrap_or("")
    }

    fn description_for(&self, lang: Language) -> Option<&str> {
        self.description
            .get(lang.code())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn image(&self) -> Option<&str> {
        present(&self.image)
    }

    pub fn github_url(&self) -> Option<&str> {
        present(&self.github_url)
    }

    pub fn demo_url(&self) -> Option<&str> {
        present(&self.demo_url)
    }

    /// First character of the title, shown in place of a missing image.
    pub fn initial(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn describe_prefers_active_language() {
        let p = project(r#"{"id":1,"title":"A","description":{"en":"Hello","de":"Hallo"}}"#);
        assert_eq!(p.describe(Language::German), "Hallo");
        assert_eq!(p.describe(Language::English), "Hello");
    }

    #[test]
    fn describe_falls_back_to_english() {
        let p = project(r#"{"id":1,"title":"A","description":{"en":"Hello","de":""}}"#);
        assert_eq!(p.describe(Language::Spanish), "Hello");
        assert_eq!(p.describe(Language::German), "Hello");
    }

    #[test]
    fn describe_without_fallback_is_empty() {
        let p = project(r#"{"id":1,"title":"A","description":{"de":"Hallo"}}"#);
        assert_eq!(p.describe(Language::Spanish), "");
        let p = project(r#"{"id":1,"title":"A"}"#);
        assert_eq!(p.describe(Language::English), "");
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let p = project(r#"{"id":"etl","title":"Pipeline","description":{"en":"x"},"githubUrl":""}"#);
        assert_eq!(p.id, ProjectId::Text("etl".into()));
        assert!(p.technologies.is_empty());
        assert_eq!(p.image(), None);
        assert_eq!(p.github_url(), None);
        assert_eq!(p.demo_url(), None);
    }

    #[test]
    fn camel_case_urls_are_read() {
        let p = project(
            r#"{"id":2,"title":"B","description":{"en":"x"},
                "githubUrl":"https://github.com/x/b","demoUrl":"https://b.example"}"#,
        );
        assert_eq!(p.github_url(), Some("https://github.com/x/b"));
        assert_eq!(p.demo_url(), Some("https://b.example"));
        assert_eq!(p.id.to_string(), "2");
    }

    #[test]
    fn initial_is_first_character_as_written() {
        let p = project(r#"{"id":1,"title":"élan"}"#);
        assert_eq!(p.initial(), "é");
        let p = project(r#"{"id":1,"title":"Pipeline"}"#);
        assert_eq!(p.initial(), "P");
        let p = project(r#"{"id":1,"title":""}"#);
        assert_eq!(p.initial(), "");
    }

    #[test]
    fn negative_and_fractional_ids_are_accepted() {
        let projects = crate::projects::parse_projects(
            r#"[{"id":-1,"title":"A"},{"id":1.5,"title":"B"},{"id":"c","title":"C"}]"#,
        )
        .unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["-1", "1.5", "c"]);
    }
}
