use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Result, SiteError};

const PROJECTS_FILE: &str = "projects.json";

static GLOBAL_PROJECTS: LazyLock<Result<Vec<Project>>> = LazyLock::new(load_projects);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    /// Stand-in entry shipped until real project data replaces it.
    #[serde(default)]
    pub placeholder: bool,
}

/// Embedded project list, parsed on first use.
pub fn projects() -> Result<&'static [Project]> {
    GLOBAL_PROJECTS
        .as_ref()
        .map(Vec::as_slice)
        .map_err(Clone::clone)
}

fn load_projects() -> Result<Vec<Project>> {
    let file = Content::get(PROJECTS_FILE).ok_or(SiteError::ProjectsNotFound)?;
    parse_projects(&file.data)
}

fn parse_projects(data: &[u8]) -> Result<Vec<Project>> {
    Ok(serde_json::from_slice(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_projects_parse() {
        let projects = projects().expect("embedded projects should parse");
        assert!(!projects.is_empty());
        for p in projects {
            assert!(!p.title.is_empty());
            assert!(p.image.starts_with('/'));
            if p.placeholder {
                assert!(p.live.is_none() && p.repo.is_none(), "{} links nowhere real", p.title);
            } else {
                assert!(p.live.is_some() || p.repo.is_some(), "{} has no links", p.title);
            }
        }
    }

    #[test]
    fn test_project_images_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for p in projects().unwrap() {
            let path = public.join(p.image.trim_start_matches('/'));
            let bytes = std::fs::read(&path).expect("project image should be shipped");
            assert!(bytes.starts_with(b"\x89PNG"), "{} is not a png", path.display());
        }
    }

    #[test]
    fn test_optional_fields_default() {
        let data = br#"[{"title": "a", "description": "b", "image": "/c.png"}]"#;
        let projects = parse_projects(data).unwrap();
        assert_eq!(projects.len(), 1);
        assert!(projects[0].tags.is_empty());
        assert_eq!(projects[0].live, None);
        assert_eq!(projects[0].repo, None);
        assert!(!projects[0].placeholder);
    }

    #[test]
    fn test_malformed_projects() {
        let res = parse_projects(br#"[{"title": 1}]"#);
        assert!(matches!(res, Err(SiteError::ProjectsParse(_))));
    }
}
