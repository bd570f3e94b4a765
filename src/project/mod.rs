//! Project catalog: the content behind the menu and project views.

use crate::foundation::error::{DotMatrixError, DotMatrixResult};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const BUILTIN_PROJECTS_JSON: &str = include_str!("../../assets/projects.json");

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Credit {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Media attached to a project. Only carried through for the host's overlay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Media {
    Vimeo {
        #[serde(rename = "vimeo-id")]
        vimeo_id: String,
    },
    Image {
        url: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "name-short")]
    pub name_short: String,
    #[serde(default)]
    pub credit: Vec<Credit>,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Project {
    /// Short name on narrow grids.
    pub fn display_name(&self, mobile: bool) -> &str {
        if mobile { &self.name_short } else { &self.name }
    }
}

/// Read-only access to project content.
pub trait ProjectSource {
    /// Projects in menu order.
    fn list_projects(&self) -> &[Project];

    fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.list_projects().iter().find(|p| p.id == id)
    }
}

/// JSON-backed catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> DotMatrixResult<Self> {
        let out = Self { projects };
        out.validate()?;
        Ok(out)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> DotMatrixResult<Self> {
        Self::from_json_str(BUILTIN_PROJECTS_JSON)
    }

    pub fn from_json_str(s: &str) -> DotMatrixResult<Self> {
        let out: Self = serde_json::from_str(s)
            .map_err(|e| DotMatrixError::serde(format!("parse projects JSON: {e}")))?;
        out.validate()?;
        Ok(out)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> DotMatrixResult<Self> {
        let out: Self = serde_json::from_reader(r)
            .map_err(|e| DotMatrixError::serde(format!("parse projects JSON: {e}")))?;
        out.validate()?;
        Ok(out)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DotMatrixResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DotMatrixError::config(format!("open projects JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> DotMatrixResult<()> {
        let mut seen = BTreeSet::new();
        for p in &self.projects {
            if p.id.is_empty() {
                return Err(DotMatrixError::validation("project id must not be empty"));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(DotMatrixError::validation(format!(
                    "duplicate project id '{}'",
                    p.id
                )));
            }
        }
        Ok(())
    }
}

impl ProjectSource for ProjectCatalog {
    fn list_projects(&self) -> &[Project] {
        &self.projects
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/project.rs"]
mod tests;
