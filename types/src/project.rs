//! Project records and the immutable catalog that orders them.

use std::{fmt, slice};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single portfolio entry.
///
/// `year` and `image` are display strings only: neither is parsed nor checked
/// for existence. `company` and `collaborator` are genuinely optional and gate
/// whole lines of the preview conversation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    id: ProjectId,
    title: String,
    description: String,
    year: String,
    image: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    collaborator: Option<String>,
}

impl ProjectRecord {
    #[must_use]
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        year: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            year: year.into(),
            image: image.into(),
            company: None,
            collaborator: None,
        }
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn with_collaborator(mut self, collaborator: impl Into<String>) -> Self {
        self.collaborator = Some(collaborator.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    #[must_use]
    pub fn collaborator(&self) -> Option<&str> {
        self.collaborator.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("project id must be a positive integer")]
    ZeroId,
    #[error("project id {0} appears more than once")]
    DuplicateId(ProjectId),
    #[error("project {id} has an empty {field}")]
    EmptyField { id: ProjectId, field: &'static str },
}

/// Ordered, read-only sequence of projects.
///
/// Iteration order is display order. Once constructed there is no way to add,
/// remove, or reorder records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Validates ids and required text. Blank optional fields become absent.
    pub fn new(mut records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = Vec::with_capacity(records.len());
        for record in &mut records {
            if record.id.value() == 0 {
                return Err(CatalogError::ZeroId);
            }
            if seen.contains(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: record.id,
                    field: "title",
                });
            }
            if record.description.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: record.id,
                    field: "description",
                });
            }
            record.company = record.company.take().filter(|c| !c.trim().is_empty());
            record.collaborator = record
                .collaborator
                .take()
                .filter(|c| !c.trim().is_empty());
            seen.push(record.id);
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn position(&self, id: ProjectId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }
}

impl<'a> IntoIterator for &'a ProjectCatalog {
    type Item = &'a ProjectRecord;
    type IntoIter = slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, ProjectCatalog, ProjectId, ProjectRecord};

    fn record(id: u32, title: &str) -> ProjectRecord {
        ProjectRecord::new(ProjectId::new(id), title, "desc", "2024", "img")
    }

    #[test]
    fn keeps_insertion_order() {
        let catalog =
            ProjectCatalog::new(vec![record(3, "C"), record(1, "A"), record(2, "B")]).unwrap();
        let titles: Vec<_> = catalog.iter().map(ProjectRecord::title).collect();
        assert_eq!(titles, ["C", "A", "B"]);
        assert_eq!(catalog.position(ProjectId::new(1)), Some(1));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ProjectCatalog::new(vec![record(1, "A"), record(1, "B")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(ProjectId::new(1)));
    }

    #[test]
    fn rejects_zero_id() {
        let err = ProjectCatalog::new(vec![record(0, "A")]).unwrap_err();
        assert_eq!(err, CatalogError::ZeroId);
    }

    #[test]
    fn rejects_blank_title() {
        let err = ProjectCatalog::new(vec![record(4, "   ")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyField {
                id: ProjectId::new(4),
                field: "title"
            }
        );
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = ProjectCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get(ProjectId::new(1)).is_none());
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let plain = record(1, "A");
        assert_eq!(plain.company(), None);
        assert_eq!(plain.collaborator(), None);

        let full = record(2, "B")
            .with_company("Apple")
            .with_collaborator("Design Team");
        assert_eq!(full.company(), Some("Apple"));
        assert_eq!(full.collaborator(), Some("Design Team"));
    }

    #[test]
    fn blank_optional_fields_become_absent() {
        let catalog = ProjectCatalog::new(vec![
            record(1, "A").with_company("").with_collaborator("   "),
            record(2, "B").with_company(" Apple "),
        ])
        .unwrap();

        let first = catalog.get(ProjectId::new(1)).unwrap();
        assert_eq!(first.company(), None);
        assert_eq!(first.collaborator(), None);

        // Non-blank values are kept as written.
        let second = catalog.get(ProjectId::new(2)).unwrap();
        assert_eq!(second.company(), Some(" Apple "));
    }
}
