//! Database identifiers and document resource names.
//!
//! A reference value names a document by database plus slash-separated
//! document path. On the wire it travels as a resource name of the form
//! `projects/{project}/databases/{database}/documents/{path}`.

use std::fmt;

/// Name of the database a project uses when none is specified.
pub const DEFAULT_DATABASE_ID: &str = "(default)";

/// Identifies a database: project plus database name.
///
/// The derived `Ord` compares the project first, then the database, which is
/// the ordering references use for their database component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatabaseId {
    pub project_id: String,
    pub database_id: String,
}

impl DatabaseId {
    /// Creates a database id.
    pub fn new(project_id: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database_id: database_id.into(),
        }
    }

    /// Creates an id for the default database of `project_id`.
    pub fn from_project(project_id: impl Into<String>) -> Self {
        Self::new(project_id, DEFAULT_DATABASE_ID)
    }

    /// Returns true if this names the project's default database.
    pub fn is_default_database(&self) -> bool {
        self.database_id == DEFAULT_DATABASE_ID
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_id, self.database_id)
    }
}

/// Splits a slash-separated document path into segments, skipping empty ones.
pub fn parse_document_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins document path segments with `/`.
pub fn format_document_path(segments: &[String]) -> String {
    segments.join("/")
}

/// Formats the full resource name of a document.
pub fn format_resource_name(database: &DatabaseId, path: &[String]) -> String {
    let mut name = format!(
        "projects/{}/databases/{}/documents",
        database.project_id, database.database_id
    );
    for segment in path {
        name.push('/');
        name.push_str(segment);
    }
    name
}

/// Parses a document resource name into its database and document path.
///
/// Returns `None` unless the name has the
/// `projects/{p}/databases/{d}/documents[/...]` shape.
pub fn parse_resource_name(name: &str) -> Option<(DatabaseId, Vec<String>)> {
    let mut parts = name.split('/');
    if parts.next()? != "projects" {
        return None;
    }
    let project = parts.next().filter(|p| !p.is_empty())?;
    if parts.next()? != "databases" {
        return None;
    }
    let database = parts.next().filter(|d| !d.is_empty())?;
    if parts.next()? != "documents" {
        return None;
    }
    let path = parts
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    Some((DatabaseId::new(project, database), path))
}
