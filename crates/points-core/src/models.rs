use serde::{Deserialize, Serialize};
use std::fmt;

/// Milestone value for issues that have no milestone
pub const NO_MILESTONE: &str = "(none)";

/// Display name used for the empty assignee key
pub const UNASSIGNED: &str = "(unassigned)";

/// An issue as delivered by a fetch collaborator, before classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIssue {
    pub title: String,
    pub milestone: Option<String>,
    /// Assignee login, if the issue is assigned
    pub assignee: Option<String>,
    /// Label names, in the order the tracker returned them
    #[serde(default)]
    pub labels: Vec<String>,
    /// Canonical web URL of the issue
    pub url: String,
}

/// Normalized issue used for planning reports
///
/// Built once per fetched record and never mutated afterwards; the
/// fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    title: String,
    milestone: String,
    assignee: String,
    points: u32,
    url: String,
}

impl Issue {
    pub fn new(
        title: impl Into<String>,
        milestone: impl Into<String>,
        assignee: impl Into<String>,
        points: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            milestone: milestone.into(),
            assignee: assignee.into(),
            points,
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Milestone title, or [`NO_MILESTONE`]
    pub fn milestone(&self) -> &str {
        &self.milestone
    }

    /// Assignee login, empty when unassigned
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Where to look for labeled issues
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every repository of an organization
    Organization(String),
    /// A single repository
    Repository { owner: String, name: String },
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Organization(org) => write!(f, "organization {}", org),
            Scope::Repository { owner, name } => write!(f, "repository {}/{}", owner, name),
        }
    }
}

/// Name shown for an assignee key in titles and row labels
pub fn display_assignee(assignee: &str) -> &str {
    if assignee.is_empty() {
        UNASSIGNED
    } else {
        assignee
    }
}
