use serde::Deserialize;

use super::label::GitHubLabel;

/// GitHub user (minimal representation)
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

/// GitHub milestone
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubMilestone {
    pub title: String,
}

/// GitHub pull request indicator (presence means the issue is actually a PR)
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubPullRequest {}

/// GitHub issue, as returned by the issue listing endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
    pub title: String,
    /// Web URL of the issue
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    pub assignee: Option<GitHubUser>,
    pub milestone: Option<GitHubMilestone>,
    /// If present (non-null), this "issue" is actually a pull request
    pub pull_request: Option<GitHubPullRequest>,
}

impl GitHubIssue {
    /// Returns true if this is actually a pull request, not an issue
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}
