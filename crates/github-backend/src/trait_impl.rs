//! IssueSource trait implementation for GitHubClient

use points_core::{IssueSource, Page, RawIssue, Result, Scope};
use tracing::debug;

use crate::client::GitHubClient;

impl IssueSource for GitHubClient {
    fn fetch_page(&self, scope: &Scope, label: &str, page: Option<u32>) -> Result<Page<RawIssue>> {
        let page = page.unwrap_or(1);
        debug!(%scope, label, page, "listing labeled issues");

        let result = match scope {
            Scope::Organization(org) => self.list_org_issues(org, label, page),
            Scope::Repository { owner, name } => self.list_repo_issues(owner, name, label, page),
        }?;

        Ok(Page {
            items: result.issues.into_iter().map(RawIssue::from).collect(),
            next: result.next_page,
        })
    }
}
