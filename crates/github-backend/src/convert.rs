//! Model conversions from GitHub types to points-core types

use points_core::RawIssue;

use crate::models::GitHubIssue;

/// Convert a GitHub issue to a points-core RawIssue
///
/// The assignee is the login of the primary assignee.
impl From<GitHubIssue> for RawIssue {
    fn from(issue: GitHubIssue) -> Self {
        Self {
            title: issue.title,
            milestone: issue.milestone.map(|m| m.title),
            assignee: issue.assignee.map(|u| u.login),
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
            url: issue.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_issue(json: serde_json::Value) -> GitHubIssue {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn converts_full_issue() {
        let issue = github_issue(serde_json::json!({
            "id": 1, "number": 7, "title": "Add retries", "state": "open",
            "html_url": "https://github.com/acme/api/issues/7",
            "labels": [
                {"id": 1, "name": "planning", "color": "ededed", "description": null},
                {"id": 2, "name": "size/M", "color": "ededed", "description": null}
            ],
            "assignee": {"login": "alice", "id": 10},
            "assignees": [{"login": "alice", "id": 10}],
            "milestone": {"id": 3, "number": 3, "title": "0.31"},
            "pull_request": null
        }));

        let raw = RawIssue::from(issue);

        assert_eq!(raw.title, "Add retries");
        assert_eq!(raw.milestone.as_deref(), Some("0.31"));
        assert_eq!(raw.assignee.as_deref(), Some("alice"));
        assert_eq!(raw.labels, vec!["planning", "size/M"]);
        assert_eq!(raw.url, "https://github.com/acme/api/issues/7");
    }

    #[test]
    fn converts_bare_issue() {
        let issue = github_issue(serde_json::json!({
            "id": 1, "number": 8, "title": "Untriaged", "state": "open",
            "html_url": "https://github.com/acme/api/issues/8",
            "assignee": null,
            "milestone": null
        }));

        let raw = RawIssue::from(issue);

        assert!(raw.milestone.is_none());
        assert!(raw.assignee.is_none());
        assert!(raw.labels.is_empty());
    }

    #[test]
    fn converts_minimal_listing_entry() {
        // Only the fields the report reads; ids and numbers may be absent
        let issue = github_issue(serde_json::json!({
            "title": "Lean",
            "html_url": "https://github.com/acme/api/issues/9",
            "labels": [{"name": "size-s"}],
            "assignee": {"login": "bob"},
            "milestone": {"title": "0.32"}
        }));

        assert!(!issue.is_pull_request());
        let raw = RawIssue::from(issue);

        assert_eq!(raw.assignee.as_deref(), Some("bob"));
        assert_eq!(raw.milestone.as_deref(), Some("0.32"));
        assert_eq!(raw.labels, vec!["size-s"]);
    }
}
