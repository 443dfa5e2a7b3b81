use std::time::Duration;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Page size requested from the issue listing endpoints
pub const PER_PAGE: u32 = 50;

/// One page of issues plus the number of the next page, if any
#[derive(Debug, Clone)]
pub struct IssuePage {
    pub issues: Vec<GitHubIssue>,
    pub next_page: Option<u32>,
}

/// GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    // ==================== Issue Operations ====================

    /// List open issues carrying `label` across every repository of an organization
    ///
    /// Pull requests are filtered out.
    pub fn list_org_issues(&self, org: &str, label: &str, page: u32) -> Result<IssuePage> {
        let url = format!(
            "{}/orgs/{}/issues?filter=all&state=open&labels={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(org),
            urlencoding::encode(label),
            PER_PAGE,
            page
        );
        self.get_issue_page(&url)
    }

    /// List open issues carrying `label` in a single repository
    ///
    /// Pull requests are filtered out.
    pub fn list_repo_issues(
        &self,
        owner: &str,
        repo: &str,
        label: &str,
        page: u32,
    ) -> Result<IssuePage> {
        let url = format!(
            "{}/repos/{}/{}/issues?state=open&labels={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            urlencoding::encode(label),
            PER_PAGE,
            page
        );
        self.get_issue_page(&url)
    }

    fn get_issue_page(&self, url: &str) -> Result<IssuePage> {
        debug!(%url, "fetching issue page");

        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = check_response(response)?;
        let next_page = response
            .headers()
            .get("link")
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_from_link);
        let body = response.body_mut().read_to_string()?;
        let issues: Vec<GitHubIssue> = serde_json::from_str(&body)?;

        debug!(count = issues.len(), ?next_page, "received issue page");

        Ok(IssuePage {
            issues: issues
                .into_iter()
                .filter(|i| !i.is_pull_request())
                .collect(),
            next_page,
        })
    }
}

/// Map a non-success status to the matching error
///
/// A 403 only counts as rate limiting when the remaining quota is zero.
fn check_response(
    mut response: ureq::http::Response<ureq::Body>,
) -> Result<ureq::http::Response<ureq::Body>> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(response),
        401 => Err(GitHubError::Unauthorized),
        403 if quota_exhausted(&response) => Err(GitHubError::RateLimited),
        _ => {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            Err(GitHubError::Api {
                status,
                message: error_message(status, &body),
            })
        }
    }
}

fn quota_exhausted(response: &ureq::http::Response<ureq::Body>) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .is_some_and(|v| v.as_bytes() == b"0")
}

/// The `message` field of a GitHub error body, else the raw body
fn error_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string));

    match message {
        Some(message) => message,
        None if body.trim().is_empty() => format!("HTTP {}", status),
        None => body.trim().to_string(),
    }
}

/// Extract the `page` parameter of the `rel="next"` entry of a `Link` header
///
/// `<https://api.github.com/orgs/acme/issues?page=2&per_page=50>; rel="next", <...>; rel="last"`
pub fn next_page_from_link(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|p| p.trim() == r#"rel="next""#);
        if !is_next {
            return None;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let (_, query) = target.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .and_then(|n| n.parse().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_from_full_link_header() {
        let link = r#"<https://api.github.com/organizations/1/issues?labels=planning&page=2&per_page=50>; rel="next", <https://api.github.com/organizations/1/issues?labels=planning&page=4&per_page=50>; rel="last""#;
        assert_eq!(next_page_from_link(link), Some(2));
    }

    #[test]
    fn next_page_absent_on_last_page() {
        let link = r#"<https://api.github.com/orgs/acme/issues?page=1>; rel="first", <https://api.github.com/orgs/acme/issues?page=3>; rel="prev""#;
        assert_eq!(next_page_from_link(link), None);
    }

    #[test]
    fn next_page_ignores_per_page_param() {
        let link = r#"<https://x/issues?per_page=50&page=7>; rel="next""#;
        assert_eq!(next_page_from_link(link), Some(7));
    }

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(error_message(404, r#"{"message": "Not Found"}"#), "Not Found");
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(error_message(500, "upstream exploded\n"), "upstream exploded");
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(422, r#"{"errors": []}"#), r#"{"errors": []}"#);
    }

    #[test]
    fn next_page_garbage() {
        assert_eq!(next_page_from_link(""), None);
        assert_eq!(next_page_from_link("not a link"), None);
        assert_eq!(next_page_from_link(r#"<https://x/issues>; rel="next""#), None);
    }
}
