use crate::error::Result;
use crate::models::{RawIssue, Scope};
use crate::pagination::Page;

/// Remote source of labeled, open issues
///
/// Implementations fetch one page at a time; `page` is the cursor returned
/// by the previous call, or `None` for the first page.
pub trait IssueSource {
    fn fetch_page(&self, scope: &Scope, label: &str, page: Option<u32>) -> Result<Page<RawIssue>>;
}
