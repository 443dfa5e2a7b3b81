use std::collections::HashSet;

use crate::error::Result;
use crate::models::{RawIssue, Scope};
use crate::traits::IssueSource;

/// One page of results plus the cursor of the page after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` when this is the last page
    pub next: Option<u32>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }
}

/// Helper function to follow page cursors until no next page is indicated
///
/// Stops early when a page points back at a cursor already requested.
pub fn fetch_all_pages<T, F>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(Option<u32>) -> Result<Page<T>>,
{
    let mut all_results = Vec::new();
    let mut requested = HashSet::new();
    let mut cursor = None;

    loop {
        let page = fetch_page(cursor)?;
        all_results.extend(page.items);

        match page.next {
            Some(next) if requested.insert(next) => cursor = Some(next),
            _ => break,
        }
    }

    Ok(all_results)
}

/// Fetch every page of every scope, scopes in the order given
pub fn fetch_all(
    source: &dyn IssueSource,
    scopes: &[Scope],
    label: &str,
) -> Result<Vec<RawIssue>> {
    let mut all = Vec::new();
    for scope in scopes {
        all.extend(fetch_all_pages(|page| source.fetch_page(scope, label, page))?);
    }
    Ok(all)
}
