use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::models::Issue;

/// Primary report order: assignee, milestone, points (largest first), title
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    a.assignee()
        .cmp(b.assignee())
        .then_with(|| a.milestone().cmp(b.milestone()))
        .then_with(|| b.points().cmp(&a.points()))
        .then_with(|| a.title().cmp(b.title()))
}

/// Stable sort by [`compare_issues`]
pub fn sort_issues<T: Borrow<Issue>>(issues: &mut [T]) {
    issues.sort_by(|a, b| compare_issues(a.borrow(), b.borrow()));
}

/// Order group keys alphabetically ignoring case.
///
/// Keys equal under case folding fall back to exact comparison so the
/// order stays deterministic.
pub fn compare_keys_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
