use crate::models::{Issue, RawIssue, NO_MILESTONE};
use crate::size::classify;

/// Turn a fetched record into a normalized [`Issue`].
///
/// Missing optional fields degrade to defaults: no milestone becomes
/// [`NO_MILESTONE`], no assignee becomes the empty string.
pub fn normalize(raw: RawIssue) -> Issue {
    let points = classify(&raw.labels);

    Issue::new(
        raw.title,
        raw.milestone.unwrap_or_else(|| NO_MILESTONE.to_string()),
        raw.assignee.unwrap_or_default(),
        points,
        raw.url,
    )
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        normalize(raw)
    }
}
