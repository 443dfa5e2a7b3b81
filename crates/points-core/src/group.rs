//! Partitioning issues by assignee or milestone

use indexmap::IndexMap;

use crate::models::Issue;

/// Issues partitioned by a key, in first-seen key order
pub type Groups<'a> = IndexMap<&'a str, Vec<&'a Issue>>;

/// Field an issue is grouped on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Assignee,
    Milestone,
}

impl GroupKey {
    /// The key value of an issue, taken as-is
    pub fn of<'a>(&self, issue: &'a Issue) -> &'a str {
        match self {
            GroupKey::Assignee => issue.assignee(),
            GroupKey::Milestone => issue.milestone(),
        }
    }
}

/// Partition issues by `key`.
///
/// Every issue lands in exactly one group and keeps its relative order
/// within that group. Keys are compared exactly, so `Alice` and `alice`
/// are distinct groups.
pub fn group_by<'a, I>(issues: I, key: GroupKey) -> Groups<'a>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut groups = Groups::new();
    for issue in issues {
        groups.entry(key.of(issue)).or_default().push(issue);
    }
    groups
}

/// Group by `outer`, then group each outer bucket again by `inner`
pub fn group_nested<'a, I>(
    issues: I,
    outer: GroupKey,
    inner: GroupKey,
) -> IndexMap<&'a str, Groups<'a>>
where
    I: IntoIterator<Item = &'a Issue>,
{
    group_by(issues, outer)
        .into_iter()
        .map(|(key, bucket)| (key, group_by(bucket, inner)))
        .collect()
}

pub fn sum_points<'a, I>(issues: I) -> u64
where
    I: IntoIterator<Item = &'a Issue>,
{
    issues.into_iter().map(|i| u64::from(i.points())).sum()
}

/// Point total of each group, in the same key order
pub fn group_sums<'a>(groups: &Groups<'a>) -> IndexMap<&'a str, u64> {
    groups
        .iter()
        .map(|(key, bucket)| (*key, sum_points(bucket.iter().copied())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: &str, assignee: &str, milestone: &str, points: u32) -> Issue {
        Issue::new(title, milestone, assignee, points, format!("https://x/{}", title))
    }

    fn sample() -> Vec<Issue> {
        vec![
            issue("a", "bob", "0.32", 5),
            issue("b", "alice", "0.31", 10),
            issue("c", "bob", "0.31", 1),
            issue("d", "", "(none)", 500),
            issue("e", "alice", "0.31", 5),
            issue("f", "Alice", "0.32", 1),
        ]
    }

    #[test]
    fn group_by_partitions_exactly() {
        // Arrange
        let issues = sample();
        // Act
        let groups = group_by(&issues, GroupKey::Assignee);
        // Assert: no loss, no duplication
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, issues.len());
        for issue in &issues {
            let hits = groups
                .values()
                .flatten()
                .filter(|i| std::ptr::eq(**i, issue))
                .count();
            assert_eq!(hits, 1, "{} should appear once", issue.title());
        }
    }

    #[test]
    fn group_by_keeps_first_seen_order() {
        let issues = sample();
        let groups = group_by(&issues, GroupKey::Assignee);

        let keys: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["bob", "alice", "", "Alice"]);

        let bob: Vec<&str> = groups["bob"].iter().map(|i| i.title()).collect();
        assert_eq!(bob, vec!["a", "c"]);
        let alice: Vec<&str> = groups["alice"].iter().map(|i| i.title()).collect();
        assert_eq!(alice, vec!["b", "e"]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let issues = sample();
        let groups = group_by(&issues, GroupKey::Assignee);
        assert_eq!(groups["Alice"].len(), 1);
        assert_eq!(groups["alice"].len(), 2);
    }

    #[test]
    fn group_by_empty() {
        let issues: Vec<Issue> = Vec::new();
        assert!(group_by(&issues, GroupKey::Milestone).is_empty());
    }

    #[test]
    fn group_sums_per_key() {
        let issues = sample();
        let sums = group_sums(&group_by(&issues, GroupKey::Milestone));
        assert_eq!(sums["0.31"], 16);
        assert_eq!(sums["0.32"], 6);
        assert_eq!(sums["(none)"], 500);
        assert_eq!(sums.values().sum::<u64>(), sum_points(&issues));
    }

    #[test]
    fn nested_sums_match_issues_sharing_both_keys() {
        // Arrange
        let issues = sample();
        // Act
        let nested = group_nested(&issues, GroupKey::Assignee, GroupKey::Milestone);
        // Assert
        for (assignee, by_milestone) in &nested {
            for (milestone, sum) in group_sums(by_milestone) {
                let expected = sum_points(
                    issues
                        .iter()
                        .filter(|i| i.assignee() == *assignee && i.milestone() == milestone),
                );
                assert_eq!(sum, expected);
            }
        }
        assert_eq!(group_sums(&nested["alice"])["0.31"], 15);
        assert!(!nested["alice"].contains_key("0.32"));
    }

    #[test]
    fn nested_grouping_composes_on_borrowed_buckets() {
        let issues = sample();
        let by_milestone = group_by(&issues, GroupKey::Milestone);
        let inner = group_by(by_milestone["0.31"].iter().copied(), GroupKey::Assignee);
        let keys: Vec<&str> = inner.keys().copied().collect();
        assert_eq!(keys, vec!["alice", "bob"]);
    }
}
