//! Report views over a materialized issue list
//!
//! Every view is a pure function of the issues; an empty list produces
//! empty tables with zero totals.

use crate::group::{group_by, group_nested, group_sums, sum_points, GroupKey};
use crate::models::{display_assignee, Issue};
use crate::sort::{compare_keys_folded, sort_issues};
use crate::table::{Cell, Table};

pub const ALL_ISSUES_TITLE: &str = "All Issues";
pub const TEAM_TOTAL_LABEL: &str = "Total for Team";
pub const AVERAGE_LABEL: &str = "Average per milestone";
pub const TOTAL_LABEL: &str = "Total";

/// Which tables a report run prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Per-assignee tables followed by the milestone cross-tab
    #[default]
    Summary,
    /// One flat table with every issue
    All,
    /// Only the per-assignee tables
    Assignee,
    /// Only the milestone cross-tab
    Milestone,
}

/// A headed group of tables in the rendered report
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: Option<String>,
    pub tables: Vec<Table>,
}

pub fn build_report(issues: &[Issue], view: View) -> Vec<Section> {
    let per_assignee = || Section {
        heading: Some("Points Per-Assignee".to_string()),
        tables: per_assignee_tables(issues),
    };
    let per_milestone = || Section {
        heading: Some("Points Per-Milestone".to_string()),
        tables: vec![milestone_cross_tab(issues)],
    };

    match view {
        View::Summary => vec![per_assignee(), per_milestone()],
        View::All => {
            let all: Vec<&Issue> = issues.iter().collect();
            vec![Section {
                heading: None,
                tables: vec![issues_table(ALL_ISSUES_TITLE, all)],
            }]
        }
        View::Assignee => vec![per_assignee()],
        View::Milestone => vec![per_milestone()],
    }
}

/// Flat table of issues in primary sort order.
///
/// The footer holds the grand total followed by one subtotal line per
/// milestone, milestones in ascending order.
pub fn issues_table(title: impl Into<String>, mut issues: Vec<&Issue>) -> Table {
    sort_issues(&mut issues);

    let mut table = Table::new(title, ["Issue", "Milestone", "Assignee", "Points", "URL"]);
    for issue in &issues {
        table.push_row(vec![
            Cell::text(issue.title()),
            Cell::text(issue.milestone()),
            Cell::text(issue.assignee()),
            Cell::Points(u64::from(issue.points())),
            Cell::text(issue.url()),
        ]);
    }
    table.total = sum_points(issues.iter().copied());

    table.push_footer(vec![
        Cell::Empty,
        Cell::Empty,
        Cell::text(TOTAL_LABEL),
        Cell::Points(table.total),
    ]);

    let mut per_milestone: Vec<(&str, u64)> =
        group_sums(&group_by(issues.iter().copied(), GroupKey::Milestone))
            .into_iter()
            .collect();
    per_milestone.sort_by(|a, b| a.0.cmp(b.0));

    for (milestone, points) in per_milestone {
        table.push_footer(vec![
            Cell::Empty,
            Cell::Empty,
            Cell::Text(format!("Points for {}", milestone)),
            Cell::Points(points),
        ]);
    }

    table
}

/// One table per assignee, assignees ordered ignoring case
pub fn per_assignee_tables(issues: &[Issue]) -> Vec<Table> {
    let mut groups: Vec<(&str, Vec<&Issue>)> =
        group_by(issues, GroupKey::Assignee).into_iter().collect();
    groups.sort_by(|a, b| compare_keys_folded(a.0, b.0));

    groups
        .into_iter()
        .map(|(assignee, bucket)| {
            issues_table(format!("Issues for {}", display_assignee(assignee)), bucket)
        })
        .collect()
}

/// Assignees as rows, milestones as columns, point subtotals in the cells
pub fn milestone_cross_tab(issues: &[Issue]) -> Table {
    let mut milestones: Vec<&str> = group_by(issues, GroupKey::Milestone)
        .keys()
        .copied()
        .collect();
    milestones.sort();

    let mut by_assignee: Vec<_> = group_nested(issues, GroupKey::Assignee, GroupKey::Milestone)
        .into_iter()
        .collect();
    by_assignee.sort_by(|a, b| compare_keys_folded(a.0, b.0));

    let mut columns = vec!["Assignee".to_string()];
    columns.extend(milestones.iter().map(|m| m.to_string()));
    columns.push(TOTAL_LABEL.to_string());
    let mut table = Table::new(TEAM_TOTAL_LABEL, columns);

    let mut column_totals = vec![0u64; milestones.len()];
    for (assignee, by_milestone) in &by_assignee {
        let sums = group_sums(by_milestone);
        let mut row = vec![Cell::text(display_assignee(assignee))];
        let mut row_total = 0;
        for (idx, milestone) in milestones.iter().enumerate() {
            let points = sums.get(milestone).copied().unwrap_or(0);
            column_totals[idx] += points;
            row_total += points;
            row.push(Cell::Points(points));
        }
        row.push(Cell::Points(row_total));
        table.push_row(row);
    }

    table.total = column_totals.iter().sum();

    let mut footer = vec![Cell::text(TEAM_TOTAL_LABEL)];
    footer.extend(column_totals.iter().map(|t| Cell::Points(*t)));
    footer.push(Cell::Points(table.total));
    table.push_footer(footer);

    if let Some(average) = average_per_milestone(table.total, milestones.len()) {
        let mut row = vec![Cell::text(AVERAGE_LABEL)];
        row.resize(table.width() - 1, Cell::Empty);
        row.push(Cell::Decimal(average));
        table.push_footer(row);
    }

    table
}

/// Total points divided by the number of distinct milestones
pub fn average_per_milestone(total: u64, milestones: usize) -> Option<f64> {
    if milestones == 0 {
        None
    } else {
        Some(total as f64 / milestones as f64)
    }
}
