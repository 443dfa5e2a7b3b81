pub mod error;
pub mod group;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod report;
pub mod size;
pub mod sort;
pub mod table;
pub mod traits;

pub use error::{Result, SourceError};
pub use group::{group_by, group_nested, group_sums, sum_points, GroupKey, Groups};
pub use models::*;
pub use normalize::normalize;
pub use pagination::{fetch_all, fetch_all_pages, Page};
pub use report::{build_report, Section, View};
pub use size::{classify, Size, UNSIZED_POINTS};
pub use sort::{compare_issues, sort_issues};
pub use table::{Cell, Table};
pub use traits::IssueSource;
