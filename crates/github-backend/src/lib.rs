pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::{GitHubClient, IssuePage, DEFAULT_BASE_URL, PER_PAGE};
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export points-core types for convenience
pub use points_core::{IssueSource, SourceError};
