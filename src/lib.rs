//! Polls the GitHub GraphQL API for the open pull requests of one repository
//! and derives how many reviews each reviewer has pending and done.
pub mod config;
pub mod error;
pub mod github_client;
pub mod logging;
pub mod models;
pub mod parser;
pub mod query;
pub mod refresh;
pub mod render;
pub mod reviewers;
pub mod snapshot;

pub use error::{ConfigError, FetchError, ParseError};
pub use models::{PullRequest, Reviewer, ReviewerLoad};
pub use parser::parse_response;
pub use reviewers::{prs_reviewed, prs_to_review};
