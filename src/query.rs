use serde::Serialize;

pub const PULL_REQUESTS_LAST: u32 = 50;
pub const REVIEWS_FIRST: u32 = 100;
pub const REVIEW_REQUESTS_FIRST: u32 = 10;

const OPEN_PULL_REQUESTS: &str = r#"query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    pullRequests(last: 50, states: OPEN) {
      edges {
        node {
          id
          title
          updatedAt
          reviews(first: 100) {
            edges {
              node {
                id
                author {
                  avatarUrl
                  login
                  url
                }
              }
            }
          }
          reviewRequests(first: 10) {
            edges {
              node {
                id
                reviewer {
                  id
                  name
                  login
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RepoVars<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GraphQlPayload<'a> {
    pub query: &'static str,
    pub variables: RepoVars<'a>,
}

/// The one query this crate sends. Only the repository varies.
pub fn open_pull_requests<'a>(owner: &'a str, name: &'a str) -> GraphQlPayload<'a> {
    GraphQlPayload {
        query: OPEN_PULL_REQUESTS,
        variables: RepoVars { owner, name },
    }
}
