use crate::error::FetchError;
use crate::query;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use std::sync::Arc;

#[derive(Clone)]
pub struct GithubClient {
    client: Arc<reqwest::Client>,
    graphql_url: String,
    owner: String,
    name: String,
}

impl GithubClient {
    pub fn new(
        token: &str,
        graphql_url: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("review-balancer"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("bearer {}", token))?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client: Arc::new(client),
            graphql_url: graphql_url.into(),
            owner: owner.into(),
            name: name.into(),
        })
    }

    pub fn repo_full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Sends the open pull requests query and returns the raw response body.
    ///
    /// The body is not inspected here; GraphQL-level errors still arrive as a
    /// successful response and are left to the parser.
    pub async fn fetch_query_result(&self) -> Result<Vec<u8>, FetchError> {
        let payload = query::open_pull_requests(&self.owner, &self.name);
        let response = self
            .client
            .post(&self.graphql_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(bytes.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::Status { status, body })
        }
    }
}
