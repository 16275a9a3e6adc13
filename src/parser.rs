//! Turns a GraphQL response body into [`PullRequest`]s.
//!
//! Every field below `data` is optional. A missing or mistyped field drops the
//! branch it guards and traversal moves on to the next sibling edge.
use crate::error::ParseError;
use crate::models::{PullRequest, Reviewer};
use serde_json::Value;

/// Walks `path` through nested objects, yielding `None` at the first missing
/// key or non-object step.
fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    at(value, path)?.as_str().map(str::to_owned)
}

/// Nodes of a GraphQL connection (`{ "edges": [ { "node": .. } ] }`).
fn nodes<'a>(connection: Option<&'a Value>) -> impl Iterator<Item = &'a Value> {
    connection
        .and_then(|c| at(c, &["edges"]))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|edge| at(edge, &["node"]))
}

fn requested_reviewer(node: &Value) -> Option<Reviewer> {
    let reviewer = at(node, &["reviewer"])?;
    let login = string_at(reviewer, &["login"])?;
    Some(Reviewer::new(login).with_name(string_at(reviewer, &["name"])))
}

fn review_author(node: &Value) -> Option<Reviewer> {
    let author = at(node, &["author"])?;
    let login = string_at(author, &["login"])?;
    Some(Reviewer::new(login).with_avatar_url(string_at(author, &["avatarUrl"])))
}

fn pull_request(node: &Value) -> Option<PullRequest> {
    let id = string_at(node, &["id"])?;
    let title = string_at(node, &["title"])?;

    let mut pr = PullRequest::new(id, title);
    pr.updated_at = string_at(node, &["updatedAt"]);
    pr.reviewers_requested = nodes(at(node, &["reviewRequests"]))
        .filter_map(requested_reviewer)
        .collect();
    pr.reviewers_reviewed = nodes(at(node, &["reviews"]))
        .filter_map(review_author)
        .collect();
    Some(pr)
}

fn log_graphql_errors(root: &Value) {
    let Some(errors) = root.get("errors").and_then(Value::as_array) else {
        return;
    };
    for error in errors {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("<no message>");
        log::debug!("GraphQL error in response: {}", message);
    }
}

/// Parses `bytes`, reporting top-level failures as [`ParseError`].
pub fn try_parse_response(bytes: &[u8]) -> Result<Vec<PullRequest>, ParseError> {
    let root: Value = serde_json::from_slice(bytes)?;
    if !root.is_object() {
        return Err(ParseError::NotAnObject);
    }
    log_graphql_errors(&root);

    let data = root.get("data").ok_or(ParseError::MissingData)?;
    let pull_requests = at(data, &["repository", "pullRequests"]);
    Ok(nodes(pull_requests).filter_map(pull_request).collect())
}

/// Parses `bytes` into pull requests in response order.
///
/// Never fails: a malformed payload is logged and yields an empty list.
pub fn parse_response(bytes: &[u8]) -> Vec<PullRequest> {
    try_parse_response(bytes).unwrap_or_else(|e| {
        log::warn!("Discarding response: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(nodes: Value) -> Vec<u8> {
        let edges: Vec<Value> = nodes
            .as_array()
            .unwrap()
            .iter()
            .map(|n| json!({ "node": n }))
            .collect();
        json!({ "data": { "repository": { "pullRequests": { "edges": edges } } } })
            .to_string()
            .into_bytes()
    }

    fn logins(reviewers: &[Reviewer]) -> Vec<&str> {
        reviewers.iter().map(|r| r.login.as_str()).collect()
    }

    #[test]
    fn requires_id_and_title() {
        let bytes = wrap(json!([
            { "id": "1", "title": "kept" },
            { "id": "2" },
            { "title": "no id" },
            { "id": null, "title": "null id" },
            { "id": "5", "title": null },
            { "id": 6, "title": "numeric id" },
            { "id": "7", "title": "also kept", "reviews": "not a connection" },
        ]));
        let prs = parse_response(&bytes);
        let ids: Vec<&str> = prs.iter().map(|pr| pr.id.as_str()).collect();
        assert_eq!(ids, ["1", "7"]);
        assert!(prs[1].reviewers_reviewed.is_empty());
    }

    #[test]
    fn keeps_edge_order_and_duplicates() {
        let bytes = wrap(json!([
            { "id": "b", "title": "second",
              "reviewRequests": { "edges": [
                  { "node": { "reviewer": { "login": "zoe" } } },
                  { "node": { "reviewer": { "login": "amy" } } },
                  { "node": { "reviewer": { "login": "zoe" } } },
              ]},
              "reviews": { "edges": [
                  { "node": { "author": { "login": "kim" } } },
                  { "node": { "author": { "login": "ann" } } },
              ]}
            },
            { "id": "a", "title": "first" },
        ]));
        let prs = parse_response(&bytes);
        assert_eq!(prs[0].id, "b");
        assert_eq!(prs[1].id, "a");
        assert_eq!(logins(&prs[0].reviewers_requested), ["zoe", "amy", "zoe"]);
        assert_eq!(logins(&prs[0].reviewers_reviewed), ["kim", "ann"]);
    }

    #[test]
    fn skips_reviewer_without_login_only() {
        let bytes = wrap(json!([
            { "id": "1", "title": "t",
              "reviewRequests": { "edges": [
                  { "node": { "reviewer": { "name": "Team" } } },
                  { "node": { "reviewer": null } },
                  "garbage",
                  { "node": { "reviewer": { "login": "alice", "name": "Alice" } } },
              ]},
              "reviews": { "edges": [
                  { "node": { "author": null } },
                  { "node": { "author": { "login": "bob", "avatarUrl": "https://a/b.png" } } },
              ]}
            },
        ]));
        let prs = parse_response(&bytes);
        assert_eq!(prs.len(), 1);
        let pr = &prs[0];
        assert_eq!(logins(&pr.reviewers_requested), ["alice"]);
        assert_eq!(pr.reviewers_requested[0].name.as_deref(), Some("Alice"));
        assert_eq!(logins(&pr.reviewers_reviewed), ["bob"]);
        assert_eq!(
            pr.reviewers_reviewed[0].avatar_url.as_deref(),
            Some("https://a/b.png")
        );
    }

    #[test]
    fn same_bytes_same_result() {
        let bytes = wrap(json!([
            { "id": "1", "title": "t", "updatedAt": "2017-06-01T10:00:00Z",
              "reviews": { "edges": [ { "node": { "author": { "login": "bob" } } } ] } },
        ]));
        let first = parse_response(&bytes);
        assert_eq!(first, parse_response(&bytes));
        assert_eq!(first[0].updated_at.as_deref(), Some("2017-06-01T10:00:00Z"));
    }

    #[test]
    fn malformed_top_level_is_empty() {
        assert!(parse_response(b"").is_empty());
        assert!(parse_response(b"[1, 2]").is_empty());
        assert!(parse_response(b"{}").is_empty());
        assert!(parse_response(b"{\"data\": ").is_empty());

        assert!(matches!(try_parse_response(b""), Err(ParseError::Json(_))));
        assert!(matches!(try_parse_response(b"[]"), Err(ParseError::NotAnObject)));
        assert!(matches!(try_parse_response(b"{}"), Err(ParseError::MissingData)));
    }

    #[test]
    fn partial_data_is_not_an_error() {
        for body in [
            r#"{"data": null, "errors": [{"message": "Could not resolve to a Repository"}]}"#,
            r#"{"data": {"repository": null}}"#,
            r#"{"data": {"repository": {"pullRequests": {"edges": null}}}}"#,
            r#"{"data": {"repository": {"pullRequests": {"edges": [null, {"node": null}]}}}}"#,
        ] {
            let prs = try_parse_response(body.as_bytes()).unwrap();
            assert!(prs.is_empty(), "{body}");
        }
    }
}
