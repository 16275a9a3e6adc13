use crate::models::{PullRequest, Reviewer, ReviewerLoad};
use std::collections::HashMap;

/// Number of pull requests that list `login` as a requested reviewer.
pub fn prs_to_review(login: &str, prs: &[PullRequest]) -> usize {
    prs.iter().filter(|pr| pr.is_requested(login)).count()
}

/// Number of pull requests with at least one review by `login`.
///
/// Not exclusive with [`prs_to_review`]: a reviewer still requested on a PR
/// they already reviewed counts in both.
pub fn prs_reviewed(login: &str, prs: &[PullRequest]) -> usize {
    prs.iter().filter(|pr| pr.is_reviewed_by(login)).count()
}

/// Every login seen across `prs`, in first-encountered order.
///
/// Requested reviewers of a PR are visited before its review authors. Display
/// fields are filled from the first occurrence that carries them.
pub fn distinct_reviewers(prs: &[PullRequest]) -> Vec<Reviewer> {
    let mut reviewers: Vec<Reviewer> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let all = prs
        .iter()
        .flat_map(|pr| pr.reviewers_requested.iter().chain(&pr.reviewers_reviewed));
    for reviewer in all {
        match index.get(reviewer.login.as_str()) {
            Some(&i) => {
                let known = &mut reviewers[i];
                if known.name.is_none() {
                    known.name = reviewer.name.clone();
                }
                if known.avatar_url.is_none() {
                    known.avatar_url = reviewer.avatar_url.clone();
                }
            }
            None => {
                index.insert(reviewer.login.as_str(), reviewers.len());
                reviewers.push(reviewer.clone());
            }
        }
    }
    reviewers
}

/// One row per distinct reviewer, each count from a full scan of `prs`.
pub fn workload(prs: &[PullRequest]) -> Vec<ReviewerLoad> {
    distinct_reviewers(prs)
        .into_iter()
        .map(|reviewer| ReviewerLoad {
            to_review: prs_to_review(&reviewer.login, prs),
            reviewed: prs_reviewed(&reviewer.login, prs),
            reviewer,
        })
        .collect()
}
