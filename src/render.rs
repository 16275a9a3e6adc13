use crate::snapshot::Snapshot;
use std::fmt::Write;

pub fn status_title(snapshot: &Snapshot) -> String {
    match snapshot.pull_requests.len() {
        1 => "1 open PR".to_string(),
        n => format!("{} open PRs", n),
    }
}

/// Text table: one row per reviewer with the "reviewed of total" column.
pub fn reviewer_table(snapshot: &Snapshot) -> String {
    const LOGIN: &str = "Reviewer";
    const TO_REVIEW: &str = "To review";
    const REVIEWED: &str = "Reviewed";

    let rows: Vec<(&str, String, String)> = snapshot
        .workload
        .iter()
        .map(|load| {
            (
                load.reviewer.login.as_str(),
                load.to_review.to_string(),
                format!("{} of {}", load.reviewed, load.total()),
            )
        })
        .collect();

    let login_w = rows.iter().map(|r| r.0.len()).fold(LOGIN.len(), usize::max);
    let to_review_w = rows.iter().map(|r| r.1.len()).fold(TO_REVIEW.len(), usize::max);

    let mut out = String::new();
    let _ = writeln!(out, "{}", status_title(snapshot));
    let _ = writeln!(
        out,
        "{:<login_w$}  {:>to_review_w$}  {}",
        LOGIN, TO_REVIEW, REVIEWED
    );
    for (login, to_review, reviewed) in &rows {
        let _ = writeln!(
            out,
            "{:<login_w$}  {:>to_review_w$}  {}",
            login, to_review, reviewed
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PullRequest, Reviewer};

    #[test]
    fn empty_snapshot() {
        let table = reviewer_table(&Snapshot::default());
        assert_eq!(table, "0 open PRs\nReviewer  To review  Reviewed\n");
    }

    #[test]
    fn rows_show_reviewed_of_total() {
        let mut first = PullRequest::new("1", "Fix bug");
        first.reviewers_requested.push(Reviewer::new("alice"));
        first.reviewers_reviewed.push(Reviewer::new("bob"));
        let snapshot = Snapshot::from_pull_requests(vec![first]);

        assert_eq!(status_title(&snapshot), "1 open PR");
        let table = reviewer_table(&snapshot);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "alice             1  0 of 1");
        assert_eq!(lines[3], "bob               0  1 of 1");
    }
}
