use serde::Serialize;

/// A reviewer account. Only `login` takes part in equality and grouping.
#[derive(Serialize, Debug, Clone, Eq)]
pub struct Reviewer {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl Reviewer {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            avatar_url: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }
}

impl PartialEq for Reviewer {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login
    }
}

impl std::hash::Hash for Reviewer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.login.hash(state);
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: String,
    pub title: String,
    pub updated_at: Option<String>,
    /// Requested reviewers in response order, duplicates kept.
    pub reviewers_requested: Vec<Reviewer>,
    /// Review authors in response order, any review state.
    pub reviewers_reviewed: Vec<Reviewer>,
}

impl PullRequest {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            updated_at: None,
            reviewers_requested: Vec::new(),
            reviewers_reviewed: Vec::new(),
        }
    }

    pub fn is_requested(&self, login: &str) -> bool {
        self.reviewers_requested.iter().any(|r| r.login == login)
    }

    pub fn is_reviewed_by(&self, login: &str) -> bool {
        self.reviewers_reviewed.iter().any(|r| r.login == login)
    }
}

/// Workload row for one reviewer, derived from a single PR list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewerLoad {
    pub reviewer: Reviewer,
    pub to_review: usize,
    pub reviewed: usize,
}

impl ReviewerLoad {
    pub fn total(&self) -> usize {
        self.to_review + self.reviewed
    }
}
