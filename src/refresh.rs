use crate::error::FetchError;
use crate::github_client::GithubClient;
use crate::parser;
use crate::snapshot::{Applied, CycleCounter, CycleResult, Snapshot, SnapshotStore};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One fetch-parse pass. Only a transport failure is an error.
pub async fn run_cycle(client: &GithubClient) -> Result<Snapshot, FetchError> {
    let bytes = client.fetch_query_result().await?;
    let pull_requests = parser::parse_response(&bytes);
    Ok(Snapshot::from_pull_requests(pull_requests))
}

/// Starts refresh cycles in the background; results arrive on the receiver
/// returned by [`Refresher::new`].
pub struct Refresher {
    client: Arc<GithubClient>,
    counter: CycleCounter,
    results: mpsc::UnboundedSender<CycleResult>,
}

impl Refresher {
    pub fn new(client: GithubClient) -> (Self, mpsc::UnboundedReceiver<CycleResult>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let refresher = Self {
            client: Arc::new(client),
            counter: CycleCounter::default(),
            results: tx,
        };
        (refresher, rx)
    }

    pub fn spawn_cycle(&self) -> u64 {
        let seq = self.counter.next();
        let client = Arc::clone(&self.client);
        let results = self.results.clone();
        log::info!("Refreshing {} (cycle {})", client.repo_full_name(), seq);
        tokio::spawn(async move {
            let outcome = run_cycle(&client).await;
            // The driver may have shut down; nothing left to update then.
            let _ = results.send(CycleResult { seq, outcome });
        });
        seq
    }
}

/// Applies a finished cycle to `store`, returning the new snapshot when it
/// replaced the live one.
pub fn handle_result(store: &mut SnapshotStore, result: CycleResult) -> Option<Arc<Snapshot>> {
    let CycleResult { seq, outcome } = result;
    match outcome {
        Ok(snapshot) => {
            let count = snapshot.pull_requests.len();
            match store.apply(seq, snapshot) {
                Applied::Replaced => {
                    log::info!("Cycle {} done: {} open pull requests", seq, count);
                    Some(store.current())
                }
                Applied::Stale { latest } => {
                    log::warn!("Dropping result of cycle {} (cycle {} already applied)", seq, latest);
                    None
                }
            }
        }
        Err(e) => {
            log::warn!("Cycle {} failed, keeping previous result: {}", seq, e);
            None
        }
    }
}
